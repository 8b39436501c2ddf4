use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use sapeur_core::{CellCount, RoundResult, Session, SessionState};

use crate::panel::TerminalPanel;

mod panel;

#[derive(Parser, Debug)]
#[command(version, about = "4x20 character-LCD minesweeper on the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of the system clock
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("session seed: {}", seed);

    let mut session = Session::new(seed);
    let mut panel = TerminalPanel::new();

    panel.print_help();
    println!("First round: {} mines.", session.mines());
    session.render(&mut panel);
    panel.flush_frame()?;

    while panel.next_tick()? {
        let before = session.state();
        session.tick(&mut panel);
        panel.flush_frame()?;
        announce(before, session.state(), session.mines());
    }

    Ok(())
}

/// Seed substitute in the spirit of the rig's free-running timer: the system
/// clock, unless `--seed` pins it for a reproducible session.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn announce(before: SessionState, after: SessionState, mines: CellCount) {
    if before == after {
        return;
    }
    match after {
        SessionState::RoundEnd(RoundResult::Lost) => {
            println!("Boom. Press r or f for a new round.");
        }
        SessionState::RoundEnd(RoundResult::Won) => {
            println!("Field cleared! The next round has {mines} mines. Press r or f.");
        }
        SessionState::Playing => {
            println!("New round: {mines} mines.");
        }
    }
}
