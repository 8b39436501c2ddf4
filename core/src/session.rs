use rand::prelude::*;

use crate::*;

/// Polling cadence of the control loop.
pub const TICK_MS: u16 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// The full minefield is disclosed; a fresh press starts the next round.
    RoundEnd(RoundResult),
}

/// Debounce by previous-state tracking: a press registers on the rising edge
/// only, however many ticks the button stays held.
#[derive(Copy, Clone, Debug, Default)]
struct EdgeDetector {
    reveal_held: bool,
    flag_held: bool,
}

impl EdgeDetector {
    fn rising(&mut self, button: Button, held: bool) -> bool {
        let slot = match button {
            Button::Reveal => &mut self.reveal_held,
            Button::Flag => &mut self.flag_held,
        };
        let was_held = core::mem::replace(slot, held);
        held && !was_held
    }
}

/// Drives rounds against a `Panel`: cursor movement, debounced button
/// actions, win/loss transitions, and the growing mine count. Owns every
/// piece of mutable game state.
#[derive(Clone, Debug)]
pub struct Session {
    config: RoundConfig,
    round: Round,
    cursor: Cursor,
    state: SessionState,
    buttons: EdgeDetector,
    rng: SmallRng,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_config(RoundConfig::default(), seed)
    }

    pub fn with_config(config: RoundConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let round = generate_round(&config, &mut rng);
        Self {
            config,
            round,
            cursor: Cursor::default(),
            state: SessionState::Playing,
            buttons: EdgeDetector::default(),
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mines(&self) -> CellCount {
        self.config.mines()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// One iteration of the control loop: sample inputs, act, re-render
    /// whatever changed, then yield until the next tick.
    pub fn tick<P: Panel>(&mut self, panel: &mut P) {
        let x = AxisLevel::from_sample(panel.sample_axis(Axis::X));
        let y = AxisLevel::from_sample(panel.sample_axis(Axis::Y));
        let reveal = self
            .buttons
            .rising(Button::Reveal, panel.button_held(Button::Reveal));
        let flag = self
            .buttons
            .rising(Button::Flag, panel.button_held(Button::Flag));

        match self.state {
            SessionState::Playing => {
                if self.cursor.nudge(x, y) {
                    panel.move_cursor(self.cursor.col(), self.cursor.row());
                }
                if reveal {
                    self.reveal_at_cursor(panel);
                } else if flag {
                    let outcome = self.round.toggle_flag(self.cursor.grid_pos());
                    if outcome.has_update() {
                        self.render(panel);
                    }
                }
            }
            SessionState::RoundEnd(_) => {
                // the disclosure stays up until a fresh press of either button
                if reveal || flag {
                    self.start_round(panel);
                }
            }
        }

        panel.delay_ms(TICK_MS);
    }

    /// Pushes all four rows to the display. Row writes move the LCD address
    /// pointer, so the cell cursor is restored afterwards.
    pub fn render<P: Panel>(&self, panel: &mut P) {
        for row in 0..ROWS {
            let mut glyphs = [Glyph::Blank; COLS as usize];
            for col in 0..COLS {
                glyphs[col as usize] = self.glyph_at((row, col));
            }
            panel.render_row(row, &glyphs);
        }
        panel.move_cursor(self.cursor.col(), self.cursor.row());
    }

    fn reveal_at_cursor<P: Panel>(&mut self, panel: &mut P) {
        let pos = self.cursor.grid_pos();
        match self.round.reveal(pos) {
            RevealOutcome::HitMine => {
                log::debug!("mine hit at {:?}", pos);
                self.state = SessionState::RoundEnd(RoundResult::Lost);
                self.render(panel);
            }
            outcome => {
                if self.round.is_won() {
                    log::debug!("round won with {} mines", self.config.mines());
                    self.config.raise_mines();
                    self.state = SessionState::RoundEnd(RoundResult::Won);
                    self.render(panel);
                } else if outcome.has_update() {
                    self.render(panel);
                }
            }
        }
    }

    /// Regenerates the board with the current difficulty. The cursor is
    /// deliberately left where it was.
    fn start_round<P: Panel>(&mut self, panel: &mut P) {
        self.round = generate_round(&self.config, &mut self.rng);
        self.state = SessionState::Playing;
        self.render(panel);
    }

    fn glyph_at(&self, pos: Coord2) -> Glyph {
        match self.state {
            // round over: the whole truth grid is disclosed, mines included
            SessionState::RoundEnd(_) => truth_glyph(self.round.tile_at(pos)),
            SessionState::Playing => match self.round.view_at(pos) {
                ViewState::Hidden => Glyph::Tile,
                ViewState::Flagged => Glyph::Flag,
                ViewState::Revealed => truth_glyph(self.round.tile_at(pos)),
            },
        }
    }
}

fn generate_round(config: &RoundConfig, rng: &mut SmallRng) -> Round {
    Round::new(RandomMinefieldGenerator::new(rng.random()).generate(config))
}

fn truth_glyph(tile: Tile) -> Glyph {
    match tile {
        Tile::Mine => Glyph::Mine,
        Tile::Clear(0) => Glyph::Blank,
        Tile::Clear(count) => Glyph::Digit(count),
    }
}
