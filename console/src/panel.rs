use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use sapeur_core::{Axis, Button, COLS, Coord, Glyph, GlyphRow, Panel, ROWS};

const CENTER: u8 = 127;
const DEFLECT_LOW: u8 = 0;
const DEFLECT_HIGH: u8 = 255;

/// One tick's worth of simulated rig input: axes resting at mid-scale,
/// buttons released, unless a command deflects them.
#[derive(Copy, Clone, Debug)]
struct TickInput {
    x: u8,
    y: u8,
    reveal: bool,
    flag: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            x: CENTER,
            y: CENTER,
            reveal: false,
            flag: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Left,
    Right,
    Up,
    Down,
    Reveal,
    Flag,
    Idle,
    Quit,
}

fn parse_command(c: char) -> Option<Command> {
    Some(match c.to_ascii_lowercase() {
        'a' => Command::Left,
        'd' => Command::Right,
        'w' => Command::Up,
        's' => Command::Down,
        'r' => Command::Reveal,
        'f' => Command::Flag,
        '.' => Command::Idle,
        'q' => Command::Quit,
        _ => return None,
    })
}

impl Command {
    fn tick_input(self) -> TickInput {
        let mut input = TickInput::default();
        match self {
            Command::Left => input.x = DEFLECT_LOW,
            Command::Right => input.x = DEFLECT_HIGH,
            Command::Up => input.y = DEFLECT_LOW,
            Command::Down => input.y = DEFLECT_HIGH,
            Command::Reveal => input.reveal = true,
            Command::Flag => input.flag = true,
            Command::Idle | Command::Quit => {}
        }
        input
    }
}

fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Tile => '#',
        Glyph::Flag => 'F',
        Glyph::Mine => '*',
        Glyph::Blank => ' ',
        Glyph::Digit(count) => (b'0' + count) as char,
    }
}

/// The simulated rig: a framed 4×20 character display on stdout, command
/// characters standing in for joystick deflection and button presses. Each
/// command character is one control-loop tick.
pub struct TerminalPanel {
    queue: VecDeque<Command>,
    current: TickInput,
    frame: [[char; COLS as usize]; ROWS as usize],
    cursor: (Coord, Coord),
    dirty: bool,
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            current: TickInput::default(),
            frame: [[' '; COLS as usize]; ROWS as usize],
            cursor: (COLS / 2, ROWS / 2),
            dirty: false,
        }
    }

    pub fn print_help(&self) {
        println!("a/d/w/s move, r reveal, f flag, . wait, q quit");
        println!("Commands chain on one line: dddr moves right three times, then digs.");
    }

    /// Stages the next tick's input, reading a fresh command line once the
    /// queue runs dry. Returns false on quit or end of input.
    pub fn next_tick(&mut self) -> io::Result<bool> {
        while self.queue.is_empty() {
            let mut line = String::new();
            print!("> ");
            io::stdout().flush()?;
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.queue.extend(line.chars().filter_map(parse_command));
        }
        match self.queue.pop_front() {
            Some(Command::Quit) | None => Ok(false),
            Some(command) => {
                self.current = command.tick_input();
                Ok(true)
            }
        }
    }

    /// Redraws the framed display if anything changed since the last flush.
    pub fn flush_frame(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "+{}+", "-".repeat(COLS as usize))?;
        for (row, glyphs) in self.frame.iter().enumerate() {
            write!(out, "|")?;
            for (col, &c) in glyphs.iter().enumerate() {
                if self.cursor == (col as Coord + 1, row as Coord + 1) {
                    // reverse video marks the cell under the LCD cursor
                    write!(out, "\x1b[7m{c}\x1b[0m")?;
                } else {
                    write!(out, "{c}")?;
                }
            }
            writeln!(out, "|")?;
        }
        writeln!(out, "+{}+", "-".repeat(COLS as usize))?;
        out.flush()
    }
}

impl Panel for TerminalPanel {
    fn sample_axis(&mut self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.current.x,
            Axis::Y => self.current.y,
        }
    }

    fn button_held(&mut self, button: Button) -> bool {
        match button {
            Button::Reveal => self.current.reveal,
            Button::Flag => self.current.flag,
        }
    }

    fn render_row(&mut self, row: Coord, glyphs: &GlyphRow) {
        for (col, &glyph) in glyphs.iter().enumerate() {
            self.frame[row as usize][col] = glyph_char(glyph);
        }
        self.dirty = true;
    }

    fn move_cursor(&mut self, col: Coord, row: Coord) {
        if self.cursor != (col, row) {
            self.cursor = (col, row);
            self.dirty = true;
        }
    }

    fn delay_ms(&mut self, _ms: u16) {
        // line input already paces the loop; the 100 ms tick is not simulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_map_to_single_tick_inputs() {
        let input = Command::Left.tick_input();
        assert_eq!(input.x, DEFLECT_LOW);
        assert_eq!(input.y, CENTER);
        assert!(!input.reveal && !input.flag);

        let input = Command::Down.tick_input();
        assert_eq!(input.y, DEFLECT_HIGH);
        assert_eq!(input.x, CENTER);

        let input = Command::Reveal.tick_input();
        assert!(input.reveal && !input.flag);
        assert_eq!((input.x, input.y), (CENTER, CENTER));
    }

    #[test]
    fn command_characters_parse_case_insensitively() {
        assert_eq!(parse_command('a'), Some(Command::Left));
        assert_eq!(parse_command('D'), Some(Command::Right));
        assert_eq!(parse_command('q'), Some(Command::Quit));
        assert_eq!(parse_command('.'), Some(Command::Idle));
    }

    #[test]
    fn unknown_characters_are_ignored() {
        assert_eq!(parse_command('z'), None);
        assert_eq!(parse_command(' '), None);
        assert_eq!(parse_command('\n'), None);
    }

    #[test]
    fn glyphs_print_as_single_characters() {
        assert_eq!(glyph_char(Glyph::Tile), '#');
        assert_eq!(glyph_char(Glyph::Flag), 'F');
        assert_eq!(glyph_char(Glyph::Mine), '*');
        assert_eq!(glyph_char(Glyph::Blank), ' ');
        assert_eq!(glyph_char(Glyph::Digit(3)), '3');
        assert_eq!(glyph_char(Glyph::Digit(8)), '8');
    }
}
