use crate::{COLS, Coord};

/// Joystick axes of the rig.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The two push-buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Reveal,
    Flag,
}

/// The display alphabet, mirroring the custom-character set of the 4×20 LCD.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// An unrevealed tile.
    Tile,
    Flag,
    Mine,
    Blank,
    /// Adjacent-mine count, 1 through 8.
    Digit(u8),
}

/// One full display row.
pub type GlyphRow = [Glyph; COLS as usize];

/// The hardware surface of the rig: joystick ADC, button inputs, LCD output,
/// tick delay. The engine drives everything through this trait; real drivers
/// and the terminal simulator implement it alike.
pub trait Panel {
    /// 8-bit deflection magnitude of one joystick axis.
    fn sample_axis(&mut self, axis: Axis) -> u8;

    /// Level read of one button. Edge detection is the session's job.
    fn button_held(&mut self, button: Button) -> bool;

    /// Writes one fixed-width display row (0-based, top row first).
    fn render_row(&mut self, row: Coord, glyphs: &GlyphRow);

    /// Repositions the visible cell cursor (1-based column and row).
    fn move_cursor(&mut self, col: Coord, row: Coord);

    /// Cooperative sleep between control-loop ticks.
    fn delay_ms(&mut self, ms: u16);
}
