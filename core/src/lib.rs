#![no_std]

extern crate alloc;

pub use cursor::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use panel::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod cursor;
mod engine;
mod error;
mod generator;
mod minefield;
mod panel;
mod session;
mod tile;
mod types;

/// Visible rows of the character display.
pub const ROWS: Coord = 4;
/// Visible columns of the character display.
pub const COLS: Coord = 20;
/// Cell count of the fixed board.
pub const TOTAL_CELLS: CellCount = ROWS as CellCount * COLS as CellCount;
/// First-round difficulty; raised by one mine after every win.
pub const STARTING_MINES: CellCount = 8;

/// Per-round parameters, validated once before any board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    mines: CellCount,
}

impl RoundConfig {
    /// Fails fast on a mine count the board cannot hold; the placement loop
    /// in the generator would otherwise never terminate.
    pub fn new(mines: CellCount) -> Result<Self> {
        if mines >= TOTAL_CELLS {
            return Err(GameError::TooManyMines);
        }
        Ok(Self { mines })
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// Next-round difficulty after a win. Clamped below the cell total so
    /// every later round stays generable.
    pub fn raise_mines(&mut self) {
        if self.mines + 1 >= TOTAL_CELLS {
            log::warn!("mine count at board capacity, not raising");
            return;
        }
        self.mines += 1;
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            mines: STARTING_MINES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_counts_the_board_cannot_hold() {
        assert_eq!(RoundConfig::new(TOTAL_CELLS), Err(GameError::TooManyMines));
        assert_eq!(RoundConfig::new(200), Err(GameError::TooManyMines));
        assert!(RoundConfig::new(TOTAL_CELLS - 1).is_ok());
    }

    #[test]
    fn raising_mines_clamps_at_capacity() {
        let mut config = RoundConfig::new(TOTAL_CELLS - 1).unwrap();
        config.raise_mines();
        assert_eq!(config.mines(), TOTAL_CELLS - 1);

        let mut config = RoundConfig::default();
        config.raise_mines();
        assert_eq!(config.mines(), STARTING_MINES + 1);
    }
}
