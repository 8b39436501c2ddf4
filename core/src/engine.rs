use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Whether a flag toggle changed the display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Result of revealing a cell. `HitMine` ends the round; the caller owns
/// that transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// One playthrough: a fixed truth grid plus the player's view of it. The two
/// grids are index-aligned and only the view is ever mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    minefield: Minefield,
    view: Array2<ViewState>,
    revealed: CellCount,
}

impl Round {
    pub fn new(minefield: Minefield) -> Self {
        Self {
            minefield,
            view: Array2::default((ROWS as usize, COLS as usize)),
            revealed: 0,
        }
    }

    pub fn tile_at(&self, pos: Coord2) -> Tile {
        self.minefield.tile(pos)
    }

    pub fn view_at(&self, pos: Coord2) -> ViewState {
        self.view[pos.idx()]
    }

    pub fn mine_count(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// Cells still hidden or flagged.
    pub fn unrevealed(&self) -> CellCount {
        TOTAL_CELLS - self.revealed
    }

    /// Won once only the mines' worth of cells stays unrevealed. Flags count
    /// as unrevealed; they are never checked against actual mine positions.
    pub fn is_won(&self) -> bool {
        self.unrevealed() == self.minefield.mine_count()
    }

    pub fn reveal(&mut self, pos: Coord2) -> RevealOutcome {
        match self.minefield.tile(pos) {
            // the mine check precedes the flag guard: a flagged mine still
            // detonates when revealed directly
            Tile::Mine => RevealOutcome::HitMine,
            _ if self.view[pos.idx()] == ViewState::Flagged => RevealOutcome::NoChange,
            Tile::Clear(0) => {
                let cells: SmallVec<[Coord2; 9]> = window(pos)
                    .filter(|&p| !self.minefield.is_mine(p))
                    .filter(|&p| self.view[p.idx()] != ViewState::Flagged)
                    .collect();
                let mut changed = false;
                for cell in cells {
                    changed |= self.set_revealed(cell);
                }
                if changed {
                    RevealOutcome::Revealed
                } else {
                    RevealOutcome::NoChange
                }
            }
            Tile::Clear(_) => {
                if self.set_revealed(pos) {
                    RevealOutcome::Revealed
                } else {
                    RevealOutcome::NoChange
                }
            }
        }
    }

    /// Toggles a flag under the cursor. Revealed cells ignore the toggle.
    pub fn toggle_flag(&mut self, pos: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        match self.view[pos.idx()] {
            ViewState::Hidden => {
                self.view[pos.idx()] = ViewState::Flagged;
                Changed
            }
            ViewState::Flagged => {
                self.view[pos.idx()] = ViewState::Hidden;
                Changed
            }
            ViewState::Revealed => NoChange,
        }
    }

    fn set_revealed(&mut self, pos: Coord2) -> bool {
        if self.view[pos.idx()] == ViewState::Hidden {
            self.view[pos.idx()] = ViewState::Revealed;
            self.revealed += 1;
            log::trace!("revealed {:?}", pos);
            true
        } else {
            false
        }
    }
}
