use ndarray::Array2;

use crate::*;

/// The truth grid: mine positions plus precomputed adjacency counts.
/// Immutable once built; a new round gets a freshly generated one.
#[derive(Clone, Debug, PartialEq)]
pub struct Minefield {
    tiles: Array2<Tile>,
    mines: CellCount,
}

impl Minefield {
    /// Builds the truth grid from a mine mask, computing every adjacency
    /// count up front.
    pub fn from_mine_mask(mask: &Array2<bool>) -> Self {
        debug_assert_eq!(mask.dim(), (ROWS as usize, COLS as usize));

        let mines = mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let tiles = Array2::from_shape_fn((ROWS as usize, COLS as usize), |(row, col)| {
            if mask[(row, col)] {
                Tile::Mine
            } else {
                Tile::Clear(adjacent_mines(mask, (row as Coord, col as Coord)))
            }
        });

        Self { tiles, mines }
    }

    /// Builds a board from explicit mine positions. Used by tests and
    /// fixtures; the generator goes through `from_mine_mask`.
    pub fn from_mine_coords(coords: &[Coord2]) -> Result<Self> {
        let mut mask = Array2::from_elem((ROWS as usize, COLS as usize), false);
        for &pos in coords {
            if pos.0 >= ROWS || pos.1 >= COLS {
                return Err(GameError::InvalidCoords);
            }
            mask[pos.idx()] = true;
        }
        Ok(Self::from_mine_mask(&mask))
    }

    pub fn tile(&self, pos: Coord2) -> Tile {
        self.tiles[pos.idx()]
    }

    pub fn is_mine(&self, pos: Coord2) -> bool {
        self.tile(pos).is_mine()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }
}

/// Mines in the clipped 3×3 neighborhood of a cell.
fn adjacent_mines(mask: &Array2<bool>, pos: Coord2) -> u8 {
    neighbors(pos).filter(|&p| mask[p.idx()]).count() as u8
}
