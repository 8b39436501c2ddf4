use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform placement by rejection sampling: draw random cells, retry on
/// collision, until the configured number of distinct mines is set. There is
/// no attempt bound, and retries get dense as the count approaches the cell
/// total; `RoundConfig` keeps the count strictly below it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: &RoundConfig) -> Minefield {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mask = Array2::from_elem((ROWS as usize, COLS as usize), false);
        let mut placed: CellCount = 0;

        while placed < config.mines() {
            let pos = (rng.random_range(0..ROWS), rng.random_range(0..COLS));
            if !mask[pos.idx()] {
                mask[pos.idx()] = true;
                placed += 1;
            }
        }

        log::debug!("placed {} mines (seed {})", placed, self.seed);
        Minefield::from_mine_mask(&mask)
    }
}
