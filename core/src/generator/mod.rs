use crate::*;
pub use random::*;

mod random;

/// Strategy seam for producing a round's truth grid.
pub trait MinefieldGenerator {
    fn generate(self, config: &RoundConfig) -> Minefield;
}
