use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Returns a uniformly random permutation of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Layout strategy that places the whole catalog in a purely random order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self) -> TileLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let shuffled = shuffle(&Card::CATALOG, &mut rng);
        log::trace!("layout for seed {}: {:?}", self.seed, shuffled);
        TileLayout::from_cards_unchecked(shuffled)
    }
}
