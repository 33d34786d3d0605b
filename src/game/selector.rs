//! Random target selection

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::dictionary::{Dictionary, WordSource};

/// Picks target words uniformly at random from the meaningful words of a length
#[derive(Debug, Clone)]
pub struct WordSelector<R = StdRng> {
    rng: R,
}

impl WordSelector<StdRng> {
    /// Selector with a deterministic seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Selector seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> WordSelector<R> {
    /// Wrap any random number generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose a target of `length` letters that has a known meaning
    ///
    /// Returns `None` when no such word exists.
    pub fn select_target<S: WordSource>(
        &mut self,
        dictionary: &Dictionary<S>,
        length: usize,
    ) -> Option<String> {
        let candidates = dictionary.words_of_length(length, true);
        debug!(length, candidates = candidates.len(), "selecting target");

        candidates.choose(&mut self.rng).cloned()
    }
}
