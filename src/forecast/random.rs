//! Random number sources for forecast generation.

use rand::Rng;

/// Source of the random draws used by the forecast generator.
///
/// Both methods follow half-open semantics: the lower bound is inclusive and the
/// upper bound exclusive. Implementations are shared across requests, so they
/// must be `Send + Sync`.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in `[min, max)`.
    fn next_in_range(&self, min: i32, max: i32) -> i32;

    /// Returns an integer in `[0, max)`.
    fn next_below(&self, max: i32) -> i32;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..max)
    }

    fn next_below(&self, max: i32) -> i32 {
        self.next_in_range(0, max)
    }
}
