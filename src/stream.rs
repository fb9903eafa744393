//! Deterministic pseudo-random float streams.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of pseudo-random floats in `[0, 1)`.
///
/// The graph builder and leaf sampler only consume floats through this trait,
/// so tests can substitute a scripted sequence for exact shape control.
pub trait FloatSource {
    /// Returns the next float in `[0, 1)`.
    fn next_float(&mut self) -> f64;
}

/// Deterministic float stream seeded from a `u64`.
///
/// Same seed, same sequence, independent of call site or timing. Decisions
/// that must not interfere with each other (row shaping vs leaf sampling) use
/// independently constructed streams.
#[derive(Debug, Clone)]
pub struct FloatStream {
    rng: SmallRng,
}

impl FloatStream {
    /// Seed used when no explicit seed is given.
    pub const DEFAULT_SEED: u64 = 0x5eed;

    /// Create a stream with the fixed default seed.
    pub fn new() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }

    /// Create a stream from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for FloatStream {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatSource for FloatStream {
    fn next_float(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Scripted float source for tests: replays a fixed sequence, then cycles.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

#[cfg(test)]
impl FloatSource for ScriptedSource {
    fn next_float(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
