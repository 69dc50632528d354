//! Injectable random sources
//!
//! Fillers and the merger only ever need a uniform draw in `[0, 1)`. Keeping
//! that behind a small trait lets callers swap the thread RNG for a seeded
//! one (reproducible pages) or a scripted sequence (exact tests).

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Non-deterministic source backed by rand's thread-local generator
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        ThreadRandom { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Reproducible source: the same seed always yields the same layout
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)` so a script can never produce an
/// out-of-range index.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRandom { values, pos: 0 }
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Uniform index in `0..len` (`len` must be non-zero)
pub fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    let idx = (rng.next_unit() * len as f64).floor() as usize;
    idx.min(len.saturating_sub(1))
}
