//! Random source for the simulation
//!
//! All randomness in a run is drawn through [`SimRng`], so a seeded PCG stream
//! reproduces a run exactly and tests can script individual draws.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer and Bernoulli draws
pub trait SimRng {
    /// Uniform integer in `[0, n)`. `n` must be nonzero.
    fn below(&mut self, n: u32) -> u32;

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;

    /// True with probability `1/n`, drawn as `below(n) == 0`
    fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }

    /// Uniform integer in `[lo, hi]`
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        lo + self.below((hi - lo + 1) as u32) as i32
    }
}

/// Production random source backed by PCG32
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SimRng for SeededRng {
    fn below(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays a fixed list of draws, then falls back to zero
///
/// Each `below(n)` consumes one value and reduces it modulo `n`; `chance`
/// consumes one value and succeeds when it is zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl SimRng for ScriptedRng {
    fn below(&mut self, n: u32) -> u32 {
        self.values.pop_front().unwrap_or(0) % n
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.values.pop_front().unwrap_or(0) == 0
    }
}
