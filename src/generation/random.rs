// ============================================================
// Layer 5: Randomness
// ============================================================
// The option shuffle is the only non-deterministic step in the
// pipeline. It draws from a RandomSource so production can use a
// real generator and tests can pin the sequence.
//
// Fisher-Yates: walk i from the end, swap a[i] with a[j] where
// j = floor(r * (i + 1)) and r is uniform in [0, 1).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::traits::RandomSource;

/// Any `rand` generator as a RandomSource
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Seeded when a seed is given (reproducible quizzes), otherwise
/// seeded from OS entropy.
pub fn source_from_seed(seed: Option<u64>) -> RngSource<StdRng> {
    match seed {
        Some(seed) => RngSource::new(StdRng::seed_from_u64(seed)),
        None       => RngSource::new(StdRng::from_entropy()),
    }
}

/// Uniform in-place shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let r = rng.next_f64();
        // A misbehaving source returning 1.0 must not index past i
        let j = ((r * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[cfg(test)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos:    usize,
}

#[cfg(test)]
impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceSource needs at least one value");
        Self { values, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
