//! Seeded random probability matrices.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `rows * cols` probabilities drawn uniformly from `[0, 1)`.
pub fn random_probabilities(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows * cols).map(|_| rng.random::<f64>()).collect()
}

/// Log of [`random_probabilities`], bounded away from `-inf`.
pub fn random_log_probabilities(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows * cols)
        .map(|_| rng.random_range(1e-6..1.0f64).ln())
        .collect()
}

/// Probabilities where roughly a quarter of the entries are exactly 0 or 1.
pub fn random_with_extremes(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows * cols)
        .map(|_| match rng.random_range(0..8u32) {
            0 => 0.0,
            1 => 1.0,
            _ => rng.random::<f64>(),
        })
        .collect()
}
