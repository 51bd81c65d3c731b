//! probphoc - agreement scores between probabilistic binary fingerprints
//!
//! Each fingerprint holds, per dimension, the probability that a binary
//! attribute is present. Scores estimate how likely two fingerprints are to
//! share the same hidden binary realization, for every pair across two
//! collections ([`cphoc`]) or within one ([`pphoc`]).
//!
//! # Example
//!
//! ```rust
//! use probphoc::prelude::*;
//!
//! // two 2-dimensional fingerprints, as log probabilities
//! let data: Vec<f64> = [0.7, 0.4, 0.9, 0.4].iter().map(|p: &f64| p.ln()).collect();
//! let x = MatrixView::new(&data, 2, 2).unwrap();
//!
//! let scores = probphoc::pphoc("sum_prod_log", x).unwrap();
//! let expected = ((0.7 * 0.9 + 0.3 * 0.1) * (0.4 * 0.4 + 0.6 * 0.6f64)).ln();
//! assert!((scores.as_slice()[0] - expected).abs() < 1e-12);
//!
//! assert!(probphoc::pphoc("no_such_variant", x).is_err());
//! ```

// Core types
pub use probphoc_core::{
    arith, registry, triangular, MatrixView, PairScorer, PhocError, Probability, Result,
    ScoreMatrix, ScorerVisitor, Semiring, SumMinLog, SumProdLog, SumProdReal, TriangularScores,
    UpperBoundLog,
};

// Configuration
pub use probphoc_config::{BackendKind, BatchConfig, ConfigError, ThreadCount};

// Batch drivers
pub use probphoc_batch::{
    cross_pairwise, cross_pairwise_into, self_pairwise, self_pairwise_into, Backend, BatchRunner,
    Executor, OutputBuffer, Rayon, Sequential,
};

#[cfg(feature = "console")]
pub mod console;

mod engine;
pub use engine::{cphoc, pphoc, PhocEngine};

pub mod prelude {
    pub use super::{cphoc, pphoc, PhocEngine};
    pub use super::{BatchConfig, MatrixView, PhocError, ScoreMatrix, Semiring, TriangularScores};
}
