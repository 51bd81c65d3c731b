//! probphoc core - pair scorers for probabilistic binary fingerprints
//!
//! A probabilistic fingerprint stores, per dimension, the probability that a
//! binary attribute is present. This crate scores how likely two such
//! fingerprints are to have identical hidden binary realizations:
//! - Element types (`f32`, `f64`) through the [`Probability`] trait
//! - Stable log-domain primitives ([`arith`])
//! - The four shipped pair scorers and the [`Semiring`] selector
//! - The name-keyed scorer [`registry`]
//! - Matrix views and score containers, including packed triangular storage
//!
//! # Example
//!
//! ```
//! use probphoc_core::Semiring;
//!
//! let a = [0.0f64, 0.0]; // log(1): attribute certainly present
//! let score = Semiring::SumProdLog.score_pair(&a, &a).unwrap();
//! assert_eq!(score, 0.0);
//! ```

pub mod arith;
pub mod element;
pub mod error;
pub mod matrix;
pub mod registry;
pub mod semiring;
pub mod triangular;

pub use element::Probability;
pub use error::{PhocError, Result};
pub use matrix::{MatrixView, ScoreMatrix, TriangularScores};
pub use semiring::{
    PairScorer, ScorerVisitor, Semiring, SumMinLog, SumProdLog, SumProdReal, UpperBoundLog,
};
