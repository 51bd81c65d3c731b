//! Batch scoring for probabilistic PHOC agreement.
//!
//! This crate drives a [`PairScorer`](probphoc_core::PairScorer) over many
//! pairs at once:
//! - Cross-pairwise: every row of one matrix against every row of another
//! - Self-pairwise: every unordered pair of one matrix, packed
//! - Execution strategies ([`Sequential`], [`Rayon`]) behind the [`Executor`] trait
//! - The [`OutputBuffer`] seam for caller-provided storage
//!
//! # Architecture
//!
//! Every score is a pure function of its two rows and lands in a slot
//! computed from `(i, j)`, so blocks of output are filled independently
//! with no locking or ordering between them.

pub mod cross;
pub mod executor;
pub mod output;
pub mod pairwise;
pub mod runner;

pub use cross::{cross_pairwise, cross_pairwise_into};
pub use executor::{Backend, Executor, Rayon, Sequential};
pub use output::OutputBuffer;
pub use pairwise::{self_pairwise, self_pairwise_into};
pub use runner::BatchRunner;
