//! Shared test fixtures for probphoc crates.
//!
//! This crate provides plain data and pure functions for testing. It does NOT
//! depend on `probphoc-core`, so fixtures are `Vec<f64>` buffers and callers
//! wrap them in their own views.
//!
//! - [`fixtures`] - small hand-checked matrices with expected scores
//! - [`random`] - seeded random probability matrices
//! - [`reference`] - brute-force agreement over all joint realizations
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! probphoc-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod random;
pub mod reference;

pub use fixtures::{
    cross_expected, cross_left, cross_right, self_expected, self_input, to_f32, to_log,
};
pub use random::{random_log_probabilities, random_probabilities, random_with_extremes};
pub use reference::brute_force_agreement;
