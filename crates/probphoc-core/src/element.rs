//! Floating point element types accepted by the scorers.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating point type usable as a probability or log-probability.
///
/// Implemented for `f32` and `f64`. Every scorer and batch driver is generic
/// over this trait, so both precisions run the exact same algorithm.
pub trait Probability: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Short name used in log events ("f32" / "f64").
    const DTYPE: &'static str;
}

impl Probability for f32 {
    const DTYPE: &'static str = "f32";
}

impl Probability for f64 {
    const DTYPE: &'static str = "f64";
}
