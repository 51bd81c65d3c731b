//! Log-domain sum-product scorer

use super::PairScorer;
use crate::arith::log_agreement;
use crate::element::Probability;

/// Log of the joint agreement probability, computed in log space.
///
/// Inputs are log presence probabilities. The result equals the log of
/// [`SumProdReal`](super::SumProdReal) on the exponentiated inputs, without
/// its underflow. This is the default scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumProdLog;

impl<T: Probability> PairScorer<T> for SumProdLog {
    fn name(&self) -> &'static str {
        "sum_prod_log"
    }

    fn score(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(T::zero(), |acc, (&la, &lb)| acc + log_agreement(la, lb))
    }
}
