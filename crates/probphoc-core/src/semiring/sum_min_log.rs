//! Log-domain minimum-reduction scorer

use super::PairScorer;
use crate::arith::log_agreement;
use crate::element::Probability;

/// Log agreement of the single least-agreeing dimension.
///
/// Same per-dimension term as [`SumProdLog`](super::SumProdLog), reduced with
/// `min` instead of `+`. An empty vector scores `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumMinLog;

impl<T: Probability> PairScorer<T> for SumMinLog {
    fn name(&self) -> &'static str {
        "sum_min_log"
    }

    fn score(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .map(|(&la, &lb)| log_agreement(la, lb))
            .reduce(T::min)
            .unwrap_or_else(T::zero)
    }
}
