//! Log-domain upper-bound approximation scorer

use super::PairScorer;
use crate::arith::log_complement;
use crate::element::Probability;

/// Single-pass bound on the joint log agreement.
///
/// Scans dimensions left to right keeping three values: the current bound,
/// and for each vector the running minimum of `max(log presence, log absence)`.
/// Each step takes the better of "both absent" and "both present", each
/// clamped by the running bound and by what the other vector could still
/// contribute. An empty vector scores `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpperBoundLog;

impl<T: Probability> PairScorer<T> for UpperBoundLog {
    fn name(&self) -> &'static str {
        "upper_bound_log"
    }

    fn score(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        let (Some(&a1), Some(&b1)) = (a.first(), b.first()) else {
            return T::zero();
        };

        let (a0, b0) = (log_complement(a1), log_complement(b1));
        let mut ma = a1.max(a0);
        let mut mb = b1.max(b0);
        let mut result = (a1 + b1).max(a0 + b0);

        for (&a1, &b1) in a.iter().zip(b).skip(1) {
            let (a0, b0) = (log_complement(a1), log_complement(b1));
            let min0 = (a0 + b0).min(a0 + mb).min(b0 + ma).min(result);
            let min1 = (a1 + b1).min(a1 + mb).min(b1 + ma).min(result);
            result = min0.max(min1);
            ma = ma.min(a0.max(a1));
            mb = mb.min(b0.max(b1));
        }
        result
    }
}
