//! Real-domain sum-product scorer

use super::PairScorer;
use crate::element::Probability;

/// Joint probability that two realizations agree on every dimension.
///
/// Inputs are linear probabilities in `[0, 1]`. Each dimension contributes
/// `(1 - a)(1 - b) + ab` and dimensions multiply. The product underflows for
/// long vectors; prefer [`SumProdLog`](super::SumProdLog) outside small `d`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumProdReal;

impl<T: Probability> PairScorer<T> for SumProdReal {
    fn name(&self) -> &'static str {
        "sum_prod_real"
    }

    fn score(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        let one = T::one();
        a.iter().zip(b).fold(one, |acc, (&pa, &pb)| {
            let ph0 = (one - pa) * (one - pb);
            let ph1 = pa * pb;
            acc * (ph0 + ph1)
        })
    }
}
