//! Pair scorer trait definition

use std::fmt::Debug;

use crate::element::Probability;

/// A combination rule reducing two probability vectors to one agreement score.
///
/// Implementations are stateless and pure: a score depends only on the two
/// rows passed in, which makes every pair in a batch independent of every
/// other pair. The dimension `d` is the slice length; callers guarantee
/// `a.len() == b.len()`.
pub trait PairScorer<T: Probability>: Copy + Debug + Send + Sync + 'static {
    /// Registry key of this scorer.
    fn name(&self) -> &'static str;

    /// Scores one pair of rows.
    fn score(&self, a: &[T], b: &[T]) -> T;
}

/// Receives the concrete scorer selected by [`Semiring::dispatch`](super::Semiring::dispatch).
///
/// The visitor's `visit` is monomorphized per scorer, so hot loops inside it
/// call `score` statically.
pub trait ScorerVisitor<T: Probability> {
    type Output;

    fn visit<S: PairScorer<T>>(self, scorer: S) -> Self::Output;
}
