//! Self-pairwise scoring: every unordered pair `i < j` of one matrix.
//!
//! Work is partitioned over the flat packed output, not by row. Row `i` owns
//! `n - i - 1` pairs, so splitting by row leaves the first workers with most
//! of the work; fixed-size blocks of consecutive pairs keep every worker
//! equally loaded. Each block starts from the closed-form pair at its offset
//! and walks forward through valid pairs only.

use std::time::Instant;

use probphoc_core::triangular::PairIter;
use probphoc_core::{MatrixView, PairScorer, PhocError, Probability, Result, TriangularScores};
use tracing::debug;

use crate::cross::log_batch_end;
use crate::executor::Executor;
use crate::output::{prepare, OutputBuffer};

/// Scores every pair `i < j` of `x` into `out` in packed order.
///
/// `out` is shaped to exactly `n(n-1)/2` scores; pair `(i, j)` lands at
/// `i(2n-i-1)/2 + (j-i-1)`. Self pairs are not scored.
///
/// # Errors
///
/// - [`PhocError::InvalidShape`] if the packed size overflows `usize`
/// - [`PhocError::AllocationInvariantViolation`] if `out` cannot be shaped
pub fn self_pairwise_into<T, S, E, O>(
    scorer: S,
    x: MatrixView<'_, T>,
    out: &mut O,
    executor: &E,
    block_size: usize,
) -> Result<()>
where
    T: Probability,
    S: PairScorer<T>,
    E: Executor,
    O: OutputBuffer<T> + ?Sized,
{
    let (n, d) = x.shape();
    let pairs = n
        .checked_mul(n.saturating_sub(1))
        .map(|v| v / 2)
        .ok_or_else(|| PhocError::InvalidShape(format!("pairs of {n} rows overflow usize")))?;
    let y = prepare(out, pairs)?;

    debug!(
        event = "batch_start",
        mode = "self",
        variant = scorer.name(),
        dtype = T::DTYPE,
        rows = n,
        dims = d,
        pairs = pairs,
        backend = executor.name(),
    );
    let start = Instant::now();

    executor.fill_blocks(y, block_size, |offset, block| {
        for ((i, j), slot) in PairIter::new(offset, block.len(), n).zip(block.iter_mut()) {
            *slot = scorer.score(x.row(i), x.row(j));
        }
    });

    log_batch_end("self", pairs, start);
    Ok(())
}

/// Scores every pair `i < j` of `x` into a new [`TriangularScores`].
///
/// # Errors
///
/// Same as [`self_pairwise_into`].
pub fn self_pairwise<T, S, E>(
    scorer: S,
    x: MatrixView<'_, T>,
    executor: &E,
    block_size: usize,
) -> Result<TriangularScores<T>>
where
    T: Probability,
    S: PairScorer<T>,
    E: Executor,
{
    let mut out = Vec::new();
    self_pairwise_into(scorer, x, &mut out, executor, block_size)?;
    TriangularScores::from_vec(out, x.nrows())
}
