//! Cross-pairwise scoring: every row of `A` against every row of `B`.

use std::time::Instant;

use probphoc_core::{MatrixView, PairScorer, PhocError, Probability, Result, ScoreMatrix};
use tracing::debug;

use crate::executor::Executor;
use crate::output::{prepare, OutputBuffer};

/// Scores every `(i, j)` of `a x b` into `out`, entry `(i, j)` at `i * nb + j`.
///
/// `out` is shaped to exactly `na * nb` scores. The output is split into
/// blocks of `block_size` consecutive entries; each block is filled
/// independently by `executor`.
///
/// # Errors
///
/// - [`PhocError::InvalidShape`] if the column counts differ
/// - [`PhocError::AllocationInvariantViolation`] if `out` cannot be shaped
///
/// Both are raised before any score is computed.
pub fn cross_pairwise_into<T, S, E, O>(
    scorer: S,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
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
    if a.ncols() != b.ncols() {
        return Err(PhocError::InvalidShape(format!(
            "input matrices must have the same number of columns, got {} and {}",
            a.ncols(),
            b.ncols()
        )));
    }
    let (na, nb, d) = (a.nrows(), b.nrows(), a.ncols());
    let pairs = na.checked_mul(nb).ok_or_else(|| {
        PhocError::InvalidShape(format!("{na} x {nb} score matrix overflows usize"))
    })?;
    let y = prepare(out, pairs)?;

    debug!(
        event = "batch_start",
        mode = "cross",
        variant = scorer.name(),
        dtype = T::DTYPE,
        rows_a = na,
        rows_b = nb,
        dims = d,
        pairs = pairs,
        backend = executor.name(),
    );
    let start = Instant::now();

    executor.fill_blocks(y, block_size, |offset, block| {
        for (k, slot) in (offset..).zip(block.iter_mut()) {
            *slot = scorer.score(a.row(k / nb), b.row(k % nb));
        }
    });

    log_batch_end("cross", pairs, start);
    Ok(())
}

/// Scores every `(i, j)` of `a x b` into a new [`ScoreMatrix`].
///
/// # Errors
///
/// Same as [`cross_pairwise_into`].
pub fn cross_pairwise<T, S, E>(
    scorer: S,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    executor: &E,
    block_size: usize,
) -> Result<ScoreMatrix<T>>
where
    T: Probability,
    S: PairScorer<T>,
    E: Executor,
{
    let mut out = Vec::new();
    cross_pairwise_into(scorer, a, b, &mut out, executor, block_size)?;
    ScoreMatrix::from_vec(out, a.nrows(), b.nrows())
}

pub(crate) fn log_batch_end(mode: &'static str, pairs: usize, start: Instant) {
    let duration = start.elapsed();
    let speed = if duration.as_secs_f64() > 0.0 {
        (pairs as f64 / duration.as_secs_f64()) as u64
    } else {
        0
    };
    debug!(
        event = "batch_end",
        mode = mode,
        pairs = pairs,
        duration_ms = duration.as_millis() as u64,
        speed = speed,
    );
}
