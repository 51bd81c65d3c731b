//! Configured batch runner with run-time scorer selection.

use probphoc_config::BatchConfig;
use probphoc_core::{
    MatrixView, PairScorer, Probability, Result, ScoreMatrix, ScorerVisitor, Semiring,
    TriangularScores,
};

use crate::cross::{cross_pairwise, cross_pairwise_into};
use crate::executor::{Backend, Executor};
use crate::output::OutputBuffer;
use crate::pairwise::{self_pairwise, self_pairwise_into};

/// Runs cross- and self-pairwise batches with one backend and partition.
///
/// The variant is resolved to its concrete scorer once per call, outside
/// the parallel loop.
///
/// # Example
///
/// ```
/// use probphoc_batch::BatchRunner;
/// use probphoc_config::{BackendKind, BatchConfig};
/// use probphoc_core::{MatrixView, Semiring};
///
/// let runner = BatchRunner::from_config(
///     &BatchConfig::new().with_backend(BackendKind::Sequential),
/// );
/// let data = [0.7f64, 0.4, 0.9, 0.4, 0.5, 0.2];
/// let x = MatrixView::new(&data, 3, 2).unwrap();
///
/// let scores = runner.self_pairwise(Semiring::SumProdReal, x).unwrap();
/// assert_eq!(scores.len(), 3);
/// ```
#[derive(Debug)]
pub struct BatchRunner<E = Backend> {
    executor: E,
    cross_block_size: usize,
    self_block_size: usize,
}

impl BatchRunner<Backend> {
    /// Builds a runner with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&BatchConfig::default())
    }

    /// Builds a runner from configuration.
    pub fn from_config(config: &BatchConfig) -> Self {
        Self {
            executor: Backend::new(config.backend, config.thread_count),
            cross_block_size: config.cross_block_size,
            self_block_size: config.self_block_size,
        }
    }
}

impl Default for BatchRunner<Backend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor> BatchRunner<E> {
    /// Builds a runner over a custom executor.
    pub fn with_executor(executor: E, cross_block_size: usize, self_block_size: usize) -> Self {
        Self {
            executor,
            cross_block_size,
            self_block_size,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Cross-pairwise scores of `a x b` under `variant`.
    pub fn cross<T: Probability>(
        &self,
        variant: Semiring,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
    ) -> Result<ScoreMatrix<T>> {
        variant.dispatch::<T, _>(CrossJob { runner: self, a, b })
    }

    /// Cross-pairwise scores of `a x b` under `variant`, written into `out`.
    pub fn cross_into<T, O>(
        &self,
        variant: Semiring,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
        out: &mut O,
    ) -> Result<()>
    where
        T: Probability,
        O: OutputBuffer<T> + ?Sized,
    {
        variant.dispatch::<T, _>(CrossIntoJob {
            runner: self,
            a,
            b,
            out,
        })
    }

    /// Packed self-pairwise scores of `x` under `variant`.
    pub fn self_pairwise<T: Probability>(
        &self,
        variant: Semiring,
        x: MatrixView<'_, T>,
    ) -> Result<TriangularScores<T>> {
        variant.dispatch::<T, _>(SelfJob { runner: self, x })
    }

    /// Packed self-pairwise scores of `x` under `variant`, written into `out`.
    pub fn self_pairwise_into<T, O>(
        &self,
        variant: Semiring,
        x: MatrixView<'_, T>,
        out: &mut O,
    ) -> Result<()>
    where
        T: Probability,
        O: OutputBuffer<T> + ?Sized,
    {
        variant.dispatch::<T, _>(SelfIntoJob {
            runner: self,
            x,
            out,
        })
    }
}

struct CrossJob<'r, 'a, T, E> {
    runner: &'r BatchRunner<E>,
    a: MatrixView<'a, T>,
    b: MatrixView<'a, T>,
}

impl<T: Probability, E: Executor> ScorerVisitor<T> for CrossJob<'_, '_, T, E> {
    type Output = Result<ScoreMatrix<T>>;

    fn visit<S: PairScorer<T>>(self, scorer: S) -> Self::Output {
        let r = self.runner;
        cross_pairwise(scorer, self.a, self.b, &r.executor, r.cross_block_size)
    }
}

struct CrossIntoJob<'r, 'a, T, E, O: ?Sized> {
    runner: &'r BatchRunner<E>,
    a: MatrixView<'a, T>,
    b: MatrixView<'a, T>,
    out: &'r mut O,
}

impl<T, E, O> ScorerVisitor<T> for CrossIntoJob<'_, '_, T, E, O>
where
    T: Probability,
    E: Executor,
    O: OutputBuffer<T> + ?Sized,
{
    type Output = Result<()>;

    fn visit<S: PairScorer<T>>(self, scorer: S) -> Self::Output {
        let r = self.runner;
        cross_pairwise_into(scorer, self.a, self.b, self.out, &r.executor, r.cross_block_size)
    }
}

struct SelfJob<'r, 'a, T, E> {
    runner: &'r BatchRunner<E>,
    x: MatrixView<'a, T>,
}

impl<T: Probability, E: Executor> ScorerVisitor<T> for SelfJob<'_, '_, T, E> {
    type Output = Result<TriangularScores<T>>;

    fn visit<S: PairScorer<T>>(self, scorer: S) -> Self::Output {
        let r = self.runner;
        self_pairwise(scorer, self.x, &r.executor, r.self_block_size)
    }
}

struct SelfIntoJob<'r, 'a, T, E, O: ?Sized> {
    runner: &'r BatchRunner<E>,
    x: MatrixView<'a, T>,
    out: &'r mut O,
}

impl<T, E, O> ScorerVisitor<T> for SelfIntoJob<'_, '_, T, E, O>
where
    T: Probability,
    E: Executor,
    O: OutputBuffer<T> + ?Sized,
{
    type Output = Result<()>;

    fn visit<S: PairScorer<T>>(self, scorer: S) -> Self::Output {
        let r = self.runner;
        self_pairwise_into(scorer, self.x, self.out, &r.executor, r.self_block_size)
    }
}
