//! Execution strategies for batch loops.
//!
//! A batch writes every score into its own slot of one dense output buffer.
//! Executors split that buffer into fixed-size blocks and hand each block,
//! with its starting offset, to a fill function. Blocks are disjoint, so the
//! fill function needs no locking and block order does not matter.

use std::fmt::Debug;

use probphoc_config::{BackendKind, ThreadCount};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Supplies the loop construct a batch call runs its blocks with.
pub trait Executor: Debug + Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Splits `out` into blocks of `block_len` elements (the last may be
    /// shorter) and calls `fill(offset, block)` once per block.
    ///
    /// A `block_len` of 0 is treated as 1.
    fn fill_blocks<T, F>(&self, out: &mut [T], block_len: usize, fill: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync;
}

/// Runs every block on the calling thread, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Executor for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn fill_blocks<T, F>(&self, out: &mut [T], block_len: usize, fill: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        let block_len = block_len.max(1);
        for (b, block) in out.chunks_mut(block_len).enumerate() {
            fill(b * block_len, block);
        }
    }
}

/// Runs blocks on a rayon thread pool.
///
/// Uses rayon's global pool unless built with an explicit thread count.
#[derive(Debug, Default)]
pub struct Rayon {
    pool: Option<rayon::ThreadPool>,
}

impl Rayon {
    /// Executor on rayon's global pool.
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Executor on a dedicated pool of `threads` workers.
    ///
    /// Falls back to the global pool if the dedicated pool cannot be built.
    pub fn with_threads(threads: usize) -> Self {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Self { pool: Some(pool) },
            Err(err) => {
                warn!(
                    event = "thread_pool_fallback",
                    threads = threads,
                    error = %err,
                    "Could not build a dedicated thread pool, using the global pool"
                );
                Self::global()
            }
        }
    }

    /// Number of worker threads blocks are spread over.
    pub fn current_num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for Rayon {
    fn name(&self) -> &'static str {
        "rayon"
    }

    fn fill_blocks<T, F>(&self, out: &mut [T], block_len: usize, fill: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        let block_len = block_len.max(1);
        match &self.pool {
            Some(pool) => pool.install(|| par_fill(out, block_len, &fill)),
            None => par_fill(out, block_len, &fill),
        }
    }
}

fn par_fill<T, F>(out: &mut [T], block_len: usize, fill: &F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    out.par_chunks_mut(block_len)
        .enumerate()
        .for_each(|(b, block)| fill(b * block_len, block));
}

/// Executor selected once per engine from configuration.
#[derive(Debug)]
pub enum Backend {
    Sequential(Sequential),
    Parallel(Rayon),
}

impl Backend {
    /// Builds the backend described by `kind` and `threads`.
    pub fn new(kind: BackendKind, threads: ThreadCount) -> Self {
        let backend = match (kind, threads) {
            (BackendKind::Sequential, _) => Backend::Sequential(Sequential),
            (BackendKind::Parallel, ThreadCount::Auto) => Backend::Parallel(Rayon::global()),
            (BackendKind::Parallel, ThreadCount::Count(_)) => {
                Backend::Parallel(Rayon::with_threads(threads.resolve()))
            }
        };
        debug!(
            event = "backend_ready",
            backend = backend.name(),
            thread_count = %threads,
            threads = backend.threads(),
        );
        backend
    }

    /// Number of threads blocks run on.
    pub fn threads(&self) -> usize {
        match self {
            Backend::Sequential(_) => 1,
            Backend::Parallel(rayon) => rayon.current_num_threads(),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Parallel(Rayon::global())
    }
}

impl Executor for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::Sequential(e) => e.name(),
            Backend::Parallel(e) => e.name(),
        }
    }

    fn fill_blocks<T, F>(&self, out: &mut [T], block_len: usize, fill: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        match self {
            Backend::Sequential(e) => e.fill_blocks(out, block_len, fill),
            Backend::Parallel(e) => e.fill_blocks(out, block_len, fill),
        }
    }
}
