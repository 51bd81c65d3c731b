//! Name-keyed entry points and the configured engine.

use std::path::Path;

use probphoc_batch::{BatchRunner, OutputBuffer};
use probphoc_config::{BatchConfig, ConfigError};
use probphoc_core::{
    registry, MatrixView, PhocError, Probability, Result, ScoreMatrix, Semiring, TriangularScores,
};

fn resolve(variant: &str) -> Result<Semiring> {
    registry::lookup(variant).ok_or_else(|| PhocError::UnknownVariant(variant.to_string()))
}

/// Cross-pairwise scores of every row of `a` against every row of `b`.
///
/// `variant` is a registry key (`sum_prod_real`, `sum_prod_log`,
/// `sum_min_log`, `upper_bound_log`). Runs on rayon's global pool with the
/// default partition.
///
/// # Errors
///
/// [`PhocError::UnknownVariant`] for an unregistered name,
/// [`PhocError::InvalidShape`] if the column counts differ.
pub fn cphoc<T: Probability>(
    variant: &str,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
) -> Result<ScoreMatrix<T>> {
    let variant = resolve(variant)?;
    BatchRunner::new().cross(variant, a, b)
}

/// Packed scores of every unordered pair `i < j` of rows of `x`.
///
/// See [`triangular`](crate::triangular) for the layout.
///
/// # Errors
///
/// [`PhocError::UnknownVariant`] for an unregistered name.
pub fn pphoc<T: Probability>(variant: &str, x: MatrixView<'_, T>) -> Result<TriangularScores<T>> {
    let variant = resolve(variant)?;
    BatchRunner::new().self_pairwise(variant, x)
}

/// A batch scorer built once from [`BatchConfig`] and reused across calls.
///
/// Holds the configured default variant and execution backend. A dedicated
/// thread pool, if configured, lives as long as the engine.
///
/// # Example
///
/// ```
/// use probphoc::{BatchConfig, MatrixView, PhocEngine, Semiring};
///
/// let engine = PhocEngine::new(BatchConfig::new().with_variant(Semiring::SumProdReal));
/// let left = [0.7f32, 0.4, 0.9, 0.6];
/// let right = [0.5f32, 0.9, 0.8, 0.9, 0.1, 0.2];
/// let a = MatrixView::new(&left, 2, 2).unwrap();
/// let b = MatrixView::new(&right, 3, 2).unwrap();
///
/// let scores = engine.cross(a, b).unwrap();
/// assert_eq!(scores.shape(), (2, 3));
/// ```
#[derive(Debug)]
pub struct PhocEngine {
    config: BatchConfig,
    runner: BatchRunner,
}

impl PhocEngine {
    /// Creates an engine from configuration.
    pub fn new(config: BatchConfig) -> Self {
        let runner = BatchRunner::from_config(&config);
        Self { config, runner }
    }

    /// Creates an engine from a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(BatchConfig::load(path)?))
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Variant used by [`cross`](Self::cross) and [`pairwise`](Self::pairwise).
    pub fn default_variant(&self) -> Semiring {
        self.config.variant
    }

    /// Cross-pairwise scores under the configured variant.
    pub fn cross<T: Probability>(
        &self,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
    ) -> Result<ScoreMatrix<T>> {
        self.runner.cross(self.config.variant, a, b)
    }

    /// Cross-pairwise scores under the named variant.
    pub fn cross_with<T: Probability>(
        &self,
        variant: &str,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
    ) -> Result<ScoreMatrix<T>> {
        self.runner.cross(resolve(variant)?, a, b)
    }

    /// Cross-pairwise scores under the named variant, written into `out`.
    pub fn cross_into<T, O>(
        &self,
        variant: &str,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
        out: &mut O,
    ) -> Result<()>
    where
        T: Probability,
        O: OutputBuffer<T> + ?Sized,
    {
        self.runner.cross_into(resolve(variant)?, a, b, out)
    }

    /// Packed self-pairwise scores under the configured variant.
    pub fn pairwise<T: Probability>(&self, x: MatrixView<'_, T>) -> Result<TriangularScores<T>> {
        self.runner.self_pairwise(self.config.variant, x)
    }

    /// Packed self-pairwise scores under the named variant.
    pub fn pairwise_with<T: Probability>(
        &self,
        variant: &str,
        x: MatrixView<'_, T>,
    ) -> Result<TriangularScores<T>> {
        self.runner.self_pairwise(resolve(variant)?, x)
    }

    /// Packed self-pairwise scores under the named variant, written into `out`.
    pub fn pairwise_into<T, O>(&self, variant: &str, x: MatrixView<'_, T>, out: &mut O) -> Result<()>
    where
        T: Probability,
        O: OutputBuffer<T> + ?Sized,
    {
        self.runner.self_pairwise_into(resolve(variant)?, x, out)
    }
}

impl Default for PhocEngine {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("sum_prod_log").unwrap(), Semiring::SumProdLog);
        assert_eq!(
            resolve("bogus").unwrap_err(),
            PhocError::UnknownVariant("bogus".to_string())
        );
    }

    #[test]
    fn test_unknown_variant_leaves_output_untouched() {
        let data = [0.5f64, 0.5];
        let x = MatrixView::new(&data, 2, 1).unwrap();
        let mut out = vec![7.0f64; 3];
        let err = PhocEngine::default()
            .pairwise_into("bogus", x, &mut out)
            .unwrap_err();
        assert!(matches!(err, PhocError::UnknownVariant(_)));
        assert_eq!(out, vec![7.0; 3]);
    }

    #[test]
    fn test_default_variant() {
        let engine = PhocEngine::default();
        assert_eq!(engine.default_variant(), Semiring::SumProdLog);
        assert_eq!(engine.config(), &BatchConfig::default());
    }
}
