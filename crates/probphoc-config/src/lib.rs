//! Configuration system for probphoc.
//!
//! Load batch scoring configuration from TOML or YAML files to pick the
//! scorer, the execution backend and the work partition without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use probphoc_config::{BackendKind, BatchConfig, ThreadCount};
//! use probphoc_core::Semiring;
//!
//! let config = BatchConfig::from_toml_str(r#"
//!     variant = "sum_min_log"
//!     backend = "parallel"
//!     thread_count = { count = 4 }
//!     self_block_size = 256
//! "#).unwrap();
//!
//! assert_eq!(config.variant, Semiring::SumMinLog);
//! assert_eq!(config.backend, BackendKind::Parallel);
//! assert_eq!(config.thread_count, ThreadCount::Count(4));
//! assert_eq!(config.self_block_size, 256);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use probphoc_config::BatchConfig;
//!
//! let config = BatchConfig::load("phoc.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use probphoc_core::Semiring;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Block size used for self-pairwise work when none is configured.
pub const DEFAULT_SELF_BLOCK_SIZE: usize = 128;

/// Block size used for cross-pairwise work when none is configured.
pub const DEFAULT_CROSS_BLOCK_SIZE: usize = 1024;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Batch scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BatchConfig {
    /// Scorer used when a call does not name one.
    pub variant: Semiring,

    /// Execution backend.
    pub backend: BackendKind,

    /// Worker threads for the parallel backend.
    pub thread_count: ThreadCount,

    /// Scores computed per work block in cross-pairwise calls.
    pub cross_block_size: usize,

    /// Scores computed per work block in self-pairwise calls.
    pub self_block_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            variant: Semiring::default(),
            backend: BackendKind::default(),
            thread_count: ThreadCount::default(),
            cross_block_size: DEFAULT_CROSS_BLOCK_SIZE,
            self_block_size: DEFAULT_SELF_BLOCK_SIZE,
        }
    }
}

impl BatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that block sizes and an explicit thread count are non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cross_block_size == 0 {
            return Err(ConfigError::Invalid(
                "cross_block_size must be greater than 0".to_string(),
            ));
        }
        if self.self_block_size == 0 {
            return Err(ConfigError::Invalid(
                "self_block_size must be greater than 0".to_string(),
            ));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the default scorer.
    pub fn with_variant(mut self, variant: Semiring) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the execution backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the worker thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets the cross-pairwise block size.
    pub fn with_cross_block_size(mut self, size: usize) -> Self {
        self.cross_block_size = size;
        self
    }

    /// Sets the self-pairwise block size.
    pub fn with_self_block_size(mut self, size: usize) -> Self {
        self.self_block_size = size;
        self
    }
}

/// Execution backend for batch calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Single thread, blocks evaluated in order.
    Sequential,

    /// Blocks evaluated on a rayon thread pool.
    #[default]
    Parallel,
}

/// Worker thread count for the parallel backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use rayon's global pool.
    #[default]
    Auto,

    /// Use a dedicated pool with a specific number of threads.
    Count(usize),
}

impl ThreadCount {
    /// Resolves the thread count to an actual number.
    pub fn resolve(&self) -> usize {
        match self {
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            ThreadCount::Count(n) => *n,
        }
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::Auto => write!(f, "Auto"),
            ThreadCount::Count(n) => write!(f, "{}", n),
        }
    }
}
