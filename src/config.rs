//! Configuration for rule registries.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KotogramError, Result};

/// How overlapping candidate matches are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Keep a pairwise non-overlapping set, preferring longer spans.
    #[default]
    LongestWins,

    /// Report every candidate, only sorted.
    KeepAll,
}

/// Configuration for a [`crate::grammar::RuleRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Overlap resolution applied by `match_all` and `match_specific`.
    pub overlap_policy: OverlapPolicy,

    /// Evaluate rules and batches on a thread pool.
    pub parallel: bool,

    /// Thread pool size for parallel matching.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Matches consuming fewer tokens than this are dropped.
    pub min_span_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::LongestWins,
            parallel: false,
            thread_pool_size: None,
            min_span_len: 1,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlap policy.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Enable or disable parallel matching.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the thread pool size. Implies parallel matching.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self.parallel = true;
        self
    }

    /// Set the minimum reported span length.
    pub fn with_min_span_len(mut self, min_span_len: usize) -> Self {
        self.min_span_len = min_span_len;
        self
    }

    /// Number of worker threads the registry will start.
    pub fn effective_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration for values the registry cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.thread_pool_size == Some(0) {
            return Err(KotogramError::config("thread_pool_size must be greater than 0"));
        }
        Ok(())
    }

    /// Read a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: RegistryConfig = serde_json::from_str(&content).map_err(|e| {
            KotogramError::config(format!("Invalid config file {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }
}
