//! Configuration for logmunge
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{MungeError, Result};

/// Main configuration for a conversion run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Directory scanned for log files; CSV files are written alongside them
    pub work_dir: PathBuf,

    /// File name suffix identifying input logs
    pub input_suffix: String,

    // -------------------------------------------------------------------------
    // Record Layout
    // -------------------------------------------------------------------------
    /// Number of (generation, duration) line pairs per test block
    pub blocks_per_test: usize,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Write `generation,duration` rows instead of the bare duration
    pub emit_generation: bool,

    // -------------------------------------------------------------------------
    // Run Configuration
    // -------------------------------------------------------------------------
    /// What to do when a single file fails to convert
    pub failure_policy: FailurePolicy,
}

/// Failure handling across a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first file that fails and return its error
    Abort,

    /// Record the failure and carry on with the remaining files
    Continue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            input_suffix: ".log".to_string(),
            blocks_per_test: 30,
            emit_generation: false,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Lines of measurement data in one test block (two per pair)
    pub fn lines_per_test(&self) -> usize {
        self.blocks_per_test * 2
    }

    /// Reject layouts the block processor cannot make progress on
    pub fn validate(&self) -> Result<()> {
        if self.blocks_per_test == 0 {
            return Err(MungeError::Config(
                "blocks_per_test must be at least 1".to_string(),
            ));
        }
        if self.input_suffix.is_empty() {
            return Err(MungeError::Config("input_suffix must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory to scan for logs
    pub fn work_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.work_dir = path.into();
        self
    }

    /// Set the input file suffix (e.g. `.log`)
    pub fn input_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.input_suffix = suffix.into();
        self
    }

    /// Set the number of line pairs per test block
    pub fn blocks_per_test(mut self, count: usize) -> Self {
        self.config.blocks_per_test = count;
        self
    }

    /// Emit the generation count next to each duration
    pub fn emit_generation(mut self, enabled: bool) -> Self {
        self.config.emit_generation = enabled;
        self
    }

    /// Set the per-file failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
