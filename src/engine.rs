//! Engine Module
//!
//! Runs a batch conversion over a directory of logs.
//!
//! ## Responsibilities
//! - Discover input logs in the configured directory
//! - Convert each log to its CSV, one file at a time
//! - Collect per-file outcomes and apply the failure policy

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::{Config, FailurePolicy};
use crate::error::{MungeError, Result};
use crate::input::{discover_logs, read_lines};
use crate::output::csv_path_for;
use crate::parse::BlockProcessor;

/// Result of converting one log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Test blocks written
    pub blocks: usize,

    /// Measurement rows written
    pub rows: usize,
}

/// Outcome of one file within a batch
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<ConversionReport>,
}

/// Everything a batch run produced, in processing order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn converted(&self) -> impl Iterator<Item = &ConversionReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// The batch converter
///
/// Files are handled strictly one after another. Only one output file is
/// open at a time and it is flushed and closed before the next input is read.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Block layout shared by every file in the run
    processor: BlockProcessor,
}

impl Engine {
    /// Create an engine, validating the config
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let processor = BlockProcessor::new(&config);
        Ok(Self { config, processor })
    }

    /// Convert every log in the working directory
    ///
    /// Failing to list the directory is always fatal. Per-file failures stop
    /// the run under `FailurePolicy::Abort` and are collected under
    /// `FailurePolicy::Continue`.
    pub fn run(&self) -> Result<RunSummary> {
        let logs = discover_logs(&self.config.work_dir, &self.config.input_suffix)?;
        info!(
            dir = %self.config.work_dir.display(),
            count = logs.len(),
            "Starting conversion"
        );
        self.convert_all(&logs)
    }

    /// Convert an explicit list of logs, in order
    pub fn convert_all(&self, logs: &[PathBuf]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for log in logs {
            let result = self.convert_file(log);

            if let Err(e) = &result {
                match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        error!(file = %log.display(), "Conversion failed: {}", e);
                        return result.map(|_| summary);
                    }
                    FailurePolicy::Continue => {
                        warn!(file = %log.display(), "Conversion failed, continuing: {}", e);
                    }
                }
            }

            summary.outcomes.push(FileOutcome {
                input: log.clone(),
                result,
            });
        }

        Ok(summary)
    }

    /// Convert one log into the CSV next to it
    ///
    /// The input is read in full before the output is created, so an
    /// unreadable log leaves nothing behind. A parse failure leaves the
    /// partially written CSV on disk.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport> {
        // Step 1: Derive the output name (fails before touching the disk)
        let output = csv_path_for(input)?;

        // Step 2: Load the whole log
        let lines = read_lines(input)?;

        // Step 3: Write CSV
        let file = File::create(&output).map_err(|e| MungeError::file_access(&output, e))?;
        let mut writer = BufWriter::new(file);

        let stats = self
            .processor
            .process_log(&lines, &mut writer)
            .map_err(|e| e.with_path(&output))?;

        writer
            .flush()
            .map_err(|e| MungeError::file_access(&output, e))?;

        info!(
            input = %input.display(),
            output = %output.display(),
            blocks = stats.blocks,
            rows = stats.rows,
            "Converted log"
        );

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output,
            blocks: stats.blocks,
            rows: stats.rows,
        })
    }
}
