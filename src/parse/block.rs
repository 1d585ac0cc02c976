//! Block Processor
//!
//! Drains a line sequence into CSV output, one test block at a time.

use std::io::Write;

use tracing::debug;

use crate::config::Config;
use crate::error::{Expected, MungeError, Result};

use super::Measurement;

/// Column header written before each block's rows
pub const CSV_HEADER: &str = "generation,duration\n";

/// Number of verbatim metadata lines leading each block
const METADATA_LINES: usize = 2;

/// Counts from one log conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogStats {
    /// Test blocks that produced a header and rows
    pub blocks: usize,

    /// Measurement rows written
    pub rows: usize,
}

/// Converts test blocks into CSV rows
///
/// Holds only the record layout; the line sequence and the sink are passed
/// per call, so the same processor can be reused across files.
#[derive(Debug, Clone)]
pub struct BlockProcessor {
    blocks_per_test: usize,
    lines_per_test: usize,
    emit_generation: bool,
}

impl BlockProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            blocks_per_test: config.blocks_per_test,
            lines_per_test: config.lines_per_test(),
            emit_generation: config.emit_generation,
        }
    }

    /// Lines of measurement data per block
    pub fn lines_per_test(&self) -> usize {
        self.lines_per_test
    }

    /// Process every block in `lines`, writing CSV to `out`
    ///
    /// Stops at the first line that fails to match; whatever was already
    /// written to `out` stays there.
    pub fn process_log<W: Write>(&self, lines: &[String], out: &mut W) -> Result<LogStats> {
        let mut stats = LogStats::default();
        let mut offset = 0;

        while offset < lines.len() {
            let consumed = self.process_block(lines, offset, out)?;
            offset += consumed;

            if consumed > METADATA_LINES {
                stats.blocks += 1;
                stats.rows += self.blocks_per_test;
            }
        }

        Ok(stats)
    }

    /// Process the block starting at `offset`, returning the lines consumed
    ///
    /// A block with metadata but nothing after it writes only the metadata
    /// and consumes two lines. Metadata is copied byte for byte, except that
    /// a line missing its terminator (the last line of the file) gets `\n`
    /// appended.
    pub fn process_block<W: Write>(
        &self,
        lines: &[String],
        offset: usize,
        out: &mut W,
    ) -> Result<usize> {
        let line_at = |index: usize| lines.get(index).map(String::as_str);

        // Step 1: Run metadata, copied verbatim
        for index in offset..offset + METADATA_LINES {
            let line = line_at(index).ok_or(MungeError::NoMatch {
                expected: Expected::Metadata,
                line_number: index + 1,
                found: None,
            })?;
            out.write_all(line.as_bytes())?;
            if !line.ends_with('\n') {
                out.write_all(b"\n")?;
            }
        }

        let data_start = offset + METADATA_LINES;
        if data_start >= lines.len() {
            return Ok(METADATA_LINES);
        }

        // Step 2: Column header
        out.write_all(CSV_HEADER.as_bytes())?;

        // Step 3: One row per (generation, duration) pair
        for i in (0..self.lines_per_test()).step_by(2) {
            let index = data_start + i;
            let measurement = Measurement::parse(line_at(index), line_at(index + 1), index + 1)?;

            if self.emit_generation {
                writeln!(out, "{},{}", measurement.generation, measurement.duration)?;
            } else {
                writeln!(out, "{}", measurement.duration)?;
            }
        }

        debug!(
            first_line = offset + 1,
            rows = self.blocks_per_test,
            "Processed test block"
        );

        Ok(METADATA_LINES + self.lines_per_test())
    }
}
