//! Line Patterns
//!
//! Field extraction for generation and duration lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Expected, MungeError, Result};

static GENERATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) generations").unwrap());

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+) seconds").unwrap());

/// Generation count captured from a line like `50 generations`
pub fn parse_generation_line(line: &str) -> Option<&str> {
    capture(&GENERATION_PATTERN, line)
}

/// Duration captured from a line like `12.345 seconds`
///
/// The matched text is returned as-is, never parsed or rounded.
pub fn parse_duration_line(line: &str) -> Option<&str> {
    capture(&DURATION_PATTERN, line)
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// One measurement pair from a test block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement<'a> {
    pub generation: &'a str,
    pub duration: &'a str,
}

impl<'a> Measurement<'a> {
    /// Parse a (generation, duration) line pair
    ///
    /// `line_number` is the 1-based position of `generation_line` in the
    /// input and is only used for error reporting. A `None` line means the
    /// input ended early.
    pub fn parse(
        generation_line: Option<&'a str>,
        duration_line: Option<&'a str>,
        line_number: usize,
    ) -> Result<Self> {
        let generation = extract(generation_line, Expected::Generation, line_number)?;
        let duration = extract(duration_line, Expected::Duration, line_number + 1)?;
        Ok(Self { generation, duration })
    }
}

fn extract<'a>(line: Option<&'a str>, expected: Expected, line_number: usize) -> Result<&'a str> {
    let parsed = match (line, expected) {
        (Some(l), Expected::Generation) => parse_generation_line(l),
        (Some(l), Expected::Duration) => parse_duration_line(l),
        _ => None,
    };

    parsed.ok_or_else(|| MungeError::NoMatch {
        expected,
        line_number,
        found: line.map(str::to_string),
    })
}
