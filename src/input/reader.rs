//! Log Reader
//!
//! Loads a log file into memory as a sequence of lines.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MungeError, Result};

/// Read the whole file at `path` and split it into lines
///
/// The file handle is dropped before returning, whether or not the read
/// succeeded.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut text = String::new();
    {
        let mut file = File::open(path).map_err(|e| MungeError::file_access(path, e))?;
        file.read_to_string(&mut text)
            .map_err(|e| MungeError::file_access(path, e))?;
    }
    Ok(split_lines(&text))
}

/// Split text into lines, keeping each `\n` terminator
///
/// `\r\n` is normalized to `\n`. The last line keeps no terminator if the
/// text does not end with one.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| match line.strip_suffix("\r\n") {
            Some(body) => format!("{body}\n"),
            None => line.to_string(),
        })
        .collect()
}

