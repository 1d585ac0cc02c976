//! Output Naming
//!
//! Maps an input log path to the CSV path written next to it.

use std::path::{Path, PathBuf};

use crate::error::{MungeError, Result};

/// Extension given to every output file
pub const CSV_EXTENSION: &str = "csv";

/// Derive `<prefix>.csv` from `<prefix>.<suffix>`
///
/// The file name must contain exactly one `.`. Names like `a.b.log` (or
/// names with no `.` at all) have no unambiguous prefix and are rejected.
pub fn csv_path_for(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = name.split('.');
    let (prefix, _suffix) = match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(suffix), None) => (prefix, suffix),
        _ => return Err(MungeError::AmbiguousName { name }),
    };

    Ok(input.with_file_name(format!("{prefix}.{CSV_EXTENSION}")))
}
