//! Directory Scanner
//!
//! Discovers input logs in a single directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MungeError, Result};

/// List every entry of `dir` whose file name ends with `suffix`
///
/// Entries are not filtered by type, so a directory named `x.log` is
/// returned too. Names that are not valid UTF-8 are skipped. The result is
/// sorted by path.
pub fn discover_logs(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| MungeError::file_access(dir, e))?;

    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MungeError::file_access(dir, e))?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            debug!(name = ?file_name, "Skipping non UTF-8 entry");
            continue;
        };

        if name.ends_with(suffix) {
            logs.push(entry.path());
        }
    }

    logs.sort();
    debug!(dir = %dir.display(), count = logs.len(), "Discovered log files");
    Ok(logs)
}
