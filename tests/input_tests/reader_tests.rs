//! Tests for the Log Reader
//!
//! These tests verify:
//! - Line terminators are retained
//! - CRLF normalization
//! - Missing files map to FileAccess

use std::fs;

use logmunge::error::MungeError;
use logmunge::input::{read_lines, split_lines};
use tempfile::TempDir;

// =============================================================================
// Splitting Tests
// =============================================================================

#[test]
fn test_split_keeps_terminators() {
    assert_eq!(split_lines("a\nb\nc"), vec!["a\n", "b\n", "c"]);
}

#[test]
fn test_split_normalizes_crlf() {
    assert_eq!(
        split_lines("run 1\r\n50 generations\r\n"),
        vec!["run 1\n", "50 generations\n"]
    );
}

#[test]
fn test_split_empty() {
    assert!(split_lines("").is_empty());
}

// =============================================================================
// File Tests
// =============================================================================

#[test]
fn test_read_lines_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("exp.log");
    fs::write(&path, "meta\nmore meta\n50 generations\n1.5 seconds\n").unwrap();

    let lines = read_lines(&path).unwrap();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "meta\n");
    assert_eq!(lines[3], "1.5 seconds\n");
}

#[test]
fn test_read_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.log");

    let err = read_lines(&path).unwrap_err();

    match err {
        MungeError::FileAccess { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_read_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("binary.log");
    fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

    assert!(matches!(read_lines(&path), Err(MungeError::FileAccess { .. })));
}
