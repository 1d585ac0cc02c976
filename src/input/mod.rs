//! Input Module
//!
//! Finds log files in a directory and loads them into memory.
//!
//! ## Responsibilities
//! - List the working directory (no recursion)
//! - Select entries by file name suffix
//! - Read a whole log into an ordered line sequence

mod reader;
mod scanner;

pub use reader::{read_lines, split_lines};
pub use scanner::discover_logs;
