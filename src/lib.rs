//! # logmunge
//!
//! Converts experiment timing logs into CSV files:
//! - Scans a directory for `*.log` files
//! - Splits each log into fixed-size test blocks
//! - Extracts one duration per measurement pair
//! - Writes `<name>.csv` next to each log
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Engine                              │
//! │              (one file at a time, policy)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────────┐
//!          │            │                     │
//!          ▼            ▼                     ▼
//!   ┌─────────────┐ ┌─────────────┐   ┌─────────────┐
//!   │   Scanner   │ │   Reader    │   │   Output    │
//!   │  (*.log)    │ │  (lines)    │   │  (x.csv)    │
//!   └─────────────┘ └──────┬──────┘   └──────┬──────┘
//!                          │                 │
//!                          ▼                 ▼
//!                   ┌──────────────────────────────┐
//!                   │       Block Processor        │
//!                   │   (patterns, CSV rows)       │
//!                   └──────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod input;
pub mod parse;
pub mod output;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MungeError, Result};
pub use config::{Config, FailurePolicy};
pub use engine::{ConversionReport, Engine, RunSummary};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of logmunge
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
