//! Parse Module
//!
//! Turns a log's line sequence into CSV rows.
//!
//! ## Log Layout
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Test Block 1                         │
//! │   metadata line 1     (copied)       │
//! │   metadata line 2     (copied)       │
//! │   "50 generations"    ┐              │
//! │   "12.345 seconds"    ┘ pair 1       │
//! │   ...                                │
//! │   "50 generations"    ┐              │
//! │   "11.002 seconds"    ┘ pair N       │
//! ├──────────────────────────────────────┤
//! │ Test Block 2                         │
//! │   ...                                │
//! └──────────────────────────────────────┘
//! ```
//!
//! N is `blocks_per_test` (30 by default).

mod block;
mod pattern;

pub use block::{BlockProcessor, LogStats, CSV_HEADER};
pub use pattern::{parse_duration_line, parse_generation_line, Measurement};
