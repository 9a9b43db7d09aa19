//! Batch scanning of line-oriented input
//!
//! - `input`: memory-mapped files, buffered streams and line splitting
//! - `batch`: parallel per-line scanning and reporting

pub mod batch;
pub mod input;

pub use batch::{BatchSummary, LineError, LineRecord, LineReport, scan_line, scan_lines};
pub use input::{InputSource, split_lines};
