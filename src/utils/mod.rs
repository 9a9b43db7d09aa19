//! Utility functions shared by the library and the binary.
//!
//! ## Modules
//!
//! - [`logging`] - tracing subscriber setup and verbosity levels
//! - [`progress`] - progress bars (no-op without the `progress` feature)

pub mod logging;
pub mod progress;

pub use logging::*;
