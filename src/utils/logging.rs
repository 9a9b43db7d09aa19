//! Logging setup for the `palscan` binary

use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;

/// Map `-v` repetitions to a level: warn, info, debug, then trace
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a global fmt subscriber writing to stderr, keeping stdout for
/// results
pub fn init_logging(verbose: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
