//! Log output for ollamarag
//!
//! Events go to stderr through `tracing-subscriber` so stdout carries only
//! the printed answers. `RUST_LOG` takes precedence over the verbosity flags.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Default level for a verbosity setting
pub fn level_for(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::WARN,
        Verbosity::Normal => LevelFilter::INFO,
        Verbosity::Verbose => LevelFilter::DEBUG,
        Verbosity::VeryVerbose => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
