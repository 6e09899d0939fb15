//! Diagnostic logging setup
//!
//! Library diagnostics (skipped non-semantic rules, lookup failures, index
//! statistics) are `tracing` events. The CLI routes them to stderr so that
//! stdout carries only the translated rule list.

use crate::config::CliConfig;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub fn default_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.verbosity.log_directive())
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` takes precedence over `-q`/`-v`. Installing twice is a no-op.
pub fn init(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(error) = result {
        tracing::debug!(%error, "tracing subscriber already initialized");
    }
}
