//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_LEVEL;

/// ## Summary
/// Builds the filter for the configured level, falling back to the default
/// level when the directive does not parse.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(config.level.as_str()).unwrap_or_else(|e| {
        tracing::warn!(level = %config.level, error = %e, "Invalid log level in config, using default");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// ## Summary
/// Installs the global `tracing` subscriber.
///
/// Returns `false` when a global subscriber was already set, which happens when
/// a host application or a test harness initialized logging first.
pub fn init(config: &LoggingConfig) -> bool {
    let installed = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_target(true).with_file(true).with_line_number(true))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level, "Logging initialized");
    }
    installed
}
