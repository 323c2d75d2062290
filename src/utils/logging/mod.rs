//! Logging utilities
//!
//! Structured logging setup on top of `tracing-subscriber`.

mod types;

pub use types::LogLevel;

use crate::config::LoggingConfig;
use crate::utils::error::{PermissionError, Result};
use tracing_subscriber::EnvFilter;

/// Build the subscriber filter. `RUST_LOG` takes precedence over the configured level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_directive()))
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| PermissionError::internal(format!("Failed to initialize logging: {}", e)))
}
