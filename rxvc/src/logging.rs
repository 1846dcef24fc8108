//! Logging setup
//!
//! Diagnostics always go to stderr so stdout carries nothing but command
//! output. The filter comes from the configured level, then `RUST_LOG`, then
//! `warn`.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber at all
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

impl LoggingMode {
    /// Pick a mode suited to a configured level
    pub fn for_level(level: Option<&str>) -> Self {
        match level {
            Some("off") => LoggingMode::Silent,
            Some("debug") | Some("trace") => LoggingMode::Debug,
            _ => LoggingMode::Development,
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging for the given mode and level
///
/// Must be called at most once per process; see [`is_initialized`].
pub fn init_logging(mode: LoggingMode, level: Option<&str>) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact())
                .with(create_env_filter(level, "warn"));

            subscriber.try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(fmt::layer()
                    .with_writer(std::io::stderr)
                    .pretty()
                    .with_file(true)
                    .with_line_number(true))
                .with(create_env_filter(level, "debug"));

            subscriber.try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Check if logging has been initialized
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn create_env_filter(level: Option<&str>, default_level: &str) -> EnvFilter {
    if let Some(level) = level {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
