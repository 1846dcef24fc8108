use std::io;

use receiver_api::{LocatorError, ReceiverError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Failures that end an invocation
///
/// Invalid arguments and unavailable features are not errors; they are
/// rendered as part of the command's report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Receiver error: {0}")]
    Receiver(#[from] ReceiverError),

    #[error("Could not locate a receiver: {0}")]
    Locator(#[from] LocatorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
