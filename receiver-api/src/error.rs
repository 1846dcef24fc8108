use thiserror::Error;

/// Failures reported by a receiver control client
///
/// The receiver signals domain errors only as a generic rejection carrying a
/// human-readable description, so callers that want to react to a specific
/// failure have to look at [`ReceiverError::message`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReceiverError {
    /// The receiver understood the request and refused it
    ///
    /// Covers out-of-range volumes, misaligned volume steps, commands the
    /// active input does not support and similar device-side refusals. The
    /// payload is the description the device (or its client) attached.
    #[error("Receiver rejected the request: {0}")]
    Rejected(String),

    /// Network communication error
    ///
    /// The receiver could not be reached: connection refused, timeouts,
    /// Network Standby disabled while the unit is off, and so on.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsing error
    ///
    /// The receiver answered but the answer could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ReceiverError {
    /// Descriptive text attached to the failure
    pub fn message(&self) -> &str {
        match self {
            ReceiverError::Rejected(msg)
            | ReceiverError::Network(msg)
            | ReceiverError::Parse(msg) => msg,
        }
    }

    /// Whether the failure is a device-side rejection rather than a transport problem
    pub fn is_rejection(&self) -> bool {
        matches!(self, ReceiverError::Rejected(_))
    }
}

/// Failures while locating a receiver or maintaining the receiver cache
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Discovery finished without finding any receiver
    #[error("No receiver found")]
    NotFound,

    /// The cached receiver record could not be read, written or removed
    #[error("Receiver cache error: {0}")]
    Cache(String),

    /// Talking to a located receiver failed
    #[error(transparent)]
    Receiver(#[from] ReceiverError),
}

/// Type alias for results of receiver control operations
pub type Result<T> = std::result::Result<T, ReceiverError>;
