//! Error classifier
//!
//! Receivers report every refusal as the same generic failure with a
//! human-readable description. The only way to tell a misaligned volume from
//! a failed mute is to look for a keyword in that description, so all such
//! matching lives here and nowhere else.
//!
//! Commands disagree about what to do with a failure the keyword does not
//! explain. That difference is spelled out per command as a [`FailurePolicy`]
//! instead of being buried in each handler.

use receiver_api::ReceiverError;
use tracing::{debug, warn};

use crate::report::{Line, Stream};

/// Shown when a catch-all command fails for a reason it cannot explain
pub const GENERIC_FAILURE: &str =
    "Something went wrong. Make sure the Network Standby setting of your receiver is on.";

/// What to do with a failure the rule does not recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Recognised rejections are explained. Unrecognised rejections produce no
    /// output at all; transport failures propagate.
    ClassifyOrSwallow,
    /// Recognised rejections are explained; every other failure, transport
    /// included, gets [`GENERIC_FAILURE`].
    ClassifyOrReport,
}

/// How one command turns a receiver failure into output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorRule {
    /// Text that must appear in the failure description. `None` matches any
    /// rejection.
    pub keyword: Option<&'static str>,
    pub explanation: &'static str,
    pub stream: Stream,
    pub policy: FailurePolicy,
}

impl ErrorRule {
    /// Absolute volume and fade: step alignment complaints
    pub const VOLUME_STEP: ErrorRule = ErrorRule {
        keyword: Some("Volume"),
        explanation: "Volume must be specified in -0.5 increments.",
        stream: Stream::Stderr,
        policy: FailurePolicy::ClassifyOrSwallow,
    };

    /// Relative volume: any refusal is taken to mean out of range
    pub const VOLUME_RANGE: ErrorRule = ErrorRule {
        keyword: None,
        explanation: "New volume must be out of range.",
        stream: Stream::Stdout,
        policy: FailurePolicy::ClassifyOrSwallow,
    };

    pub const MUTE: ErrorRule = ErrorRule {
        keyword: Some("Mute"),
        explanation: "Mute command failed.",
        stream: Stream::Stderr,
        policy: FailurePolicy::ClassifyOrSwallow,
    };

    pub const POWER: ErrorRule = ErrorRule {
        keyword: None,
        explanation: GENERIC_FAILURE,
        stream: Stream::Stdout,
        policy: FailurePolicy::ClassifyOrReport,
    };

    /// Whether the failure is one this rule explains
    pub fn matches(&self, error: &ReceiverError) -> bool {
        error.is_rejection()
            && self
                .keyword
                .map_or(true, |keyword| error.message().contains(keyword))
    }

    /// Classify a failure
    ///
    /// `Ok(Some(line))` is the text to show, `Ok(None)` means the failure is
    /// absorbed without output, and `Err` hands the failure back to the caller.
    pub fn classify(&self, error: ReceiverError) -> Result<Option<Line>, ReceiverError> {
        if self.matches(&error) {
            debug!(error = %error, "classified receiver failure");
            return Ok(Some(self.line(self.explanation)));
        }

        match self.policy {
            FailurePolicy::ClassifyOrSwallow if error.is_rejection() => {
                debug!(error = %error, "unrecognised rejection absorbed");
                Ok(None)
            }
            FailurePolicy::ClassifyOrSwallow => Err(error),
            FailurePolicy::ClassifyOrReport => {
                warn!(error = %error, "receiver failure");
                Ok(Some(self.line(GENERIC_FAILURE)))
            }
        }
    }

    fn line(&self, text: &str) -> Line {
        match self.stream {
            Stream::Stdout => Line::alert(text),
            Stream::Stderr => Line::diagnostic(text),
        }
    }
}
