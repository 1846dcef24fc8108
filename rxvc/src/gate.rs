//! Availability gates
//!
//! Playback and menu commands only work in some device states. A gate reads
//! the relevant live state and either opens (handing over what it read) or
//! closes, in which case the command must not touch the receiver again.

use receiver_api::{MenuStatus, ReceiverControl, Result};
use tracing::debug;

use crate::report::Line;

pub const PLAYBACK_UNAVAILABLE: &str = "Playback controls are not available for the active input.";
pub const MENU_UNAVAILABLE: &str = "Menu is currently not available.";

/// Outcome of a gate check
#[derive(Debug, Clone, PartialEq)]
pub enum Gate<T> {
    Open(T),
    Closed(Line),
}

/// Open when the active input supports transport control
///
/// Yields the name of the active input.
pub fn playback(receiver: &impl ReceiverControl) -> Result<Gate<String>> {
    let input = receiver.basic_status()?.input;
    if receiver.is_playback_supported(&input)? {
        Ok(Gate::Open(input))
    } else {
        debug!(input = %input, "playback not supported for active input");
        Ok(Gate::Closed(Line::plain(PLAYBACK_UNAVAILABLE)))
    }
}

/// Open when the on-screen menu reports itself ready
///
/// Yields the menu status that was read for the check.
pub fn menu(receiver: &impl ReceiverControl) -> Result<Gate<MenuStatus>> {
    let status = receiver.menu_status()?;
    if status.ready {
        Ok(Gate::Open(status))
    } else {
        debug!("menu not ready");
        Ok(Gate::Closed(Line::plain(MENU_UNAVAILABLE)))
    }
}
