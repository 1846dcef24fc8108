//! Snapshot types reported by the receiver
//!
//! Every value here is a point-in-time read. Nothing caches them; each command
//! fetches a fresh snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Overall state of the main zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStatus {
    /// Whether the receiver is powered on
    pub power: bool,
    /// Name of the active input
    pub input: String,
    /// Volume in dB relative to reference (always <= 0)
    pub volume_db: f64,
    /// Whether the output is muted
    pub muted: bool,
}

/// Playback information for inputs that support transport control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStatus {
    pub playing: bool,
    pub artist: String,
    pub album: String,
    pub track: String,
    pub station: String,
}

/// On-screen menu state for network inputs
///
/// The remaining fields only carry meaning while `ready` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuStatus {
    pub ready: bool,
    pub layer: u32,
    pub name: String,
    pub current_line: u32,
    pub max_line: u32,
    /// Visible menu lines keyed by their position on screen
    pub entries: BTreeMap<u32, String>,
}

impl MenuStatus {
    /// Menu lines in display order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}

/// Identity of a located receiver
///
/// This is the record a locator persists between runs so that repeated
/// invocations can skip discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverInfo {
    /// Control endpoint, e.g. `http://192.168.1.20:80/YamahaRemoteControl/ctrl`
    pub ctrl_url: String,
    /// Name the receiver announces on the network
    pub friendly_name: String,
    /// Model name, e.g. `RX-V675`
    pub model_name: String,
}
