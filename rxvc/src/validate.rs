//! Capability validators
//!
//! Membership checks against the sets the receiver reports. Names are never
//! hardcoded here; the device is the only source of truth for what is valid.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Exact, case-sensitive membership of `candidate` in a reported capability set
///
/// No trimming or case folding: `"HDMI1"` is not `"hdmi1"`.
pub fn is_valid(candidate: &str, valid: &BTreeSet<String>) -> bool {
    valid.contains(candidate)
}

/// Whether `candidate` names one of the receiver's outputs, enabled or not
pub fn is_known_output(candidate: &str, outputs: &BTreeMap<String, bool>) -> bool {
    outputs.contains_key(candidate)
}

/// An on/off argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    /// Accept exactly `on` or `off`
    pub fn parse_exact(token: &str) -> Option<Self> {
        match token {
            "on" => Some(Switch::On),
            "off" => Some(Switch::Off),
            _ => None,
        }
    }

    /// Accept `on` or `off` in any letter case
    pub fn parse_normalized(token: &str) -> Option<Self> {
        Self::parse_exact(&token.to_lowercase())
    }

    pub fn from_bool(on: bool) -> Self {
        if on {
            Switch::On
        } else {
            Switch::Off
        }
    }

    pub fn is_on(self) -> bool {
        self == Switch::On
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Switch::On => "on",
            Switch::Off => "off",
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
