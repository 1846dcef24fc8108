//! Capability traits implemented by a receiver integration

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{LocatorError, Result};
use crate::status::{BasicStatus, MenuStatus, PlayStatus};

/// Control surface of one receiver session
///
/// Every call is a blocking round trip to the device. Implementations own
/// whatever connection state they need, so all methods take `&self`.
///
/// Capability sets (`inputs`, `outputs`, ...) are reported live by the device
/// and must not be cached by callers.
pub trait ReceiverControl {
    // ========================================================================
    // Status
    // ========================================================================

    fn basic_status(&self) -> Result<BasicStatus>;

    /// Playback status; only meaningful when the active input supports playback
    fn play_status(&self) -> Result<PlayStatus>;

    fn menu_status(&self) -> Result<MenuStatus>;

    /// Whether transport controls work for the given input
    fn is_playback_supported(&self, input: &str) -> Result<bool>;

    // ========================================================================
    // Capability sets
    // ========================================================================

    fn inputs(&self) -> Result<BTreeSet<String>>;

    /// Output names mapped to whether they are currently enabled
    fn outputs(&self) -> Result<BTreeMap<String, bool>>;

    fn zones(&self) -> Result<BTreeSet<String>>;

    fn surround_programs(&self) -> Result<BTreeSet<String>>;

    fn scenes(&self) -> Result<BTreeSet<String>>;

    // ========================================================================
    // Current selections not covered by BasicStatus
    // ========================================================================

    fn zone(&self) -> Result<String>;

    fn surround_program(&self) -> Result<String>;

    fn scene(&self) -> Result<String>;

    // ========================================================================
    // Setters
    // ========================================================================

    fn set_power(&self, on: bool) -> Result<()>;

    fn set_input(&self, input: &str) -> Result<()>;

    fn set_output(&self, output: &str, enabled: bool) -> Result<()>;

    /// Set the absolute volume in dB
    fn set_volume(&self, volume_db: f64) -> Result<()>;

    /// Step towards `target_db`, pausing `delay_secs` between increments
    fn fade_volume(&self, target_db: i32, delay_secs: f64) -> Result<()>;

    fn set_mute(&self, muted: bool) -> Result<()>;

    fn set_zone(&self, zone: &str) -> Result<()>;

    fn set_surround_program(&self, program: &str) -> Result<()>;

    fn set_scene(&self, scene: &str) -> Result<()>;

    // ========================================================================
    // Transport
    // ========================================================================

    fn play(&self) -> Result<()>;

    fn stop(&self) -> Result<()>;

    fn pause(&self) -> Result<()>;

    fn next(&self) -> Result<()>;

    fn previous(&self) -> Result<()>;

    // ========================================================================
    // Menu navigation
    // ========================================================================

    fn menu_up(&self) -> Result<()>;

    fn menu_down(&self) -> Result<()>;

    fn menu_left(&self) -> Result<()>;

    fn menu_right(&self) -> Result<()>;

    fn menu_select(&self) -> Result<()>;

    fn menu_return(&self) -> Result<()>;
}

/// Finds receivers on the network and remembers the last one used
///
/// Discovery and persistence are provided by the device integration; callers
/// only decide when to use the cache and when to discover again.
pub trait ReceiverLocator {
    /// Receiver handle produced by this locator
    type Receiver: ReceiverControl;

    /// Discover a receiver on the local network
    fn find_receiver(&self) -> std::result::Result<Self::Receiver, LocatorError>;

    /// The receiver remembered from a previous run, if any
    fn cached_receiver(&self) -> std::result::Result<Option<Self::Receiver>, LocatorError>;

    /// Remember `receiver` for subsequent runs
    fn cache_receiver(&self, receiver: &Self::Receiver) -> std::result::Result<(), LocatorError>;

    /// Forget the remembered receiver; a no-op when nothing is cached
    fn clear_cache(&self) -> std::result::Result<(), LocatorError>;
}
