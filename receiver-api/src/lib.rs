//! # Receiver API - capability boundary for Yamaha RX-V control
//!
//! This crate defines what a receiver integration has to offer so that the
//! `rxvc` command layer can drive it:
//!
//! - [`ReceiverControl`]: one receiver session with typed getters and setters
//! - [`ReceiverLocator`]: discovery plus a cache of the last receiver used
//! - Snapshot types ([`BasicStatus`], [`PlayStatus`], [`MenuStatus`])
//! - [`ReceiverError`]: the generic failure a receiver raises, carrying the
//!   device's descriptive message
//!
//! ```rust,ignore
//! use receiver_api::{ReceiverControl, ReceiverError};
//!
//! fn louder(receiver: &impl ReceiverControl) -> Result<(), ReceiverError> {
//!     let status = receiver.basic_status()?;
//!     receiver.set_volume(status.volume_db + 1.0)
//! }
//! ```

mod error;
mod receiver;
mod status;

pub use error::{LocatorError, ReceiverError, Result};
pub use receiver::{ReceiverControl, ReceiverLocator};
pub use status::{BasicStatus, MenuStatus, PlayStatus, ReceiverInfo};
