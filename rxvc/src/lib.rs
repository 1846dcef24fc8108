//! # rxvc - Yamaha RX-V receiver control from the command line
//!
//! This crate is the command layer between the `rxvc` command line and a
//! receiver integration implementing [`receiver_api::ReceiverControl`]:
//!
//! ```text
//! CLI arguments (cli)
//!     ↓
//! Command dispatcher (dispatch)
//!     ↓ validators, volume arithmetic, availability gates
//! ReceiverControl operation
//!     ↓ on failure
//! Error classifier (classify)
//!     ↓
//! Report (stdout / stderr)
//! ```
//!
//! Dispatching works without any CLI parsing:
//!
//! ```rust,ignore
//! use rxvc::{dispatch, Command};
//!
//! let report = dispatch(&receiver, &Command::Up(Some(4)))?;
//! println!("{}", report);
//! ```

pub mod classify;
pub mod cli;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod gate;
pub mod logging;
pub mod report;
pub mod session;
pub mod validate;
pub mod volume;

mod error;

pub use cli::{run, Cli, Commands};
pub use command::{Command, MenuCommand, PlaybackCommand};
pub use config::Config;
pub use dispatch::{dispatch, DispatchError};
pub use error::{CliError, Result};
pub use report::{Line, Report};
pub use session::{RetryPolicy, Session, SessionOptions};
