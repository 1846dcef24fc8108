//! Command-line surface
//!
//! [`Cli`] is the clap definition of `rxvc`; [`run`] executes one parsed
//! invocation against whatever [`ReceiverLocator`] the embedding binary
//! provides:
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! fn main() {
//!     let cli = rxvc::Cli::parse();
//!     let config = rxvc::Config::from_env().unwrap_or_default();
//!     let locator = my_integration::Locator::new();
//!     if let Err(e) = rxvc::run(cli, config, &locator, &mut std::io::stdout(), &mut std::io::stderr()) {
//!         eprintln!("{}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

use std::io::Write;

use clap::{Parser, Subcommand};
use receiver_api::ReceiverLocator;
use tracing::{debug, info};

use crate::command::Command;
use crate::config::Config;
use crate::dispatch::dispatch;
use crate::error::Result;
use crate::logging::{self, LoggingMode};
use crate::session::{Session, SessionOptions};

/// Control your Yamaha receiver from the command line, really fast.
///
/// The receiver found on the first run is cached, so later runs skip
/// discovery. Run with --clear to forget it and look again.
#[derive(Parser, Debug)]
#[command(name = "rxvc")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Clear the cache and look for receivers again.
    #[arg(long)]
    pub clear: bool,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print overall status of the receiver.
    Status,
    /// List valid input names for this receiver.
    Inputs,
    /// See the current input or set it. Quote names that contain spaces.
    Input {
        input: Option<String>,
    },
    /// List outputs and whether they are enabled.
    Outputs,
    /// Set an output of the receiver on or off.
    #[command(arg_required_else_help = true)]
    Output {
        output: String,
        state: String,
    },
    /// Show the current volume, or set it with -v/--vol.
    Volume {
        /// Target volume in dB, a negative number in steps of 0.5
        #[arg(short = 'v', long = "vol", allow_negative_numbers = true)]
        vol: Option<f64>,
    },
    /// Turn the volume up in 0.5 dB increments (default 2 increments).
    Up {
        points: Option<u32>,
    },
    /// Turn the volume down in 0.5 dB increments (default 2 increments).
    Down {
        points: Option<u32>,
    },
    /// Fade to a volume with an optional delay in seconds between increments.
    Fade {
        /// Target volume in dB, a negative number
        #[arg(short = 'v', long = "vol", allow_negative_numbers = true)]
        vol: Option<f64>,
        /// Seconds between increments (default 0.5)
        delay: Option<f64>,
    },
    /// Show mute status or set it with on/off.
    Mute {
        state: Option<String>,
    },
    /// Show power state or set it with on/off. Needs Network Standby enabled on the receiver.
    Power {
        state: Option<String>,
    },
    /// See the current surround program or set it.
    Sp {
        sp: Option<String>,
    },
    /// List valid surround programs for this receiver.
    Sps,
    /// See the current zone or set it.
    Zone {
        zone: Option<String>,
    },
    /// List configured zones for this receiver.
    Zones,
    /// See the current scene or set it.
    Scene {
        scene: Option<String>,
    },
    /// List valid scenes for this receiver.
    Scenes,
    /// See playback status or send play, stop, pause, next or previous.
    Playback {
        command: Option<String>,
    },
    /// See the on-screen menu or send up, down, left, right, select or return.
    Menu {
        command: Option<String>,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Status => Command::Status,
            Commands::Inputs => Command::Inputs,
            Commands::Input { input } => Command::Input(input),
            Commands::Outputs => Command::Outputs,
            Commands::Output { output, state } => Command::Output { name: output, state },
            Commands::Volume { vol } => Command::Volume(vol),
            Commands::Up { points } => Command::Up(points),
            Commands::Down { points } => Command::Down(points),
            Commands::Fade { vol, delay } => Command::Fade { volume: vol, delay },
            Commands::Mute { state } => Command::Mute(state),
            Commands::Power { state } => Command::Power(state),
            Commands::Sp { sp } => Command::SurroundProgram(sp),
            Commands::Sps => Command::SurroundPrograms,
            Commands::Zone { zone } => Command::Zone(zone),
            Commands::Zones => Command::Zones,
            Commands::Scene { scene } => Command::Scene(scene),
            Commands::Scenes => Command::Scenes,
            Commands::Playback { command } => Command::Playback(command),
            Commands::Menu { command } => Command::Menu(command),
        }
    }
}

/// Execute one invocation
///
/// Locates the receiver (honouring `--clear`), dispatches the subcommand and
/// writes its report. With `--clear` and no subcommand, only the cache is
/// refreshed.
pub fn run<L, O, E>(cli: Cli, config: Config, locator: &L, stdout: &mut O, stderr: &mut E) -> Result<()>
where
    L: ReceiverLocator,
    O: Write,
    E: Write,
{
    let config = match cli.log_level.as_deref() {
        Some(level) => config.with_log_level(level)?,
        None => config,
    };

    let mode = LoggingMode::for_level(config.log_level.as_deref());
    if mode != LoggingMode::Silent && !logging::is_initialized() {
        logging::init_logging(mode, config.log_level.as_deref())?;
    }

    if cli.clear {
        writeln!(stdout, "Clearing receiver cache as requested...")?;
    }

    let options = SessionOptions {
        clear_cache: cli.clear,
        retry: config.retry,
    };
    let session = Session::open(locator, &options)?;
    debug!(origin = ?session.origin(), "receiver session ready");

    let Some(command) = cli.command else {
        info!("no command given");
        return Ok(());
    };

    match dispatch(session.receiver(), &Command::from(command)) {
        Ok(report) => {
            report.write_to(stdout, stderr, config.color)?;
            Ok(())
        }
        Err(failure) => {
            failure.report.write_to(stdout, stderr, config.color)?;
            Err(failure.source.into())
        }
    }
}
