//! Command dispatcher
//!
//! Every settable capability follows the same shape:
//!
//! - no argument: read the current value and show it
//! - argument: validate locally, then apply and confirm
//!
//! Invalid arguments never reach the receiver. Receiver failures are either
//! classified through the command's [`ErrorRule`] or returned as a
//! [`DispatchError`], which ends the invocation but still carries whatever
//! the command announced before the failing call.

use std::collections::BTreeSet;

use receiver_api::{MenuStatus, PlayStatus, ReceiverControl, ReceiverError};
use thiserror::Error;
use tracing::{debug, info};

use crate::classify::ErrorRule;
use crate::command::{Command, MenuCommand, PlaybackCommand};
use crate::gate::{self, Gate};
use crate::report::{format_decimal, Line, Report};
use crate::validate::{self, Switch};
use crate::volume::{self, Direction, FadeRequest, DEFAULT_POINTS};

pub const STATE_NOT_ON_OFF: &str = "State must be on or off";
pub const VOLUME_NOT_NEGATIVE: &str = "Volume must be specified as a negative float in steps of 0.5.";
pub const FADE_USAGE: &str = "Volume must be specified as a negative float in steps of 0.5. \
                              Optionally, a delay can be specified in seconds.";
pub const PLAYBACK_INVALID: &str = "That's not a valid playback control command. Valid commands \
                                    include 'play', 'stop', 'pause', 'next' and 'previous'.";
pub const MENU_INVALID: &str = "That's not a valid menu control command. Valid commands \
                                include 'up', 'down', 'left', 'right', 'select' and 'return'.";

/// A receiver failure that ends a command, with the output produced before it
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{source}")]
pub struct DispatchError {
    /// Lines rendered before the failing call, such as "Setting receiver input to HDMI1"
    pub report: Report,
    pub source: ReceiverError,
}

impl DispatchError {
    pub fn after(report: Report, source: ReceiverError) -> Self {
        Self { report, source }
    }
}

impl From<ReceiverError> for DispatchError {
    fn from(source: ReceiverError) -> Self {
        Self::after(Report::new(), source)
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Run one command against the receiver and render the result
pub fn dispatch<R: ReceiverControl>(receiver: &R, command: &Command) -> Result<Report> {
    debug!(?command, "dispatching");

    match command {
        Command::Status => status(receiver),
        Command::Inputs => list(None, receiver.inputs()?),
        Command::Input(name) => select(receiver, &Selectable::input(), name.as_deref()),
        Command::Outputs => outputs(receiver),
        Command::Output { name, state } => output(receiver, name, state),
        Command::Volume(requested) => set_volume(receiver, *requested),
        Command::Up(points) => adjust_volume(receiver, points.unwrap_or(DEFAULT_POINTS), Direction::Increase),
        Command::Down(points) => adjust_volume(receiver, points.unwrap_or(DEFAULT_POINTS), Direction::Decrease),
        Command::Fade { volume, delay } => fade(receiver, *volume, *delay),
        Command::Mute(state) => mute(receiver, state.as_deref()),
        Command::Power(state) => power(receiver, state.as_deref()),
        Command::SurroundProgram(name) => select(receiver, &Selectable::surround_program(), name.as_deref()),
        Command::SurroundPrograms => list(
            Some("Valid surround programs for this receiver are:"),
            receiver.surround_programs()?,
        ),
        Command::Zone(name) => select(receiver, &Selectable::zone(), name.as_deref()),
        Command::Zones => list(Some("Configured zones for this receiver are:"), receiver.zones()?),
        Command::Scene(name) => select(receiver, &Selectable::scene(), name.as_deref()),
        Command::Scenes => list(Some("Valid scenes for this receiver are:"), receiver.scenes()?),
        Command::Playback(token) => playback(receiver, token.as_deref()),
        Command::Menu(token) => menu(receiver, token.as_deref()),
    }
}

fn status(receiver: &impl ReceiverControl) -> Result<Report> {
    let status = receiver.basic_status()?;
    let mut report = Report::new();
    report
        .push(Line::blank())
        .push(Line::plain(format!("Power: {}", status.power)))
        .push(Line::plain(format!("Input: {}", status.input)))
        .push(Line::plain(format!("Volume: {}", format_decimal(status.volume_db))))
        .push(Line::plain(format!("Muted: {}", status.muted)))
        .push(Line::blank());
    Ok(report)
}

fn list(header: Option<&str>, names: BTreeSet<String>) -> Result<Report> {
    let mut report = Report::new();
    if let Some(header) = header {
        report.push(Line::plain(header));
    }
    for name in names {
        report.push(Line::plain(format!("*  {}", name)));
    }
    Ok(report)
}

/// A capability chosen by name from a device-reported set
struct Selectable<R> {
    noun: &'static str,
    list_command: &'static str,
    valid: fn(&R) -> receiver_api::Result<BTreeSet<String>>,
    current: fn(&R) -> receiver_api::Result<String>,
    describe_current: fn(&str) -> String,
    apply: fn(&R, &str) -> receiver_api::Result<()>,
}

impl<R: ReceiverControl> Selectable<R> {
    fn input() -> Self {
        Self {
            noun: "input",
            list_command: "inputs",
            valid: R::inputs,
            current: |r| r.basic_status().map(|s| s.input),
            describe_current: |name| format!("Current input is {}", name),
            apply: R::set_input,
        }
    }

    fn surround_program() -> Self {
        Self {
            noun: "surround program",
            list_command: "sps",
            valid: R::surround_programs,
            current: R::surround_program,
            describe_current: str::to_string,
            apply: R::set_surround_program,
        }
    }

    fn zone() -> Self {
        Self {
            noun: "zone",
            list_command: "zones",
            valid: R::zones,
            current: R::zone,
            describe_current: str::to_string,
            apply: R::set_zone,
        }
    }

    fn scene() -> Self {
        Self {
            noun: "scene",
            list_command: "scenes",
            valid: R::scenes,
            current: R::scene,
            describe_current: str::to_string,
            apply: R::set_scene,
        }
    }

    fn invalid(&self) -> String {
        format!(
            "That's not a valid {}. Run `rxvc {}' to get a list of them.",
            self.noun, self.list_command
        )
    }
}

fn select<R: ReceiverControl>(receiver: &R, selectable: &Selectable<R>, candidate: Option<&str>) -> Result<Report> {
    let Some(candidate) = candidate else {
        let current = (selectable.current)(receiver)?;
        return Ok(Line::plain((selectable.describe_current)(&current)).into());
    };

    if !validate::is_valid(candidate, &(selectable.valid)(receiver)?) {
        debug!(noun = selectable.noun, candidate, "rejected unknown name");
        return Ok(Line::plain(selectable.invalid()).into());
    }

    let report = Report::line(Line::plain(format!("Setting receiver {} to {}", selectable.noun, candidate)));
    info!(noun = selectable.noun, candidate, "applying selection");
    keeping(&report, (selectable.apply)(receiver, candidate))?;
    Ok(report)
}

fn outputs(receiver: &impl ReceiverControl) -> Result<Report> {
    let mut report = Report::new();
    for (name, enabled) in receiver.outputs()? {
        report.push(Line::plain(format!("* {}: {}", name, enabled)));
    }
    Ok(report)
}

fn output(receiver: &impl ReceiverControl, name: &str, state: &str) -> Result<Report> {
    // Bad state tokens are flagged as errors, unknown names only as information
    let Some(switch) = Switch::parse_exact(state) else {
        return Ok(Line::alert(STATE_NOT_ON_OFF).into());
    };

    if !validate::is_known_output(name, &receiver.outputs()?) {
        return Ok(Line::plain("That's not a valid output. Run `rxvc outputs' to get a list of them.").into());
    }

    let report = Report::line(Line::plain(format!("Setting receiver output {} to {}", name, switch)));
    info!(output = name, enabled = switch.is_on(), "setting output");
    keeping(&report, receiver.set_output(name, switch.is_on()))?;
    Ok(report)
}

fn set_volume(receiver: &impl ReceiverControl, requested: Option<f64>) -> Result<Report> {
    let Some(requested) = requested else {
        let current = receiver.basic_status()?.volume_db;
        return Ok(Line::plain(format_decimal(current)).into());
    };

    let Ok(target) = volume::absolute_target(requested) else {
        return Ok(Line::plain(VOLUME_NOT_NEGATIVE).into());
    };

    info!(target, "setting volume");
    match receiver.set_volume(target) {
        Ok(()) => {
            let current = receiver.basic_status()?.volume_db;
            Ok(Line::plain(format_decimal(current)).into())
        }
        Err(e) => classified(ErrorRule::VOLUME_STEP, e, Report::new()),
    }
}

fn adjust_volume(receiver: &impl ReceiverControl, points: u32, direction: Direction) -> Result<Report> {
    let current = receiver.basic_status()?.volume_db;
    let target = volume::adjust(current, points, direction);

    info!(current, target, "adjusting volume");
    match receiver.set_volume(target) {
        Ok(()) => Ok(Line::plain(format_decimal(target)).into()),
        Err(e) => classified(ErrorRule::VOLUME_RANGE, e, Report::new()),
    }
}

fn fade(receiver: &impl ReceiverControl, requested: Option<f64>, delay: Option<f64>) -> Result<Report> {
    let Some(requested) = requested else {
        return Ok(Line::plain(FADE_USAGE).into());
    };
    let Ok(request) = FadeRequest::new(requested, delay) else {
        return Ok(Line::plain(FADE_USAGE).into());
    };

    let mut report = Report::new();
    report.push(Line::plain(format!(
        "Fading receiver volume to {} with delay of {} seconds",
        format_decimal(requested),
        format_decimal(request.delay_secs)
    )));

    info!(target = request.target_db, delay = request.delay_secs, "fading volume");
    match receiver.fade_volume(request.target_db, request.delay_secs) {
        Ok(()) => Ok(report),
        Err(e) => {
            if e.is_rejection() {
                report.push(Line::plain(e.message()));
            }
            classified(ErrorRule::VOLUME_STEP, e, report)
        }
    }
}

fn mute(receiver: &impl ReceiverControl, state: Option<&str>) -> Result<Report> {
    let Some(state) = state else {
        let muted = receiver.basic_status()?.muted;
        return Ok(Line::plain(format!("Muted: {}", muted)).into());
    };

    let Some(switch) = Switch::parse_normalized(state) else {
        return Ok(Line::alert(STATE_NOT_ON_OFF).into());
    };

    info!(muted = switch.is_on(), "setting mute");
    match receiver.set_mute(switch.is_on()) {
        Ok(()) => Ok(Line::plain(switch.as_str()).into()),
        Err(e) => classified(ErrorRule::MUTE, e, Report::new()),
    }
}

fn power(receiver: &impl ReceiverControl, state: Option<&str>) -> Result<Report> {
    let Some(state) = state else {
        let on = receiver.basic_status()?.power;
        return Ok(Line::plain(format!("Power state is {}", Switch::from_bool(on))).into());
    };

    let Some(switch) = Switch::parse_normalized(state) else {
        return Ok(Line::alert(STATE_NOT_ON_OFF).into());
    };

    info!(on = switch.is_on(), "setting power");
    match receiver.set_power(switch.is_on()) {
        Ok(()) => Ok(Line::plain(format!("Turned the receiver {}", switch)).into()),
        Err(e) => classified(ErrorRule::POWER, e, Report::new()),
    }
}

fn playback(receiver: &impl ReceiverControl, token: Option<&str>) -> Result<Report> {
    if let Gate::Closed(line) = gate::playback(receiver)? {
        return Ok(line.into());
    }

    let Some(token) = token else {
        return Ok(render_play_status(&receiver.play_status()?));
    };

    let Ok(command) = token.parse::<PlaybackCommand>() else {
        return Ok(Line::plain(PLAYBACK_INVALID).into());
    };

    let report = Report::line(Line::plain(format!("Sending command {} to receiver", command)));
    info!(%command, "sending playback command");
    keeping(&report, command.apply(receiver))?;
    Ok(report)
}

fn menu(receiver: &impl ReceiverControl, token: Option<&str>) -> Result<Report> {
    let status = match gate::menu(receiver)? {
        Gate::Open(status) => status,
        Gate::Closed(line) => return Ok(line.into()),
    };

    let Some(token) = token else {
        return Ok(render_menu_status(Report::new(), &status));
    };

    let Ok(command) = token.parse::<MenuCommand>() else {
        return Ok(Line::plain(MENU_INVALID).into());
    };

    let report = Report::line(Line::plain(format!("Sending menu command {} to receiver", command)));
    info!(%command, "sending menu command");
    keeping(&report, command.apply(receiver))?;

    let status = keeping(&report, receiver.menu_status())?;
    Ok(render_menu_status(report, &status))
}

fn render_play_status(status: &PlayStatus) -> Report {
    let mut report = Report::new();
    report
        .push(Line::blank())
        .push(Line::plain(format!("Playing: {}", status.playing)))
        .push(Line::plain(format!("Artist: {}", status.artist)))
        .push(Line::plain(format!("Album: {}", status.album)))
        .push(Line::plain(format!("Track: {}", status.track)))
        .push(Line::plain(format!("Station: {}", status.station)))
        .push(Line::blank());
    report
}

fn render_menu_status(mut report: Report, status: &MenuStatus) -> Report {
    report
        .push(Line::blank())
        .push(Line::plain(format!("Ready: {}", status.ready)))
        .push(Line::plain(format!("Layer: {}", status.layer)))
        .push(Line::plain(format!("Name: {}", status.name)))
        .push(Line::blank())
        .push(Line::plain(format!("Total lines: {}", status.max_line)))
        .push(Line::blank());
    for entry in status.lines() {
        report.push(Line::plain(format!("*  {}", entry)));
    }
    report
}

/// Append the classified form of `error` to `report`, or hand the error back
fn classified(rule: ErrorRule, error: ReceiverError, mut report: Report) -> Result<Report> {
    match rule.classify(error) {
        Ok(Some(line)) => {
            report.push(line);
            Ok(report)
        }
        Ok(None) => Ok(report),
        Err(source) => Err(DispatchError::after(report, source)),
    }
}

/// Attach the lines announced so far to a failed receiver call
fn keeping<T>(report: &Report, result: receiver_api::Result<T>) -> Result<T> {
    result.map_err(|source| DispatchError::after(report.clone(), source))
}
