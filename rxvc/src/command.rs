//! Commands understood by the dispatcher
//!
//! These are independent of the argument parser: [`crate::cli`] converts its
//! parsed subcommands into a [`Command`], and tests build them directly.

use std::fmt;
use std::str::FromStr;

use receiver_api::{ReceiverControl, Result};

/// One invocation's worth of work
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Status,
    Inputs,
    Input(Option<String>),
    Outputs,
    Output { name: String, state: String },
    Volume(Option<f64>),
    Up(Option<u32>),
    Down(Option<u32>),
    Fade { volume: Option<f64>, delay: Option<f64> },
    Mute(Option<String>),
    Power(Option<String>),
    SurroundProgram(Option<String>),
    SurroundPrograms,
    Zone(Option<String>),
    Zones,
    Scene(Option<String>),
    Scenes,
    Playback(Option<String>),
    Menu(Option<String>),
}

/// Error returned when a token is not a known playback or menu command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command '{0}'")]
pub struct UnknownCommand(pub String);

/// Transport controls, one per receiver transport operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Stop,
    Pause,
    Next,
    Previous,
}

impl PlaybackCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackCommand::Play => "play",
            PlaybackCommand::Stop => "stop",
            PlaybackCommand::Pause => "pause",
            PlaybackCommand::Next => "next",
            PlaybackCommand::Previous => "previous",
        }
    }

    pub fn apply(self, receiver: &impl ReceiverControl) -> Result<()> {
        match self {
            PlaybackCommand::Play => receiver.play(),
            PlaybackCommand::Stop => receiver.stop(),
            PlaybackCommand::Pause => receiver.pause(),
            PlaybackCommand::Next => receiver.next(),
            PlaybackCommand::Previous => receiver.previous(),
        }
    }
}

impl FromStr for PlaybackCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "play" => Ok(PlaybackCommand::Play),
            "stop" => Ok(PlaybackCommand::Stop),
            "pause" => Ok(PlaybackCommand::Pause),
            "next" => Ok(PlaybackCommand::Next),
            "previous" => Ok(PlaybackCommand::Previous),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-screen menu navigation, one per receiver menu operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    Left,
    Right,
    Select,
    Return,
}

impl MenuCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuCommand::Up => "up",
            MenuCommand::Down => "down",
            MenuCommand::Left => "left",
            MenuCommand::Right => "right",
            MenuCommand::Select => "select",
            MenuCommand::Return => "return",
        }
    }

    pub fn apply(self, receiver: &impl ReceiverControl) -> Result<()> {
        match self {
            MenuCommand::Up => receiver.menu_up(),
            MenuCommand::Down => receiver.menu_down(),
            MenuCommand::Left => receiver.menu_left(),
            MenuCommand::Right => receiver.menu_right(),
            MenuCommand::Select => receiver.menu_select(),
            MenuCommand::Return => receiver.menu_return(),
        }
    }
}

impl FromStr for MenuCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "up" => Ok(MenuCommand::Up),
            "down" => Ok(MenuCommand::Down),
            "left" => Ok(MenuCommand::Left),
            "right" => Ok(MenuCommand::Right),
            "select" => Ok(MenuCommand::Select),
            "return" => Ok(MenuCommand::Return),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
