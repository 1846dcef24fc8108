//! Rendered command output
//!
//! Handlers never print. They return a [`Report`] and the caller decides
//! where each line goes and whether alerts are coloured.

use std::fmt;
use std::io::{self, Write};

use owo_colors::OwoColorize;

/// How a line should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary informational text
    Plain,
    /// Highlighted as an error (red when colour is enabled)
    Alert,
}

/// Which standard stream a line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One line of command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
    pub stream: Stream,
}

impl Line {
    /// Plain text on stdout
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
            stream: Stream::Stdout,
        }
    }

    /// Error-styled text on stdout
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Alert,
            stream: Stream::Stdout,
        }
    }

    /// Error-styled text on stderr
    pub fn diagnostic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Alert,
            stream: Stream::Stderr,
        }
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

/// Ordered output of a single command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report consisting of a single line
    pub fn line(line: Line) -> Self {
        Self { lines: vec![line] }
    }

    pub fn push(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of every line, regardless of stream
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Write every line to its stream, colouring alerts when `color` is set
    pub fn write_to<O: Write, E: Write>(&self, stdout: &mut O, stderr: &mut E, color: bool) -> io::Result<()> {
        for line in &self.lines {
            let out: &mut dyn Write = match line.stream {
                Stream::Stdout => &mut *stdout,
                Stream::Stderr => &mut *stderr,
            };
            match line.tone {
                Tone::Alert if color => writeln!(out, "{}", line.text.red())?,
                _ => writeln!(out, "{}", line.text)?,
            }
        }
        Ok(())
    }
}

impl From<Line> for Report {
    fn from(line: Line) -> Self {
        Report::line(line)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Format a float with at least one decimal, e.g. `-20.0` or `-19.5`
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
