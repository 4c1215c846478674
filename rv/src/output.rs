//! Styled writers: where rendered output goes

use std::io::{self, Write};

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::{Color, RenderedOutput, Segment, Style};

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the environment (NO_COLOR, CLICOLOR, tty detection)
    #[default]
    Auto,
    /// Always emit color codes, even into a pipe
    Always,
    /// Never emit color codes
    Never,
}

impl ColorMode {
    /// Configure the global `colored` switch for this mode
    pub fn apply(self) {
        debug!(mode = ?self, "ColorMode::apply");
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// A sink for styled segments
pub trait StyledWriter {
    fn write_segment(&mut self, segment: &Segment) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Write a whole rendering and flush it
    fn write_output(&mut self, output: &RenderedOutput) -> io::Result<()> {
        for segment in output.segments() {
            self.write_segment(segment)?;
        }
        self.flush()
    }
}

/// Writes segments with ANSI styling via `colored`
pub struct TerminalWriter<W: Write> {
    inner: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> StyledWriter for TerminalWriter<W> {
    fn write_segment(&mut self, segment: &Segment) -> io::Result<()> {
        match segment {
            Segment::Text { text, style } => write!(self.inner, "{}", paint(text, *style)),
            Segment::Newline => writeln!(self.inner),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes segment text only, dropping all styling
pub struct PlainWriter<W: Write> {
    inner: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> StyledWriter for PlainWriter<W> {
    fn write_segment(&mut self, segment: &Segment) -> io::Result<()> {
        match segment {
            Segment::Text { text, .. } => self.inner.write_all(text.as_bytes()),
            Segment::Newline => self.inner.write_all(b"\n"),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn paint(text: &str, style: Style) -> colored::ColoredString {
    let mut painted = text.normal();
    if let Some(color) = style.color {
        painted = painted.color(to_colored(color));
    }
    if style.bold {
        painted = painted.bold();
    }
    if style.dim {
        painted = painted.dimmed();
    }
    painted
}

fn to_colored(color: Color) -> colored::Color {
    match color {
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Blue => colored::Color::Blue,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
    }
}
