use std::io::Write;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{style, Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};

/// Wipe the visible screen and park the cursor top-left.
pub(crate) fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0)).context("failed to clear screen")
}

/// Severity of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn color(self) -> Color {
        match self {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            StatusKind::Info => "[ok]",
            StatusKind::Error => "[!!]",
        }
    }
}

/// Holds a status line waiting to be shown under the next menu.
#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) kind: StatusKind,
}

impl StatusMessage {
    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Print a status line, coloured when `color` is set.
pub(crate) fn write_status<W: Write>(
    out: &mut W,
    kind: StatusKind,
    text: &str,
    color: bool,
) -> Result<()> {
    let line = format!("{} {}", kind.marker(), text);
    let written = if color {
        queue!(out, PrintStyledContent(style(line).with(kind.color())), Print("\n"))
    } else {
        queue!(out, Print(line), Print("\n"))
    };
    written.context("failed to write status line")
}
