//! Status line output
//!
//! Every user-facing message is one line on stdout:
//! `[CHANGELOG] <Status> <message>`.

use std::fmt;
use std::io::Write;

use console::{style, Style};
use logbook_core::config::MODULE_LABEL;

/// Category of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Starting,
    Building,
    Success,
    Failed,
    Warning,
    Error,
}

impl Status {
    /// Word printed for this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Starting => "Starting",
            Self::Building => "Building",
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    fn style(&self) -> Style {
        let base = Style::new().underlined();
        match self {
            Self::Starting | Self::Building => base.cyan(),
            Self::Success => base.green(),
            Self::Warning => base.yellow(),
            Self::Failed | Self::Error => base.red(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a status line
pub fn status_line(status: Status, message: &str) -> String {
    format!(
        "{} {} {}",
        style(MODULE_LABEL).blue(),
        status.style().apply_to(status.label()),
        message
    )
}

/// Print a status line to stdout
pub fn status(status: Status, message: &str) {
    report(&mut std::io::stdout().lock(), status, message);
}

/// Write a status line to `out`. A failed write drops the line.
pub fn report<W: Write + ?Sized>(out: &mut W, status: Status, message: &str) {
    let _ = writeln!(out, "{}", status_line(status, message));
}
