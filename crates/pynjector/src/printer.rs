//! Output formatting for pynjector.
//!
//! The [`Printer`] controls whether messages are emitted based on the user's
//! `--quiet` flag. Status messages go to stderr; the safe-mode report is the
//! only thing written to stdout. Diagnostics for `--verbose` go through
//! `tracing` instead.

use anstream::{eprintln, println};
use owo_colors::OwoColorize;

/// Controls output formatting for pynjector.
#[derive(Copy, Clone)]
pub struct Printer {
    /// Whether output is suppressed.
    quiet: bool,
}

impl Printer {
    /// Create a new printer with the given quiet setting.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a report to stdout.
    ///
    /// Reports are the requested output of a command, so `--quiet` does not
    /// suppress them.
    pub fn report(&self, message: &str) {
        println!("{message}");
    }

    /// Print an informational message to stderr.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a warning message to stderr.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}: {}", "warning".yellow().bold(), message);
        }
    }

    /// Print an error message to stderr. Errors are printed even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }
}
