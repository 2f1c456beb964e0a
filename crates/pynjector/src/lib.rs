//! pynjector: inject Pipenv dependencies into a Flit `pyproject.toml`.
//!
//! This crate provides the entry point for the `pynjector` binary. It parses
//! CLI arguments, reads the dependencies from `Pipfile.lock` (or `Pipfile`),
//! and writes them into `[tool.flit.metadata]` of the project configuration.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
mod error;
pub mod logging;
pub mod pipfile;
pub mod printer;
pub mod pyproject;

pub use error::Error;

/// Entry point for the pynjector CLI.
///
/// Parses CLI arguments, installs the tracing subscriber and runs the
/// injection. Precondition failures (a missing section or metadata table)
/// are reported on a single line; anything else prints its cause chain.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    logging::setup_logging(cli.verbose, cli.quiet);

    let printer = Printer::new(cli.quiet);

    match commands::inject(&cli, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            if let Some(precondition) = err.downcast_ref::<Error>() {
                printer.error(&precondition.to_string());
                return ExitStatus::Failure.into();
            }

            let mut causes = err.chain();
            if let Some(head) = causes.next() {
                printer.error(&head.to_string());
            }
            for cause in causes {
                eprintln!(
                    "  {}: {}",
                    "Caused by".red().bold(),
                    cause.to_string().trim()
                );
            }
            ExitStatus::Error.into()
        }
    }
}
