//! CLI argument definitions for pynjector.
//!
//! pynjector has no subcommands; [`Cli`] holds every option.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::pipfile::SourceFormat;
use crate::pyproject::{DEFAULT_CONFIG_NAME, DEFAULT_TOOL};

/// Clap v3-style help menu colors, matching uv's convention.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Inject Pipenv dependencies into a Flit pyproject.toml.
#[derive(Parser, Debug)]
#[command(
    name = "pynjector",
    author,
    version,
    about = "Inject Pipenv dependencies into a Flit pyproject.toml.",
    styles = STYLES,
    after_help = "Without --lock or --pipfile, Pipfile.lock is read and Pipfile is used if it does not exist."
)]
pub struct Cli {
    /// Path to a Pipfile.lock file.
    #[arg(short, long, value_name = "PATH", conflicts_with = "pipfile")]
    pub lock: Option<PathBuf>,

    /// Path to a Pipfile.
    #[arg(short, long, value_name = "PATH")]
    pub pipfile: Option<PathBuf>,

    /// Path to Flit's config file.
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "PYNJECTOR_CONFIG",
        default_value = DEFAULT_CONFIG_NAME
    )]
    pub config: PathBuf,

    /// Name of the `[tool.<name>.metadata]` table to update.
    #[arg(
        short,
        long,
        value_name = "NAME",
        env = "PYNJECTOR_TOOL",
        default_value = DEFAULT_TOOL
    )]
    pub tool: String,

    /// Do not overwrite Flit's config file; print the dependencies instead.
    #[arg(long)]
    pub safe: bool,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The explicitly designated source file, if any.
    pub fn explicit_source(&self) -> Option<(SourceFormat, PathBuf)> {
        if let Some(path) = &self.lock {
            return Some((SourceFormat::Lock, path.clone()));
        }
        self.pipfile
            .as_ref()
            .map(|path| (SourceFormat::Pipfile, path.clone()))
    }
}
