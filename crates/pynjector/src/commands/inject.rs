//! `pynjector` — copy Pipenv dependencies into Flit's configuration.

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::pipfile::{Dependencies, load_source};
use crate::printer::Printer;
use crate::pyproject::{self, PyProject};

/// Execute `pynjector`.
///
/// In safe mode the dependencies are printed and the configuration file is
/// not read.
pub fn inject(cli: &Cli, printer: Printer) -> Result<ExitStatus> {
    let project_dir =
        std::env::current_dir().context("failed to determine the current directory")?;

    let source = load_source(cli.explicit_source(), &project_dir)?;
    debug!(
        "Found {} dependencies and {} dev dependencies in {}",
        source.dependencies.prod.len(),
        source.dependencies.dev.len(),
        source.path.display()
    );

    if source.dependencies.is_empty() {
        printer.warn(&format!("No dependencies found in {}", source.format));
    }

    if cli.safe {
        printer.report(&safe_report(&source.dependencies));
        return Ok(ExitStatus::Success);
    }

    let target = PyProject::from_path(&cli.config)?;
    let target = pyproject::inject(&source.dependencies, target, &cli.tool, true)?;

    printer.info(&format!(
        "Injected {} dependencies and {} dev dependencies into {}",
        source.dependencies.prod.len(),
        source.dependencies.dev.len(),
        target.path().display()
    ));
    Ok(ExitStatus::Success)
}

/// The human-readable listing printed in safe mode.
fn safe_report(deps: &Dependencies) -> String {
    format!(
        "The extracted project dependencies are:\n{:?}\nand for develop are:\n{:?}",
        deps.prod, deps.dev
    )
}
