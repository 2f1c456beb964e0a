//! Dependency source selection.
//!
//! An explicitly designated file is always used as-is. Otherwise
//! `Pipfile.lock` is read from the project directory, and `Pipfile` is read
//! only when the lock file does not exist. A lock file that exists but cannot
//! be read or parsed is an error, never a reason to fall back.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use crate::pipfile::model::{Dependencies, SourceFormat};

/// Lock file read when no source is designated.
pub const DEFAULT_LOCK_NAME: &str = "Pipfile.lock";

/// Pipfile read when no source is designated and the lock file is absent.
pub const DEFAULT_PIPFILE_NAME: &str = "Pipfile";

/// The dependencies read from a source file.
#[derive(Debug)]
pub struct LoadedSource {
    /// Which format the file was read as.
    pub format: SourceFormat,
    /// The file the dependencies came from.
    pub path: PathBuf,
    /// The extracted dependencies.
    pub dependencies: Dependencies,
}

/// Read and extract the dependency source.
///
/// With `explicit` set, that file is read in the given format. Without it,
/// the default files in `project_dir` are tried in order.
pub fn load_source(
    explicit: Option<(SourceFormat, PathBuf)>,
    project_dir: &Path,
) -> Result<LoadedSource> {
    if let Some((format, path)) = explicit {
        debug!("Reading dependencies from {} ({format})", path.display());
        let content = fs_err::read_to_string(&path)?;
        let dependencies = format.parse(&content, &path)?;
        return Ok(LoadedSource {
            format,
            path,
            dependencies,
        });
    }

    let lock_path = project_dir.join(DEFAULT_LOCK_NAME);
    let (format, path, content) = match fs_err::read_to_string(&lock_path) {
        Ok(content) => (SourceFormat::Lock, lock_path, content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(
                "{} not found, falling back to {DEFAULT_PIPFILE_NAME}",
                lock_path.display()
            );
            let pipfile_path = project_dir.join(DEFAULT_PIPFILE_NAME);
            let content = match fs_err::read_to_string(&pipfile_path) {
                Ok(content) => content,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    bail!(
                        "No {DEFAULT_LOCK_NAME} or {DEFAULT_PIPFILE_NAME} found in {}",
                        project_dir.display()
                    );
                }
                Err(err) => return Err(err.into()),
            };
            (SourceFormat::Pipfile, pipfile_path, content)
        }
        Err(err) => return Err(err.into()),
    };

    debug!("Reading dependencies from {} ({format})", path.display());
    let dependencies = format.parse(&content, &path)?;
    Ok(LoadedSource {
        format,
        path,
        dependencies,
    })
}
