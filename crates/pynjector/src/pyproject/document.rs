use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml_edit::{Array, DocumentMut, Item, TableLike, value};
use tracing::debug;

use crate::error::Error;
use crate::pipfile::Dependencies;

/// A parsed `pyproject.toml` and the path it was read from.
#[derive(Debug, Clone)]
pub struct PyProject {
    path: PathBuf,
    document: DocumentMut,
}

impl PyProject {
    /// Read and parse the configuration file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        let document = content
            .parse::<DocumentMut>()
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// The path this document is written back to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document as it currently stands in memory.
    pub fn document(&self) -> &DocumentMut {
        &self.document
    }

    /// Replace `requires` and `dev-requires` in `[tool.<tool>.metadata]`.
    ///
    /// The metadata table must already exist; missing tables are never
    /// created.
    pub fn set_requirements(&mut self, deps: &Dependencies, tool: &str) -> Result<(), Error> {
        let metadata = self
            .document
            .get_mut("tool")
            .and_then(Item::as_table_like_mut)
            .and_then(|table| table.get_mut(tool))
            .and_then(Item::as_table_like_mut)
            .and_then(|table| table.get_mut("metadata"))
            .and_then(Item::as_table_like_mut)
            .ok_or_else(|| Error::MissingMetadata {
                tool: tool.to_owned(),
                path: self.path.display().to_string(),
            })?;

        replace_list(metadata, "requires", &deps.prod);
        replace_list(metadata, "dev-requires", &deps.dev);
        Ok(())
    }

    /// Serialize the whole document, overwriting the file it was read from.
    pub fn write(&self) -> Result<()> {
        fs_err::write(&self.path, self.document.to_string())?;
        debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

/// Merge `deps` into `target` and write it back when `persist` is set.
///
/// The file is written once, after both fields have been replaced. Without
/// `persist` the file on disk is left untouched.
pub fn inject(
    deps: &Dependencies,
    mut target: PyProject,
    tool: &str,
    persist: bool,
) -> Result<PyProject> {
    target.set_requirements(deps, tool)?;
    if persist {
        target.write()?;
    } else {
        debug!("Leaving {} unchanged", target.path.display());
    }
    Ok(target)
}

fn replace_list(table: &mut dyn TableLike, key: &str, entries: &[String]) {
    let array: Array = entries.iter().map(String::as_str).collect();
    table.insert(key, value(array));
}
