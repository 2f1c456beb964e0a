//! Data model for extracted dependencies.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipfile::extract::{extract_from_lock, extract_from_pipfile};

/// Production and development dependencies, formatted for Flit.
///
/// Each entry reads `"<name> (<version>)"`. Order follows the source document
/// and duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dependencies {
    /// Dependencies from `default` / `packages`.
    pub prod: Vec<String>,
    /// Dependencies from `develop` / `dev-packages`.
    pub dev: Vec<String>,
}

impl Dependencies {
    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.prod.is_empty() && self.dev.is_empty()
    }
}

/// Which kind of Pipenv document a dependency source is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// `Pipfile.lock`, JSON with `default` and `develop`.
    Lock,
    /// `Pipfile`, TOML with `packages` and `dev-packages`.
    Pipfile,
}

impl SourceFormat {
    /// Parse the document text and extract its dependencies.
    ///
    /// `path` is only used to label parse errors.
    pub fn parse(self, content: &str, path: &Path) -> Result<Dependencies> {
        match self {
            Self::Lock => {
                let document: serde_json::Value = serde_json::from_str(content)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                Ok(extract_from_lock(&document)?)
            }
            Self::Pipfile => {
                let document: toml::Table = toml::from_str(content)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                Ok(extract_from_pipfile(&document)?)
            }
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lock => f.write_str("Pipfile.lock"),
            Self::Pipfile => f.write_str("Pipfile"),
        }
    }
}
