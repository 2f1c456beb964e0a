//! Extract formatted dependency lists from parsed Pipenv documents.
//!
//! The two formats locate the version differently and disagree on missing
//! values: a lock entry without `version` renders as `"name ()"`, while a
//! Pipfile entry always embeds its value.

use tracing::trace;

use crate::error::Error;
use crate::pipfile::model::Dependencies;

const LOCK_DOCUMENT: &str = "Pipfile.lock";
const PIPFILE_DOCUMENT: &str = "Pipfile";

/// Extract dependencies from a parsed `Pipfile.lock`.
///
/// `default` becomes `prod` and `develop` becomes `dev`.
pub fn extract_from_lock(document: &serde_json::Value) -> Result<Dependencies, Error> {
    Ok(Dependencies {
        prod: format_lock_section(document, "default")?,
        dev: format_lock_section(document, "develop")?,
    })
}

/// Extract dependencies from a parsed `Pipfile`.
///
/// `packages` becomes `prod` and `dev-packages` becomes `dev`.
pub fn extract_from_pipfile(document: &toml::Table) -> Result<Dependencies, Error> {
    Ok(Dependencies {
        prod: format_pipfile_section(document, "packages")?,
        dev: format_pipfile_section(document, "dev-packages")?,
    })
}

fn format_lock_section(
    document: &serde_json::Value,
    section: &'static str,
) -> Result<Vec<String>, Error> {
    let entries = document
        .get(section)
        .ok_or(Error::MissingSection {
            section,
            document: LOCK_DOCUMENT,
        })?
        .as_object()
        .ok_or(Error::InvalidSection {
            section,
            document: LOCK_DOCUMENT,
        })?;

    entries
        .iter()
        .map(|(name, entry)| -> Result<String, Error> {
            let entry = entry.as_object().ok_or_else(|| Error::InvalidEntry {
                section,
                name: name.clone(),
            })?;
            let version = match entry.get("version") {
                None => String::new(),
                Some(serde_json::Value::String(version)) => version.clone(),
                Some(other) => other.to_string(),
            };
            trace!("{section}: {name} {version}");
            Ok(format!("{name} ({version})"))
        })
        .collect()
}

fn format_pipfile_section(
    document: &toml::Table,
    section: &'static str,
) -> Result<Vec<String>, Error> {
    let entries = document
        .get(section)
        .ok_or(Error::MissingSection {
            section,
            document: PIPFILE_DOCUMENT,
        })?
        .as_table()
        .ok_or(Error::InvalidSection {
            section,
            document: PIPFILE_DOCUMENT,
        })?;

    Ok(entries
        .iter()
        .map(|(name, value)| {
            let version = match value {
                toml::Value::String(version) => version.clone(),
                other => other.to_string(),
            };
            trace!("{section}: {name} {version}");
            format!("{name} ({version})")
        })
        .collect())
}
