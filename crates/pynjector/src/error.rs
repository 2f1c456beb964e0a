//! Precondition failures on the shape of the input and target documents.
//!
//! These are the only errors the entry point reports as a single line with
//! exit status 1. I/O and parse failures travel as [`anyhow::Error`] instead.

/// A required section is missing or has the wrong shape.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{section}` section not found in {document}")]
    MissingSection {
        section: &'static str,
        document: &'static str,
    },

    #[error("`{section}` section in {document} must be a table")]
    InvalidSection {
        section: &'static str,
        document: &'static str,
    },

    #[error("entry `{name}` in `{section}` must be a table with an optional `version`")]
    InvalidEntry { section: &'static str, name: String },

    #[error("`[tool.{tool}.metadata]` table not found in {path}")]
    MissingMetadata { tool: String, path: String },
}
