//! Flit configuration (`pyproject.toml`) editing.
//!
//! [`inject`] replaces `requires` and `dev-requires` in
//! `[tool.<tool>.metadata]` and optionally writes the document back. The
//! document is held as a [`toml_edit::DocumentMut`], so comments, ordering
//! and formatting of every other key survive the round trip.

mod document;

pub use document::{PyProject, inject};

/// Configuration file updated when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "pyproject.toml";

/// Tool table updated when `--tool` is not given.
pub const DEFAULT_TOOL: &str = "flit";
