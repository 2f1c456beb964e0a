//! Reading Pipenv dependency declarations.
//!
//! Two source formats are supported, selected by [`SourceFormat`]:
//!
//! - `Pipfile.lock` (JSON): `default` -> prod, `develop` -> dev, the version
//!   is the `version` field of each entry.
//! - `Pipfile` (TOML): `packages` -> prod, `dev-packages` -> dev, the version
//!   is the entry value itself.
//!
//! Both produce a [`Dependencies`] pair of `"<name> (<version>)"` strings in
//! source order.

pub mod discovery;
pub mod extract;
pub mod model;

pub use discovery::{DEFAULT_LOCK_NAME, DEFAULT_PIPFILE_NAME, LoadedSource, load_source};
pub use extract::{extract_from_lock, extract_from_pipfile};
pub use model::{Dependencies, SourceFormat};
