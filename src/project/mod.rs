//! Project module - BMAD project configuration
//!
//! Manages `_bmad/_config/project-config.yaml`: the nested settings document
//! that drives `CLAUDE.md` generation and validation.
//!
//! Loading yields a single result type. Callers match on [`ConfigError`] to
//! tell "not initialized yet" apart from a file that exists but is broken.
//!
//! # Example
//!
//! ```no_run
//! use bmad_setup::paths::SetupPaths;
//! use bmad_setup::project::{self, ConfigError};
//!
//! let paths = SetupPaths::new(".");
//! match project::load(&paths) {
//!     Ok(document) => {
//!         let name = document.string_or(&["project", "display_name"], "Unknown Project");
//!         println!("Project: {name}");
//!     }
//!     Err(ConfigError::NotFound { path }) => println!("Run init first ({})", path.display()),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod defaults;
mod document;
mod internal;

use anyhow::Result;
use std::path::PathBuf;

use crate::paths::SetupPaths;

pub use document::{is_truthy, plain_string, ConfigDocument, SECTIONS};
pub use internal::{
    id_table, ArchonSection, ConfigError, OpenProjectSection, PathsSection, ProjectConfig,
    ProjectSection, RagSection, TeamSection, TestingSection, WorkflowsSection,
};

/// Check if the project has a configuration file
pub fn is_configured(paths: &SetupPaths) -> bool {
    paths.config_path().exists()
}

/// Load the configuration document
///
/// Returns [`ConfigError::NotFound`] when the file does not exist and
/// [`ConfigError::Malformed`] when it is not a mapping of sections.
pub fn load(paths: &SetupPaths) -> Result<ConfigDocument, ConfigError> {
    internal::load(paths)
}

/// Save the configuration document, returning the path written
///
/// Creates `_bmad/_config/` if it doesn't exist.
pub fn save(paths: &SetupPaths, document: &ConfigDocument) -> Result<PathBuf> {
    internal::save(paths, document)
}
