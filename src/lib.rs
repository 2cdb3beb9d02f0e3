//! # bmad-setup - BMAD project configuration
//!
//! Configures a BMAD project: an interactive wizard writes
//! `_bmad/_config/project-config.yaml`, a validator checks it, and
//! `CLAUDE.md` is generated from a `{{TOKEN}}` template using the
//! OpenProject and Archon settings in that file.
//!
//! All filesystem locations come from [`paths::SetupPaths`], so every
//! component can be pointed at an arbitrary project root.

pub mod commands;
pub mod paths;
pub mod project;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use paths::SetupPaths;
pub use project::{ConfigDocument, ConfigError};
pub use render::RenderError;
pub use validate::ValidationReport;

/// Environment variable holding the `tracing` filter (e.g. `BMAD_LOG=debug`)
pub const LOG_ENV: &str = "BMAD_LOG";

/// Separator line used by console reports
pub(crate) const RULE: &str = "============================================================";
