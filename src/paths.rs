//! Single source of truth for the BMAD project filesystem layout.
//!
//! This module defines WHERE files live. It has no I/O and no validation.
//! Every component receives a [`SetupPaths`] instead of reaching for
//! process-wide constants, so tests can point it at a temporary directory.
//!
//! ```text
//! {project-root}/
//! ├── CLAUDE.md                            # Generated document
//! ├── _bmad/
//! │   ├── _config/project-config.yaml      # Project configuration
//! │   └── templates/CLAUDE.md.template     # Placeholder template (read-only)
//! └── _bmad-output/
//!     ├── planning-artifacts/
//!     └── implementation-artifacts/
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the project root (defaults to the current directory).
pub const PROJECT_ROOT_ENV: &str = "BMAD_PROJECT_ROOT";

/// Name of the planning artifacts directory under the output folder.
pub const PLANNING_ARTIFACTS: &str = "planning-artifacts";

/// Name of the implementation artifacts directory under the output folder.
pub const IMPLEMENTATION_ARTIFACTS: &str = "implementation-artifacts";

/// Resolved locations for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPaths {
    root: PathBuf,
}

impl SetupPaths {
    /// Layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at `$BMAD_PROJECT_ROOT`, or the current directory.
    pub fn from_env() -> Self {
        match std::env::var_os(PROJECT_ROOT_ENV) {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::new("."),
        }
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project config: `_bmad/_config/project-config.yaml`
    pub fn config_path(&self) -> PathBuf {
        self.root.join("_bmad/_config/project-config.yaml")
    }

    /// Template: `_bmad/templates/CLAUDE.md.template`
    pub fn template_path(&self) -> PathBuf {
        self.root.join("_bmad/templates/CLAUDE.md.template")
    }

    /// Generated document: `CLAUDE.md`
    pub fn claude_md_path(&self) -> PathBuf {
        self.root.join("CLAUDE.md")
    }

    /// Output folder: `_bmad-output/`
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("_bmad-output")
    }

    /// `_bmad-output/planning-artifacts/`
    pub fn planning_artifacts_dir(&self) -> PathBuf {
        self.output_dir().join(PLANNING_ARTIFACTS)
    }

    /// `_bmad-output/implementation-artifacts/`
    pub fn implementation_artifacts_dir(&self) -> PathBuf {
        self.output_dir().join(IMPLEMENTATION_ARTIFACTS)
    }
}

impl Default for SetupPaths {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        let paths = SetupPaths::new("/tmp/test-project");

        assert_eq!(
            paths.config_path(),
            PathBuf::from("/tmp/test-project/_bmad/_config/project-config.yaml")
        );
        assert_eq!(
            paths.template_path(),
            PathBuf::from("/tmp/test-project/_bmad/templates/CLAUDE.md.template")
        );
        assert_eq!(
            paths.claude_md_path(),
            PathBuf::from("/tmp/test-project/CLAUDE.md")
        );
    }

    #[test]
    fn test_output_dirs() {
        let paths = SetupPaths::new("/tmp/test-project");

        assert!(paths.planning_artifacts_dir().starts_with(paths.output_dir()));
        assert!(paths
            .implementation_artifacts_dir()
            .ends_with("_bmad-output/implementation-artifacts"));
    }
}
