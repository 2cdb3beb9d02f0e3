//! `generate-claude-md` - regenerate CLAUDE.md from the project config

use anyhow::Result;
use std::io::{self, Write};

use super::report_missing_config;
use crate::paths::SetupPaths;
use crate::project::ConfigError;
use crate::render::{self, RenderError};

/// Regenerate `CLAUDE.md`, printing to stdout
pub fn execute(paths: &SetupPaths) -> Result<()> {
    run(paths, &mut io::stdout())?;
    Ok(())
}

/// Regenerate `CLAUDE.md`, reporting to `out`.
///
/// Returns `Ok(false)` when the config or template is missing; those are
/// reported, not raised. A malformed config is an error.
pub fn run(paths: &SetupPaths, out: &mut impl Write) -> Result<bool> {
    match render::generate(paths) {
        Ok(path) => {
            writeln!(out, "✅ Generated {}", path.display())?;
            Ok(true)
        }
        Err(RenderError::Config(ConfigError::NotFound { path })) => {
            report_missing_config(out, &path)?;
            Ok(false)
        }
        Err(RenderError::TemplateNotFound { path }) => {
            writeln!(out, "❌ Template file not found: {}", path.display())?;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
