//! `validate` - check the project config for required fields

use anyhow::Result;
use std::io::{self, Write};

use super::report_missing_config;
use crate::paths::SetupPaths;
use crate::project::{self, ConfigError};
use crate::validate;

/// Validate and return the process exit code (0 valid, 1 otherwise)
pub fn execute(paths: &SetupPaths) -> Result<i32> {
    let valid = run(paths, &mut io::stdout())?;
    Ok(if valid { 0 } else { 1 })
}

/// Validate, reporting to `out`. A missing config counts as invalid.
pub fn run(paths: &SetupPaths, out: &mut impl Write) -> Result<bool> {
    let document = match project::load(paths) {
        Ok(document) => document,
        Err(ConfigError::NotFound { path }) => {
            report_missing_config(out, &path)?;
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let report = validate::check(&document);
    writeln!(out, "{report}")?;
    Ok(report.is_valid())
}
