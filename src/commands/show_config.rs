//! `show-config` - print the current project config

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

use super::{report_missing_config, RULE};
use crate::paths::SetupPaths;
use crate::project::{self, ConfigError};

pub fn execute(paths: &SetupPaths) -> Result<()> {
    run(paths, &mut io::stdout())?;
    Ok(())
}

/// Print the document as block YAML in its saved order.
pub fn run(paths: &SetupPaths, out: &mut impl Write) -> Result<bool> {
    let document = match project::load(paths) {
        Ok(document) => document,
        Err(ConfigError::NotFound { path }) => {
            report_missing_config(out, &path)?;
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let yaml = document
        .to_yaml()
        .context("Failed to serialize project config")?;

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{}", "Current BMAD Configuration".bold())?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{yaml}")?;
    writeln!(out, "{RULE}")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_config_keeps_order() {
        let tmp = TempDir::new().unwrap();
        let paths = SetupPaths::new(tmp.path());
        fs::create_dir_all(paths.config_path().parent().unwrap()).unwrap();
        fs::write(
            paths.config_path(),
            "workflows:\n  story_max_hours: 4\nproject:\n  name: demo\n",
        )
        .unwrap();

        let mut out = Vec::new();
        assert!(run(&paths, &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Current BMAD Configuration"));
        assert!(text.contains("story_max_hours: 4"));
        assert!(text.find("workflows").unwrap() < text.find("project").unwrap());
    }

    #[test]
    fn test_show_config_without_config() {
        let tmp = TempDir::new().unwrap();
        let mut out = Vec::new();
        assert!(!run(&SetupPaths::new(tmp.path()), &mut out).unwrap());
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Configuration file not found"));
    }
}
