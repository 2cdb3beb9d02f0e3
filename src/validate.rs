//! Configuration validation
//!
//! Issues fail validation; warnings are reported but do not.

use colored::Colorize;
use std::fmt;

use crate::project::ConfigDocument;
use crate::RULE;

/// Result of checking a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when there are no issues. Warnings alone do not fail validation.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check required fields and configured defaults.
pub fn check(document: &ConfigDocument) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !document.is_set(&["project", "name"]) {
        report.issues.push("project.name is not set".to_string());
    }

    // OpenProject integration is on unless explicitly disabled
    let openproject_enabled = document
        .lookup(&["openproject", "enabled"])
        .map_or(true, crate::project::is_truthy);

    if openproject_enabled {
        if !document.is_set(&["openproject", "project_id"]) {
            report
                .issues
                .push("openproject.project_id is not set".to_string());
        }
        if !document.is_set(&["openproject", "types", "epic"]) {
            report
                .warnings
                .push("openproject.types.epic not configured (using default)".to_string());
        }
    }

    // Archon RAG works without a project_id, so there is nothing to check there.

    tracing::debug!(
        issues = report.issues.len(),
        warnings = report.warnings.len(),
        "validated project config"
    );
    report
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{RULE}")?;
        writeln!(f, "{}", "BMAD Configuration Validation".bold())?;
        writeln!(f, "{RULE}")?;

        if !self.issues.is_empty() {
            writeln!(f, "\n❌ {}", "Issues found:".red())?;
            for issue in &self.issues {
                writeln!(f, "   - {issue}")?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "\n⚠️  {}", "Warnings:".yellow())?;
            for warning in &self.warnings {
                writeln!(f, "   - {warning}")?;
            }
        }

        if self.issues.is_empty() && self.warnings.is_empty() {
            writeln!(f, "\n✅ {}", "Configuration is valid!".green())?;
        }

        write!(f, "\n{RULE}")
    }
}
