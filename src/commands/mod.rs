pub mod generate;
pub mod init;
pub mod show_config;
pub mod validate;

use std::io::{self, Write};
use std::path::Path;

pub(crate) use crate::RULE;

/// Standard "configuration unavailable" message with the remediation hint
pub(crate) fn report_missing_config(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "❌ Configuration file not found: {}", path.display())?;
    writeln!(out, "   Run 'bmad-setup init' to create it.")
}
