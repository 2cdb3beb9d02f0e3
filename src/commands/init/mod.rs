//! Interactive BMAD project initialization
//!
//! Walks the operator through a fixed sequence of prompts, writes
//! `_bmad/_config/project-config.yaml`, creates the `_bmad-output/` tree and
//! renders `CLAUDE.md`.
//!
//! # Example
//!
//! ```no_run
//! use bmad_setup::commands::init;
//! use bmad_setup::paths::SetupPaths;
//!
//! init::execute(&SetupPaths::from_env()).expect("Failed to initialize project");
//! ```

mod internal;
pub mod prompt;

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::paths::SetupPaths;
use self::prompt::Prompter;

/// How an init run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Config written, directories created, CLAUDE.md rendered
    Completed,
    /// Operator declined to overwrite an existing config; nothing changed
    Aborted,
}

/// Execute the init command on the console
///
/// # Process
///
/// 1. **Overwrite guard**: an existing config is only replaced after an explicit `y`
/// 2. **Prompts**: project, team, OpenProject id, Archon RAG, in that order
/// 3. **Defaults**: paths, OpenProject ids, testing and workflow settings are fixed
/// 4. **Persist**: saves the config and creates `_bmad-output/` directories
/// 5. **Render**: regenerates `CLAUDE.md` from the template
pub fn execute(paths: &SetupPaths) -> Result<()> {
    let mut prompter = Prompter::stdio();
    internal::execute_init(paths, &mut prompter)?;
    Ok(())
}

/// Run init against any prompter (scripted input in tests)
pub fn run<R: BufRead, W: Write>(
    paths: &SetupPaths,
    prompter: &mut Prompter<R, W>,
) -> Result<InitOutcome> {
    internal::execute_init(paths, prompter)
}
