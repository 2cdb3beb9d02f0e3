//! Internal implementation for init command

mod answers;

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{BufRead, Write};

use crate::commands::{generate, RULE};
use crate::paths::SetupPaths;
use crate::project::{
    self, ArchonSection, OpenProjectSection, ProjectConfig, ProjectSection, TeamSection,
};

use self::answers::{optional, ProjectIdAnswer};
use super::prompt::Prompter;
use super::InitOutcome;

/// Main execution logic for init command
pub fn execute_init<R: BufRead, W: Write>(
    paths: &SetupPaths,
    prompter: &mut Prompter<R, W>,
) -> Result<InitOutcome> {
    prompter.say(format!("\n{RULE}"))?;
    prompter.say("BMAD Project Initialization".bold())?;
    prompter.say(RULE)?;
    prompter.say("\nThis wizard will help you set up your BMAD project.\n")?;

    // === STEP 0: OVERWRITE GUARD (BEFORE ANY PROMPTS OR WRITES) ===
    if project::is_configured(paths) {
        prompter.say(format!(
            "⚠️  Existing configuration found at {}",
            paths.config_path().display()
        ))?;
        if !prompter.confirm("Overwrite? (y/N): ")? {
            prompter.say("Aborted.")?;
            return Ok(InitOutcome::Aborted);
        }
    }

    // === STEP 1: COLLECT ANSWERS ===
    let config = ProjectConfig {
        project: prompt_project(prompter)?,
        team: prompt_team(prompter)?,
        openproject: prompt_openproject(prompter)?,
        archon: prompt_archon(prompter)?,
        ..Default::default()
    };

    // === STEP 2: PERSIST ===
    let document = config.into_document()?;
    let config_path = project::save(paths, &document)?;
    prompter.say(format!("✅ Configuration saved to {}", config_path.display()))?;

    create_output_dirs(paths)?;
    prompter.say("✅ Created output directories")?;

    // === STEP 3: GENERATE CLAUDE.md ===
    prompter.say("\nGenerating CLAUDE.md...")?;
    generate::run(paths, prompter.output())?;

    print_summary(paths, prompter)?;
    Ok(InitOutcome::Completed)
}

fn prompt_project<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<ProjectSection> {
    prompter.say("\n--- Project Information ---")?;
    Ok(ProjectSection {
        name: prompter.ask("Project name (kebab-case): ")?,
        display_name: prompter.ask("Display name: ")?,
        description: prompter.ask("Description: ")?,
        github_repo: prompter.ask("GitHub repo URL (optional): ")?,
    })
}

/// Only the user name is asked; skill level and languages are fixed.
fn prompt_team<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<TeamSection> {
    prompter.say("\n--- Team Information ---")?;
    let user_name = prompter.ask("Your name/alias: ")?;
    Ok(TeamSection::for_user(user_name))
}

fn prompt_openproject<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<OpenProjectSection> {
    prompter.say("\n--- OpenProject Configuration ---")?;
    prompter.say("You'll need to get these values from OpenProject.")?;
    prompter.say("Run these MCP commands to find them:")?;
    prompter.say("  - mcp_openproject_list_projects()")?;
    prompter.say("  - mcp_openproject_list_types(project_id=X)")?;
    prompter.say("  - mcp_openproject_list_statuses()")?;
    prompter.say("")?;

    let answer = ProjectIdAnswer::parse(&prompter.ask("OpenProject project_id (or 'skip'): ")?);
    match answer {
        ProjectIdAnswer::Skip => {
            prompter.say("⚠️  OpenProject not configured. Update project-config.yaml later.")?;
        }
        ProjectIdAnswer::Unrecognized => {
            tracing::warn!("OpenProject project_id is not numeric; storing null");
        }
        ProjectIdAnswer::Id(_) => {}
    }

    // Types, statuses, priorities and workflow stages come from the defaults tables
    Ok(OpenProjectSection {
        project_id: answer.id(),
        ..Default::default()
    })
}

fn prompt_archon<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<ArchonSection> {
    prompter.say("\n--- Archon RAG Configuration ---")?;
    prompter.say("Archon RAG provides knowledge base search capabilities.")?;
    prompter.say(
        "You can use RAG without a project_id (project_id is only for project management).",
    )?;
    prompter.say("")?;

    let mut archon = ArchonSection::default();

    if prompter.confirm("Enable Archon RAG? (y/N): ")? {
        archon.enabled = true;
        prompter.say(
            "\nArchon Project ID (optional - only needed for project management, not RAG):",
        )?;
        let answer = prompter.ask("  Enter project UUID or press Enter to skip: ")?;
        archon.project_id = optional(answer);
        if archon.project_id.is_none() {
            prompter.say("  ✅ Archon RAG enabled without project management")?;
        }
    } else {
        prompter.say("  ⚠️  Archon RAG disabled")?;
    }

    Ok(archon)
}

/// Create `_bmad-output/` and its artifact directories (idempotent)
fn create_output_dirs(paths: &SetupPaths) -> Result<()> {
    for dir in [
        paths.output_dir(),
        paths.planning_artifacts_dir(),
        paths.implementation_artifacts_dir(),
    ] {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

fn print_summary<R: BufRead, W: Write>(
    paths: &SetupPaths,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let config = paths.config_path();
    let output = paths.output_dir();

    prompter.say(format!("\n{RULE}"))?;
    prompter.say("Setup Complete!".green().bold())?;
    prompter.say(RULE)?;
    prompter.say(format!(
        "
Files created/updated:
  ✅ {config}
  ✅ {claude_md}
  ✅ {output}/planning-artifacts/
  ✅ {output}/implementation-artifacts/

Next steps:
  1. Review {config}
  2. Update type/status/priority IDs if needed
  3. Start with @bmad/bmm/agents/pm for product brief
",
        config = config.display(),
        claude_md = paths.claude_md_path().display(),
        output = output.display(),
    ))
}
