use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bmad_setup::commands;
use bmad_setup::paths::SetupPaths;

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "BMAD project setup - configure OpenProject and optional Archon RAG integration",
    long_about = None,
    after_help = "The project root is the current directory unless BMAD_PROJECT_ROOT is set.\nSet BMAD_LOG=debug for diagnostic output."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive project initialization
    Init,

    /// Regenerate CLAUDE.md from config
    GenerateClaudeMd,

    /// Validate current configuration
    Validate,

    /// Display current configuration
    ShowConfig,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(bmad_setup::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let paths = SetupPaths::from_env();
    tracing::debug!(root = %paths.root().display(), "resolved project root");

    match cli.command {
        Commands::Init => {
            commands::init::execute(&paths)?;
        }
        Commands::GenerateClaudeMd => {
            commands::generate::execute(&paths)?;
        }
        Commands::Validate => {
            let exit_code = commands::validate::execute(&paths)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::ShowConfig => {
            commands::show_config::execute(&paths)?;
        }
    }

    Ok(())
}
