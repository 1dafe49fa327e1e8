mod commands;
mod reporter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::CheckCommand;
use tracing_subscriber::EnvFilter;

/// Preflight CLI - backend scaffolding smoke-check tool
#[derive(Debug, Parser)]
#[command(
    name = "preflight",
    version,
    about = "Backend scaffolding smoke-check tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the scaffolding checklist against a project root
    Check(CheckCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
