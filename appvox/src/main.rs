// appvox/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug appvox collect ... for the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect { project_dir } => commands::collect::execute(project_dir).await?,
        Commands::Normalize {
            project_dir,
            input,
            output,
        } => commands::normalize::execute(project_dir, input, output)?,
        Commands::Score {
            project_dir,
            input,
            output,
        } => commands::score::execute(project_dir, input, output).await?,
        Commands::Inspect { file, limit } => commands::inspect::execute(file, limit)?,
    }

    Ok(())
}
