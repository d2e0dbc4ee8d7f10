// appvox/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appvox")]
#[command(about = "Bank app-store review collection & normalization pipeline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the full pipeline (Fetch -> Clean -> Validate -> Export)
    Collect {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🧹 Re-cleans an existing raw export (no fetching)
    Normalize {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Raw export to clean (default: the configured raw export)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the clean export (default: the configured path)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// 🧠 Scores a clean export through the sentiment classifier
    Score {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Clean export to score (default: the configured clean export)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the scored export (default: the configured path)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// 🔍 Inspects a CSV export (columns + sample rows)
    Inspect {
        /// Path to the CSV file
        #[arg(long, short)]
        file: PathBuf,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}
