use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table on stdout
    Terminal,
    /// Pretty-printed JSON array of cards
    Json,
    /// Markdown table
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "metricard")]
#[command(about = "Personal metrics summarizer: logged observations in, display-ready cards out", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the full card feed from a storage snapshot
    Feed {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Resolve display periods against this date instead of today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// Disable colors and decorations
        #[arg(long)]
        plain: bool,
    },

    /// Compute the card for a single metric
    Card {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Name of the metric to summarize (case-insensitive)
        name: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Resolve display periods against this date instead of today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// Disable colors and decorations
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
