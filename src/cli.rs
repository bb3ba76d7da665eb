use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "groundwatch", version, about = "Groundwater trend and availability analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a station request file (JSON or YAML, `-` for JSON on stdin)
    Analyze {
        input: PathBuf,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// List recommendation rules in evaluation order
    Rules,
    /// Validate config and print the effective settings
    Check,
}
