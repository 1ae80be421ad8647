use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casemap")]
#[command(about = "Legal case outcome and evidence strength analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a case file and predict the likely outcome
    Analyze {
        /// Path to the case file (JSON)
        path: PathBuf,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .casemap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable colors and emoji in terminal output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score a single evidence item from its ratings
    Score {
        /// Source credibility rating (1-5)
        #[arg(long)]
        reliability: f64,

        /// Bearing on the disputed issue (1-5)
        #[arg(long)]
        relevance: f64,

        /// Configuration file (defaults to .casemap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a default .casemap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Verbosity requested on the command line, when the command has one.
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze { verbosity, .. } => *verbosity,
            _ => 0,
        }
    }
}
