use anyhow::Result;
use casemap::cli::{Cli, Commands};
use casemap::commands;
use casemap::commands::analyze::AnalyzeConfig;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            plain,
            verbosity: _,
        } => commands::analyze::analyze_case(AnalyzeConfig {
            path,
            format,
            output,
            config,
            plain,
        }),
        Commands::Score {
            reliability,
            relevance,
            config,
        } => commands::score::score_item(reliability, relevance, config),
        Commands::Init { force } => commands::init::init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
