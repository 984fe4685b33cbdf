// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => commands::cmd_convert(&args),
        Some(Commands::Check(args)) => commands::cmd_check(&args),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => commands::cmd_convert(&cli.convert),
    }
}
