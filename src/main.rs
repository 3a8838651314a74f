// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version { header } => commands::cmd_version(&cli.recipe, header),
        Commands::Resolve {
            settings,
            options,
            format,
            out,
        } => commands::cmd_resolve(&cli.recipe, &settings, &options, format, out),
        Commands::Build {
            settings,
            options,
            command,
        } => commands::cmd_build(&cli.recipe, &settings, &options, command),
        Commands::PackageInfo { settings, format } => {
            commands::cmd_package_info(&cli.recipe, &settings, format)
        }
    }
}
