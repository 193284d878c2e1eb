use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod commands;

use fare_estimator::{config, init_tracing};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let cfg = config::load_config(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;

    init_tracing(&cfg.logging);

    if !cfg.display.color {
        colored::control::set_override(false);
    }

    match args.command {
        cli::Commands::Quote { distance, format } => {
            commands::quote::execute(distance, format.unwrap_or(cfg.display.format), &cfg.display)?;
        }
        cli::Commands::Rank { distance, format } => {
            commands::quote::execute_ranked(
                distance,
                format.unwrap_or(cfg.display.format),
                &cfg.display,
            )?;
        }
        cli::Commands::Cheapest { distance } => {
            commands::cheapest::execute(distance)?;
        }
        cli::Commands::Prices { distance } => {
            commands::prices::execute(distance)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {
            println!("Fare Estimator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
