use clap::{Parser, Subcommand};
use fare_estimator::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fare", version, about = "Fare estimates for Rapido, Ola and Porter")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "fare.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show fares for every service
    Quote {
        /// Trip distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,

        /// Output format (defaults to display.format from the config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show services ordered by fare, cheapest first
    Rank {
        /// Trip distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,

        /// Output format (defaults to display.format from the config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the name of the cheapest service
    Cheapest {
        /// Trip distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,
    },

    /// Print the raw fares as JSON
    Prices {
        /// Trip distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_quote() {
        let cli = Cli::try_parse_from(["fare", "quote", "12.5"]).unwrap();

        match cli.command {
            Commands::Quote { distance, format } => {
                assert_eq!(distance, 12.5);
                assert!(format.is_none());
            }
            _ => panic!("Expected Quote command"),
        }
        assert_eq!(cli.config, PathBuf::from("fare.toml"));
    }

    #[test]
    fn test_cli_parsing_quote_with_format() {
        let cli = Cli::try_parse_from(["fare", "quote", "3", "--format", "json"]).unwrap();

        match cli.command {
            Commands::Quote { format, .. } => assert_eq!(format, Some(OutputFormat::Json)),
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_distance() {
        let cli = Cli::try_parse_from(["fare", "cheapest", "-5"]).unwrap();

        match cli.command {
            Commands::Cheapest { distance } => assert_eq!(distance, -5.0),
            _ => panic!("Expected Cheapest command"),
        }
    }

    #[test]
    fn test_cli_rejects_non_numeric_distance() {
        assert!(Cli::try_parse_from(["fare", "prices", "ten"]).is_err());
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let cli = Cli::try_parse_from(["fare", "--config", "other.toml", "config", "show"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(
            cli.command,
            Commands::Config { action: ConfigCommands::Show }
        ));
    }
}
