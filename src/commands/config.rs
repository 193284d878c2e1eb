use anyhow::Result;
use colored::Colorize;
use fare_estimator::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (file, environment and defaults merged)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already ran validation; this reports the outcome.
pub fn validate(cfg: &Config) -> Result<()> {
    info!("Configuration validation successful");

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    for line in summary_lines(cfg) {
        println!("  {}", line);
    }

    Ok(())
}

fn summary_lines(cfg: &Config) -> Vec<String> {
    vec![
        format!("Output Format: {}", cfg.display.format),
        format!("Currency: {}", cfg.display.currency_symbol),
        format!("Color: {}", if cfg.display.color { "on" } else { "off" }),
        format!("Log Level: {}", cfg.logging.level),
    ]
}
