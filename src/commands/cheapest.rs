use anyhow::Result;
use colored::Colorize;
use fare_estimator::get_cheapest_service;
use tracing::info;

/// Execute the cheapest command
pub fn execute(distance: f64) -> Result<()> {
    info!(distance_km = distance, "Looking up cheapest service");

    let name = get_cheapest_service(distance)?;
    println!("{}", name.green().bold());

    Ok(())
}
