use anyhow::Result;
use fare_estimator::compute_prices;
use fare_estimator::config::OutputFormat;
use tracing::info;

use super::quote::report;

/// Execute the prices command
///
/// Always prints JSON: `{"rapido": .., "ola": .., "porter": ..}`
pub fn execute(distance: f64) -> Result<()> {
    info!(distance_km = distance, "Computing raw fares");

    let prices = compute_prices(distance).map_err(|e| report(e, OutputFormat::Json))?;
    println!("{}", serde_json::to_string_pretty(&prices)?);

    Ok(())
}
