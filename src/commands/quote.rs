use anyhow::Result;
use fare_estimator::config::{DisplayConfig, OutputFormat};
use fare_estimator::{get_service_details, rank_services, PricingError};
use tracing::info;

use super::output::{cheapest_name, render_details};

/// Execute the quote command
///
/// Prints every service in fixed order with the cheapest one marked
pub fn execute(distance: f64, format: OutputFormat, display: &DisplayConfig) -> Result<()> {
    info!(distance_km = distance, "Quoting fares");

    let details = get_service_details(distance).map_err(|e| report(e, format))?;

    println!(
        "{}",
        render_details(distance, &details, cheapest_name(&details), display, format)?
    );
    Ok(())
}

/// Execute the rank command
///
/// Same rows as `quote`, ordered by fare
pub fn execute_ranked(distance: f64, format: OutputFormat, display: &DisplayConfig) -> Result<()> {
    info!(distance_km = distance, "Ranking services by fare");

    let ranked = rank_services(distance).map_err(|e| report(e, format))?;

    println!(
        "{}",
        render_details(distance, &ranked, cheapest_name(&ranked), display, format)?
    );
    Ok(())
}

/// Print machine-readable errors on stdout in JSON mode, then hand the error
/// back so the process exits non-zero
pub(crate) fn report(error: PricingError, format: OutputFormat) -> anyhow::Error {
    if let Some(body) = error_body(&error, format) {
        println!("{}", body);
    }
    error.into()
}

/// JSON error body printed for `format`, if that format is machine-readable
fn error_body(error: &PricingError, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => Some(error.to_json().to_string()),
        OutputFormat::Table | OutputFormat::Plain => None,
    }
}
