//! Rendering of quotes for the terminal

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use fare_estimator::config::{DisplayConfig, OutputFormat};
use fare_estimator::ServiceDetail;

/// Render service details in the requested format
///
/// `cheapest` is the name returned by `get_cheapest_service`; its row is
/// marked in table and plain output.
pub fn render_details(
    distance: f64,
    details: &[ServiceDetail],
    cheapest: &str,
    display: &DisplayConfig,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(details, cheapest, display)),
        OutputFormat::Plain => Ok(render_plain(details, cheapest, display)),
        OutputFormat::Json => {
            let body = serde_json::json!({
                "distanceKm": distance,
                "cheapest": cheapest,
                "services": details,
            });
            Ok(serde_json::to_string_pretty(&body)?)
        }
    }
}

fn render_table(details: &[ServiceDetail], cheapest: &str, display: &DisplayConfig) -> String {
    let header_cell = |text: &str| {
        let cell = Cell::new(text);
        if display.color {
            cell.fg(Color::Cyan)
        } else {
            cell
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        header_cell("SERVICE"),
        header_cell("FARE"),
        header_cell("ETA"),
        header_cell("FEATURES"),
        header_cell(""),
    ]);

    for detail in details {
        let is_cheapest = detail.name == cheapest;
        let mut fare = Cell::new(format_fare(detail.price, display));
        if is_cheapest && display.color {
            fare = fare.fg(Color::Green);
        }

        table.add_row(vec![
            Cell::new(&detail.name),
            fare,
            Cell::new(&detail.estimated_time),
            Cell::new(detail.features.join(", ")),
            Cell::new(if is_cheapest { "cheapest" } else { "" }),
        ]);
    }

    table.to_string()
}

fn render_plain(details: &[ServiceDetail], cheapest: &str, display: &DisplayConfig) -> String {
    details
        .iter()
        .map(|detail| {
            let marker = if detail.name == cheapest { " *" } else { "" };
            format!(
                "{}\t{}\t{}\t{}{}",
                detail.name,
                format_fare(detail.price, display),
                detail.estimated_time,
                detail.features.join(", "),
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Name of the lowest-priced row; the first one wins a tie
pub fn cheapest_name(details: &[ServiceDetail]) -> &str {
    details
        .iter()
        .min_by_key(|detail| detail.price)
        .map(|detail| detail.name.as_str())
        .unwrap_or_default()
}

pub fn format_fare(price: u32, display: &DisplayConfig) -> String {
    format!("{}{}", display.currency_symbol, price)
}
