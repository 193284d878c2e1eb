use crate::error::PricingError;
use crate::pricing::models::{Distance, PriceResult, Service};
use crate::pricing::tariff::Tariff;
use tracing::debug;

/// Calculate the fare for every service for a trip of `distance` km
///
/// Returns [`PricingError::InvalidInput`] for NaN or non-positive distances
/// and [`PricingError::DistanceTooLarge`] beyond 100 km.
pub fn compute_prices(distance: f64) -> Result<PriceResult, PricingError> {
    let distance = Distance::new(distance)?;
    Ok(prices_for(distance))
}

/// Fares for an already validated distance
pub fn prices_for(distance: Distance) -> PriceResult {
    let fare = |service| Tariff::for_service(service).fare(distance);

    let prices = PriceResult {
        rapido: fare(Service::Rapido),
        ola: fare(Service::Ola),
        porter: fare(Service::Porter),
    };

    debug!(
        distance_km = distance.km(),
        rapido = prices.rapido,
        ola = prices.ola,
        porter = prices.porter,
        "Computed fares"
    );

    prices
}
