use crate::error::PricingError;
use crate::pricing::calculator::prices_for;
use crate::pricing::models::{Distance, PriceResult, Service, ServiceDetail};

/// Unit appended to travel time estimates
pub const MINUTES_LABEL: &str = "मिनट";

/// Fare, features and travel time for each service, in [`Service::ALL`] order
///
/// Errors are the same ones [`compute_prices`](super::compute_prices) returns.
pub fn get_service_details(distance: f64) -> Result<[ServiceDetail; 3], PricingError> {
    let distance = Distance::new(distance)?;
    let prices = prices_for(distance);
    Ok(details_from(distance, &prices))
}

/// Name of the service with the lowest fare
///
/// Ties go to Rapido, then Ola, then Porter.
pub fn get_cheapest_service(distance: f64) -> Result<&'static str, PricingError> {
    let distance = Distance::new(distance)?;
    Ok(prices_for(distance).cheapest().name())
}

/// Service details sorted by fare, cheapest first
///
/// Equal fares keep their [`Service::ALL`] order, so the first entry is
/// always the service [`get_cheapest_service`] names.
pub fn rank_services(distance: f64) -> Result<[ServiceDetail; 3], PricingError> {
    let mut details = get_service_details(distance)?;
    details.sort_by_key(|detail| detail.price);
    Ok(details)
}

/// Rough travel time, e.g. `"25 मिनट"`
pub fn estimated_time(service: Service, distance: Distance) -> String {
    let minutes = (distance.km() * service.minutes_per_km()).round() as u32;
    format!("{} {}", minutes, MINUTES_LABEL)
}

fn details_from(distance: Distance, prices: &PriceResult) -> [ServiceDetail; 3] {
    Service::ALL.map(|service| ServiceDetail {
        name: service.name().to_string(),
        price: prices.price_of(service),
        features: service.features().iter().map(|f| f.to_string()).collect(),
        estimated_time: estimated_time(service, distance),
    })
}
