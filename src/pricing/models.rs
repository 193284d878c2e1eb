use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PricingError;

/// Longest trip any of the services will quote, in kilometers
pub const MAX_DISTANCE_KM: f64 = 100.0;

/// A validated trip distance in kilometers (`0 < km <= 100`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(f64);

impl Distance {
    /// Validate a raw distance
    ///
    /// NaN, zero and negative values are rejected as invalid input; anything
    /// above [`MAX_DISTANCE_KM`] (including infinity) is too large.
    pub fn new(km: f64) -> Result<Self, PricingError> {
        if km.is_nan() || km <= 0.0 {
            return Err(PricingError::InvalidInput);
        }
        if km > MAX_DISTANCE_KM {
            return Err(PricingError::DistanceTooLarge);
        }
        Ok(Self(km))
    }

    pub fn km(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Distance {
    type Error = PricingError;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        Self::new(km)
    }
}

/// The services we quote, in display and tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Rapido,
    Ola,
    Porter,
}

impl Service {
    /// All services in priority order
    pub const ALL: [Service; 3] = [Service::Rapido, Service::Ola, Service::Porter];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rapido => "Rapido",
            Self::Ola => "Ola",
            Self::Porter => "Porter",
        }
    }

    /// Short feature labels shown next to the fare
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Self::Rapido => &["Bike Taxi", "Quick Rides", "Affordable"],
            Self::Ola => &["Car Rides", "AC Available", "Safe & Reliable"],
            Self::Porter => &["Goods Delivery", "Truck/Tempo", "Heavy Items"],
        }
    }

    /// Minutes per kilometer used for the travel time estimate
    pub fn minutes_per_km(&self) -> f64 {
        match self {
            Self::Rapido => 2.5,
            Self::Ola => 3.0,
            Self::Porter => 4.0,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rounded fare per service, in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResult {
    pub rapido: u32,
    pub ola: u32,
    pub porter: u32,
}

impl PriceResult {
    pub fn price_of(&self, service: Service) -> u32 {
        match service {
            Service::Rapido => self.rapido,
            Service::Ola => self.ola,
            Service::Porter => self.porter,
        }
    }

    /// (service, price) pairs in priority order
    pub fn iter(&self) -> impl Iterator<Item = (Service, u32)> + '_ {
        Service::ALL.into_iter().map(move |s| (s, self.price_of(s)))
    }

    /// Lowest fare; ties go to the service listed first in [`Service::ALL`]
    pub fn cheapest(&self) -> Service {
        let min_price = self.rapido.min(self.ola).min(self.porter);
        self.iter()
            .find(|(_, price)| *price == min_price)
            .map(|(service, _)| service)
            .unwrap_or(Service::Porter)
    }
}

/// Everything the quote screen shows for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub name: String,
    pub price: u32,
    pub features: Vec<String>,
    pub estimated_time: String,
}
