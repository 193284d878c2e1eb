use crate::pricing::models::{Distance, Service};

/// Fixed fare formula for one service
///
/// `fare = base + per_km * km + surge`, where the surge is
/// `surge_per_km * km` once the trip is strictly longer than
/// `surge_threshold_km`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    pub base: f64,
    pub per_km: f64,
    pub surge_threshold_km: f64,
    pub surge_per_km: f64,
}

pub const RAPIDO: Tariff = Tariff {
    base: 20.0,
    per_km: 5.0,
    surge_threshold_km: 10.0,
    surge_per_km: 0.5,
};

pub const OLA: Tariff = Tariff {
    base: 25.0,
    per_km: 4.5,
    surge_threshold_km: 15.0,
    surge_per_km: 0.3,
};

pub const PORTER: Tariff = Tariff {
    base: 15.0,
    per_km: 6.0,
    surge_threshold_km: 5.0,
    surge_per_km: 0.8,
};

impl Tariff {
    pub fn for_service(service: Service) -> &'static Tariff {
        match service {
            Service::Rapido => &RAPIDO,
            Service::Ola => &OLA,
            Service::Porter => &PORTER,
        }
    }

    /// Long-distance surcharge; zero at or below the threshold
    pub fn surge(&self, km: f64) -> f64 {
        if km > self.surge_threshold_km {
            km * self.surge_per_km
        } else {
            0.0
        }
    }

    /// Unrounded fare
    pub fn raw_fare(&self, km: f64) -> f64 {
        self.base + self.per_km * km + self.surge(km)
    }

    /// Fare rounded half-up to whole rupees
    ///
    /// Every term is positive for a valid distance, so `f64::round`
    /// (half away from zero) rounds half-up here.
    pub fn fare(&self, distance: Distance) -> u32 {
        self.raw_fare(distance.km()).round() as u32
    }
}
