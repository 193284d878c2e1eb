pub mod calculator;
pub mod models;
pub mod service;
pub mod tariff;

pub use calculator::{compute_prices, prices_for};
pub use models::{Distance, PriceResult, Service, ServiceDetail, MAX_DISTANCE_KM};
pub use service::{estimated_time, get_cheapest_service, get_service_details, rank_services};
pub use tariff::Tariff;
