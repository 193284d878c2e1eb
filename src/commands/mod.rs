//! Command implementations for the CLI
//!
//! - quote: All fares in fixed service order
//! - rank: Fares ordered cheapest first
//! - cheapest: Name of the cheapest service
//! - prices: Raw fares as JSON
//! - config: Configuration display and validation

pub mod cheapest;
pub mod config;
pub mod output;
pub mod prices;
pub mod quote;
