//! Fuel pricing and cost configuration.
//!
//! - [`FuelPriceTable`] — fallback unit price per fuel type
//! - [`ElectricStopPricing`] — how electric vehicles are priced at fuel stops
//! - [`CostConfig`] — prices plus meal policy, loadable from JSON

mod config;
mod table;

pub use config::{ConfigError, CostConfig};
pub use table::{ElectricStopPricing, FuelPriceTable, PriceSource};
