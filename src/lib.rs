//! # trip-cost
//!
//! Road trip cost estimation: given a vehicle, a candidate route and the
//! number of travelers, compute what the trip will cost in fuel, tolls and
//! food.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Vehicle, Route, Toll, FuelStop, TripExpenses, Trip)
//! - [`pricing`] — Fallback fuel prices and cost configuration
//! - [`evaluation`] — The expense calculator
//! - [`source`] — Route sources and the static catalog
//! - [`planning`] — Quoting and comparing candidate routes
//! - [`format`] — Duration, distance and difficulty formatting
//!
//! ## Example
//!
//! ```
//! use trip_cost::evaluation::compute_trip_expenses;
//! use trip_cost::models::{FuelType, Route, Vehicle};
//!
//! let car = Vehicle::new("Hyundai", "Verna", 2023, 18.45, FuelType::Petrol);
//! let route = Route::new("r1", "Expressway", 150.0, 180);
//! let expenses = compute_trip_expenses(&car, &route, 2).unwrap();
//! assert_eq!(expenses.food.meals, 0);
//! assert_eq!(expenses.total, expenses.fuel.cost);
//! ```

pub mod evaluation;
pub mod format;
pub mod models;
pub mod planning;
pub mod pricing;
pub mod source;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;
