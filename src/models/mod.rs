//! Domain model types for trip cost estimation.
//!
//! Provides the plain data the calculator reads: locations, vehicles with
//! their fuel type, candidate routes with toll plazas and fuel stops, and the
//! cost breakdown it produces.

mod expenses;
mod location;
mod route;
mod trip;
mod vehicle;

pub use expenses::{FoodExpense, FuelExpense, TollExpense, TripExpenses};
pub use location::{Coordinates, Location};
pub use route::{Difficulty, FuelStop, Route, Toll};
pub use trip::Trip;
pub use vehicle::{FuelType, Vehicle};
