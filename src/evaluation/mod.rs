//! Trip expense evaluation.
//!
//! - [`ExpenseCalculator`] — fuel, toll and food cost of one route
//! - [`compute_trip_expenses`] — the calculator with default configuration
//! - [`meals_for_duration`] — meal count from trip length

mod calculator;
mod error;

pub use calculator::{compute_trip_expenses, meals_for_duration, ExpenseCalculator};
pub use error::ExpenseError;
