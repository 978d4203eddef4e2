//! Trip planning over candidate routes.
//!
//! - [`TripPlanner`] — prices every route a [`RouteSource`](crate::source::RouteSource) offers
//! - [`RouteComparison`] — the quotes, with cheapest/fastest/shortest picks

mod comparison;
mod planner;

pub use comparison::{RouteComparison, RouteQuote};
pub use planner::TripPlanner;
