//! Route sources: where candidate routes between two locations come from.
//!
//! - [`RouteSource`] — the contract a routing service fulfils
//! - [`MockRouteSource`] — deterministic canned routes
//! - [`catalog`] — static vehicles, locations, tolls and fuel stops

pub mod catalog;
mod mock;

pub use mock::MockRouteSource;

use crate::models::{Location, Route};

/// Supplies candidate routes between two locations.
///
/// Implementations return routes in preference order; callers treat the
/// first as the default selection.
///
/// # Examples
///
/// ```
/// use trip_cost::models::{Location, Route};
/// use trip_cost::source::RouteSource;
///
/// struct Direct;
///
/// impl RouteSource for Direct {
///     fn candidate_routes(&self, _origin: &Location, _destination: &Location) -> Vec<Route> {
///         vec![Route::new("direct", "Direct", 42.0, 45)]
///     }
/// }
/// ```
pub trait RouteSource: Send + Sync {
    /// Candidate routes from `origin` to `destination`, possibly empty.
    fn candidate_routes(&self, origin: &Location, destination: &Location) -> Vec<Route>;
}
