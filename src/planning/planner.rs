//! Trip planner: fetches candidate routes and prices each of them.

use crate::evaluation::{ExpenseCalculator, ExpenseError};
use crate::models::{Location, Trip, Vehicle};
use crate::source::RouteSource;

use super::{RouteComparison, RouteQuote};

/// Combines a [`RouteSource`] with an [`ExpenseCalculator`].
///
/// # Examples
///
/// ```
/// use trip_cost::evaluation::ExpenseCalculator;
/// use trip_cost::planning::TripPlanner;
/// use trip_cost::source::{catalog, MockRouteSource};
///
/// let planner = TripPlanner::new(MockRouteSource::new(3), ExpenseCalculator::default());
/// let locations = catalog::popular_locations();
/// let car = catalog::find_vehicle("city-2023").unwrap();
///
/// let comparison = planner.quote_routes(&locations[0], &locations[4], &car, 2).unwrap();
/// assert_eq!(comparison.len(), 3);
///
/// let trip = planner.plan_trip(&locations[0], &locations[4], &car, 2, None).unwrap();
/// assert_eq!(trip.id, "del-1-pune-1");
/// assert_eq!(trip.selected_route.id(), "route-1");
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner<S> {
    source: S,
    calculator: ExpenseCalculator,
}

impl<S: RouteSource> TripPlanner<S> {
    /// Creates a planner.
    pub fn new(source: S, calculator: ExpenseCalculator) -> Self {
        Self { source, calculator }
    }

    /// The route source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The calculator.
    pub fn calculator(&self) -> &ExpenseCalculator {
        &self.calculator
    }

    /// Prices every candidate route between `origin` and `destination`.
    ///
    /// Quotes keep the source's order. The first invalid input aborts the
    /// whole comparison.
    pub fn quote_routes(
        &self,
        origin: &Location,
        destination: &Location,
        vehicle: &Vehicle,
        travelers: u32,
    ) -> Result<RouteComparison, ExpenseError> {
        let routes = self.source.candidate_routes(origin, destination);
        log::debug!(
            "quoting {} routes {} -> {} for {} travelers",
            routes.len(),
            origin.id(),
            destination.id(),
            travelers
        );

        routes
            .into_iter()
            .map(|route| -> Result<RouteQuote, ExpenseError> {
                let expenses = self.calculator.compute(vehicle, &route, travelers)?;
                Ok(RouteQuote { route, expenses })
            })
            .collect()
    }

    /// [`quote_routes`](Self::quote_routes) with the configured default
    /// party size.
    pub fn quote_routes_default_travelers(
        &self,
        origin: &Location,
        destination: &Location,
        vehicle: &Vehicle,
    ) -> Result<RouteComparison, ExpenseError> {
        let travelers = self.calculator.config().default_travelers;
        self.quote_routes(origin, destination, vehicle, travelers)
    }

    /// Plans a trip on the route with `route_id`, or on the first candidate
    /// when no ID is given.
    ///
    /// # Errors
    ///
    /// [`ExpenseError::NoRoutes`] if the source has no candidates,
    /// [`ExpenseError::UnknownRoute`] if `route_id` matches none of them, and
    /// any error from the calculator.
    pub fn plan_trip(
        &self,
        origin: &Location,
        destination: &Location,
        vehicle: &Vehicle,
        travelers: u32,
        route_id: Option<&str>,
    ) -> Result<Trip, ExpenseError> {
        let quotes = self
            .quote_routes(origin, destination, vehicle, travelers)?
            .into_quotes();

        let selected = match route_id {
            Some(id) => quotes
                .into_iter()
                .find(|q| q.route.id() == id)
                .ok_or_else(|| ExpenseError::UnknownRoute(id.to_string()))?,
            None => quotes.into_iter().next().ok_or_else(|| ExpenseError::NoRoutes {
                from: origin.id().to_string(),
                to: destination.id().to_string(),
            })?,
        };

        Ok(Trip::new(
            origin.clone(),
            destination.clone(),
            vehicle.clone(),
            travelers,
            selected.route,
            selected.expenses,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FuelType, Route};
    use crate::source::catalog::{find_vehicle, popular_locations};
    use crate::source::MockRouteSource;

    struct NoRoutes;

    impl RouteSource for NoRoutes {
        fn candidate_routes(&self, _origin: &Location, _destination: &Location) -> Vec<Route> {
            Vec::new()
        }
    }

    struct Fixed(Vec<Route>);

    impl RouteSource for Fixed {
        fn candidate_routes(&self, _origin: &Location, _destination: &Location) -> Vec<Route> {
            self.0.clone()
        }
    }

    fn mock_planner() -> TripPlanner<MockRouteSource> {
        TripPlanner::new(MockRouteSource::new(11), ExpenseCalculator::default())
    }

    #[test]
    fn test_quotes_match_direct_computation() {
        let planner = mock_planner();
        let locs = popular_locations();
        let car = find_vehicle("swift-2023").expect("in catalog");
        let cmp = planner
            .quote_routes(&locs[1], &locs[4], &car, 3)
            .expect("valid");
        let routes = planner.source().candidate_routes(&locs[1], &locs[4]);
        assert_eq!(cmp.len(), routes.len());
        for (quote, route) in cmp.quotes().iter().zip(&routes) {
            assert_eq!(&quote.route, route);
            let direct = planner.calculator().compute(&car, route, 3).expect("valid");
            assert_eq!(quote.expenses, direct);
        }
    }

    #[test]
    fn test_toll_free_route_has_no_toll_cost() {
        let planner = mock_planner();
        let locs = popular_locations();
        let car = find_vehicle("innova-2023").expect("in catalog");
        let cmp = planner.quote_routes(&locs[0], &locs[2], &car, 2).expect("valid");
        let economic = cmp.get("route-3").expect("generated");
        assert_eq!(economic.expenses.tolls.cost, 0.0);
        assert_eq!(economic.expenses.tolls.count, 0);
        let fastest = cmp.get("route-1").expect("generated");
        assert_eq!(fastest.expenses.tolls.cost, 175.0);
    }

    #[test]
    fn test_default_travelers() {
        let planner = mock_planner();
        let locs = popular_locations();
        let car = find_vehicle("city-2023").expect("in catalog");
        let a = planner.quote_routes_default_travelers(&locs[0], &locs[1], &car).expect("valid");
        let b = planner.quote_routes(&locs[0], &locs[1], &car, 2).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_trip_selects_by_id() {
        let planner = mock_planner();
        let locs = popular_locations();
        let car = find_vehicle("ertiga-2023").expect("in catalog");
        let trip = planner
            .plan_trip(&locs[0], &locs[1], &car, 4, Some("route-2"))
            .expect("valid");
        assert_eq!(trip.selected_route.id(), "route-2");
        assert_eq!(trip.travelers, 4);
        assert_eq!(trip.vehicle.id(), "ertiga-2023");
        assert!(trip.cost_per_person().is_some());
    }

    #[test]
    fn test_plan_trip_unknown_route() {
        let planner = mock_planner();
        let locs = popular_locations();
        let car = find_vehicle("city-2023").expect("in catalog");
        let err = planner
            .plan_trip(&locs[0], &locs[1], &car, 2, Some("route-9"))
            .unwrap_err();
        assert_eq!(err, ExpenseError::UnknownRoute("route-9".into()));
    }

    #[test]
    fn test_plan_trip_no_routes() {
        let planner = TripPlanner::new(NoRoutes, ExpenseCalculator::default());
        let locs = popular_locations();
        let car = find_vehicle("city-2023").expect("in catalog");
        let err = planner.plan_trip(&locs[0], &locs[1], &car, 2, None).unwrap_err();
        assert!(matches!(err, ExpenseError::NoRoutes { .. }));
    }

    #[test]
    fn test_invalid_vehicle_aborts_comparison() {
        let planner = mock_planner();
        let locs = popular_locations();
        let broken = Vehicle::new("X", "Y", 2020, 0.0, FuelType::Petrol);
        let err = planner.quote_routes(&locs[0], &locs[1], &broken, 2).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidVehicle { .. }));
    }

    #[test]
    fn test_cheapest_of_fixed_routes() {
        let routes = vec![
            Route::new("long", "Long", 400.0, 600),
            Route::new("short", "Short", 100.0, 120),
        ];
        let planner = TripPlanner::new(Fixed(routes), ExpenseCalculator::default());
        let locs = popular_locations();
        let car = find_vehicle("city-2023").expect("in catalog");
        let cmp = planner.quote_routes(&locs[0], &locs[1], &car, 2).expect("valid");
        assert_eq!(cmp.cheapest().map(|q| q.route.id()), Some("short"));
        assert_eq!(cmp.fastest().map(|q| q.route.id()), Some("short"));
    }
}
