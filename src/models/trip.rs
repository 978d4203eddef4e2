//! A planned trip: endpoints, vehicle, party size and the chosen route.

use serde::{Deserialize, Serialize};

use super::{Location, Route, TripExpenses, Vehicle};

/// A trip with its selected route and computed expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Derived from the endpoint IDs as `"<from>-<to>"`.
    pub id: String,
    pub from: Location,
    pub to: Location,
    #[serde(rename = "car")]
    pub vehicle: Vehicle,
    pub travelers: u32,
    pub selected_route: Route,
    pub expenses: TripExpenses,
}

impl Trip {
    /// Builds a trip, deriving its ID from the endpoints.
    pub fn new(
        from: Location,
        to: Location,
        vehicle: Vehicle,
        travelers: u32,
        selected_route: Route,
        expenses: TripExpenses,
    ) -> Self {
        let id = format!("{}-{}", from.id(), to.id());
        Self {
            id,
            from,
            to,
            vehicle,
            travelers,
            selected_route,
            expenses,
        }
    }

    /// Total cost per traveler, rounded to a whole unit.
    pub fn cost_per_person(&self) -> Option<f64> {
        self.expenses.per_person(self.travelers)
    }
}
