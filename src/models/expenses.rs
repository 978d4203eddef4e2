//! Cost breakdown produced by the expense calculator.

use serde::{Deserialize, Serialize};

/// Fuel portion of a trip's cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelExpense {
    /// Fuel cost rounded to a whole currency unit.
    pub cost: f64,
    /// Fuel needed, rounded to 2 decimals (liters or kWh).
    #[serde(rename = "liters")]
    pub quantity: f64,
    /// Price per fuel unit, rounded to 2 decimals.
    #[serde(rename = "pricePerLiter")]
    pub unit_price: f64,
}

/// Toll portion of a trip's cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TollExpense {
    /// Exact sum of toll charges.
    pub cost: f64,
    /// Number of toll plazas.
    pub count: usize,
}

/// Food portion of a trip's cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodExpense {
    /// Cost of all meals for all travelers.
    pub cost: f64,
    /// Meals per traveler.
    pub meals: u32,
}

/// The cost breakdown for one (vehicle, route, travelers) triple.
///
/// `total` is the grand total rounded once over the unrounded fuel cost, so
/// it may differ from `fuel.cost + tolls.cost + food.cost` by less than one
/// currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripExpenses {
    pub fuel: FuelExpense,
    pub tolls: TollExpense,
    pub food: FoodExpense,
    pub total: f64,
}

impl TripExpenses {
    /// Sum of the three already-rounded sub-costs.
    pub fn sum_of_parts(&self) -> f64 {
        self.fuel.cost + self.tolls.cost + self.food.cost
    }

    /// Total divided evenly among `travelers`, rounded to a whole unit.
    ///
    /// Returns `None` for zero travelers.
    pub fn per_person(&self, travelers: u32) -> Option<f64> {
        if travelers == 0 {
            return None;
        }
        Some((self.total / f64::from(travelers)).round())
    }
}
