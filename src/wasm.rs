//! JavaScript bindings.
//!
//! Domain values cross the boundary as plain JS objects with the same
//! camelCase shape as the serde representation.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::evaluation::ExpenseCalculator;
use crate::format;
use crate::models::{Route, Vehicle};
use crate::planning::TripPlanner;
use crate::pricing::CostConfig;
use crate::source::{catalog, MockRouteSource};

/// Computes trip expenses. Omitted `travelers` defaults to 2.
#[wasm_bindgen(js_name = computeTripExpenses)]
pub fn compute_trip_expenses(
    vehicle: JsValue,
    route: JsValue,
    travelers: Option<u32>,
) -> Result<JsValue, JsError> {
    let vehicle: Vehicle = serde_wasm_bindgen::from_value(vehicle)?;
    let route: Route = serde_wasm_bindgen::from_value(route)?;
    let calculator = ExpenseCalculator::default();
    let travelers = travelers.unwrap_or(calculator.config().default_travelers);
    let expenses = calculator.compute(&vehicle, &route, travelers)?;
    Ok(serde_wasm_bindgen::to_value(&expenses)?)
}

/// Computes trip expenses with a caller-supplied configuration object.
#[wasm_bindgen(js_name = computeTripExpensesWithConfig)]
pub fn compute_trip_expenses_with_config(
    vehicle: JsValue,
    route: JsValue,
    travelers: Option<u32>,
    config: JsValue,
) -> Result<JsValue, JsError> {
    let config: CostConfig = serde_wasm_bindgen::from_value(config)?;
    let calculator = ExpenseCalculator::new(config)?;
    let vehicle: Vehicle = serde_wasm_bindgen::from_value(vehicle)?;
    let route: Route = serde_wasm_bindgen::from_value(route)?;
    let travelers = travelers.unwrap_or(calculator.config().default_travelers);
    let expenses = calculator.compute(&vehicle, &route, travelers)?;
    Ok(serde_wasm_bindgen::to_value(&expenses)?)
}

/// Quotes the mock candidate routes between two catalog locations.
///
/// Returns an array of `{route, expenses}` objects in route order.
#[wasm_bindgen(js_name = quoteRoutes)]
pub fn quote_routes(
    origin_id: &str,
    destination_id: &str,
    vehicle: JsValue,
    travelers: Option<u32>,
    seed: Option<u64>,
) -> Result<Array, JsError> {
    let origin = catalog::find_location(origin_id)
        .ok_or_else(|| JsError::new(&format!("unknown location '{origin_id}'")))?;
    let destination = catalog::find_location(destination_id)
        .ok_or_else(|| JsError::new(&format!("unknown location '{destination_id}'")))?;
    let vehicle: Vehicle = serde_wasm_bindgen::from_value(vehicle)?;

    let source = seed.map(MockRouteSource::new).unwrap_or_default();
    let planner = TripPlanner::new(source, ExpenseCalculator::default());
    let comparison = match travelers {
        Some(n) => planner.quote_routes(&origin, &destination, &vehicle, n)?,
        None => planner.quote_routes_default_travelers(&origin, &destination, &vehicle)?,
    };

    let quotes = Array::new();
    for quote in comparison.quotes() {
        quotes.push(&serde_wasm_bindgen::to_value(quote)?);
    }
    Ok(quotes)
}

/// The vehicle catalog.
#[wasm_bindgen(js_name = catalogVehicles)]
pub fn catalog_vehicles() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&catalog::vehicles())?)
}

/// The popular locations catalog.
#[wasm_bindgen(js_name = catalogLocations)]
pub fn catalog_locations() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&catalog::popular_locations())?)
}

#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(minutes: u32) -> String {
    format::format_duration(minutes)
}

#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance(km: f64) -> String {
    format::format_distance(km)
}

#[wasm_bindgen(js_name = getDifficultyColor)]
pub fn get_difficulty_color(difficulty: &str) -> String {
    format::difficulty_color_for_label(difficulty).to_string()
}
