//! Trip expense calculator: fuel, toll and food cost for one route.

use crate::models::{FoodExpense, FuelExpense, Route, TollExpense, TripExpenses, Vehicle};
use crate::pricing::{ConfigError, CostConfig, PriceSource};

use super::ExpenseError;

/// Computes the cost breakdown of driving a vehicle along a route.
///
/// The calculator is a pure function of its configuration and inputs: no
/// I/O, no interior state. It can be shared across threads and called once
/// per candidate route.
///
/// # Examples
///
/// ```
/// use trip_cost::models::{Coordinates, FuelType, Route, Toll, Vehicle};
/// use trip_cost::evaluation::ExpenseCalculator;
///
/// let vehicle = Vehicle::new("Maruti Suzuki", "Swift", 2023, 20.0, FuelType::Petrol);
/// let route = Route::new("r1", "Highway", 200.0, 300).with_toll(Toll {
///     id: "toll-1".into(),
///     name: "Kherki Daula".into(),
///     location: "NH-8".into(),
///     cost: 65.0,
///     coordinates: Coordinates::default(),
/// });
///
/// let calc = ExpenseCalculator::default();
/// let e = calc.compute(&vehicle, &route, 2).unwrap();
/// assert_eq!(e.fuel.quantity, 10.0);
/// assert_eq!(e.fuel.cost, 965.0);
/// assert_eq!(e.tolls.cost, 65.0);
/// assert_eq!(e.food.meals, 1);
/// assert_eq!(e.total, 1530.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpenseCalculator {
    config: CostConfig,
}

impl ExpenseCalculator {
    /// Creates a calculator with the given configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if the configuration fails
    /// [`CostConfig::validate`].
    pub fn new(config: CostConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Computes the expenses of one trip.
    ///
    /// # Errors
    ///
    /// - [`ExpenseError::InvalidVehicle`] if mileage is not a positive number
    /// - [`ExpenseError::InvalidTravelerCount`] if `travelers` is zero
    /// - [`ExpenseError::InvalidRoute`] for a negative distance, toll or price
    pub fn compute(
        &self,
        vehicle: &Vehicle,
        route: &Route,
        travelers: u32,
    ) -> Result<TripExpenses, ExpenseError> {
        validate_inputs(vehicle, route, travelers)?;

        let fuel_type = vehicle.fuel_type();
        let quantity = route.distance() / vehicle.mileage();
        let (unit_price, source) = self.config.prices.unit_price(
            fuel_type,
            route.fuel_stops(),
            self.config.electric_stop_pricing,
        );
        match source {
            PriceSource::Table => log::trace!("{fuel_type} priced from table"),
            PriceSource::StopAverage(n) => {
                log::trace!("{fuel_type} priced as mean over {n} fuel stops")
            }
        }
        let fuel_cost = quantity * unit_price;

        let toll_cost = route.total_toll_cost();

        let meals = meals_for_duration(route.duration(), &self.config.meal_thresholds_hours);
        let food_cost = f64::from(meals) * f64::from(travelers) * self.config.meal_cost;

        // Rounded over the unrounded fuel cost, not over `fuel.cost`.
        let total = (fuel_cost + toll_cost + food_cost).round();

        log::debug!(
            "route '{}' with {} {}: {:.2} {} at {:.2}, {} meals x {} travelers, total {}",
            route.id(),
            vehicle.brand(),
            vehicle.model(),
            quantity,
            fuel_type.unit(),
            unit_price,
            meals,
            travelers,
            total
        );

        Ok(TripExpenses {
            fuel: FuelExpense {
                cost: fuel_cost.round(),
                quantity: round_cents(quantity),
                unit_price: round_cents(unit_price),
            },
            tolls: TollExpense {
                cost: toll_cost,
                count: route.toll_count(),
            },
            food: FoodExpense {
                cost: food_cost,
                meals,
            },
            total,
        })
    }

    /// Computes expenses for the configured default party size.
    pub fn compute_for_default_party(
        &self,
        vehicle: &Vehicle,
        route: &Route,
    ) -> Result<TripExpenses, ExpenseError> {
        self.compute(vehicle, route, self.config.default_travelers)
    }
}

/// Computes trip expenses with the default prices and meal policy.
pub fn compute_trip_expenses(
    vehicle: &Vehicle,
    route: &Route,
    travelers: u32,
) -> Result<TripExpenses, ExpenseError> {
    ExpenseCalculator::default().compute(vehicle, route, travelers)
}

/// Number of meals per traveler for a trip of `duration_minutes`.
///
/// One meal for each threshold (in hours) the trip strictly exceeds.
///
/// ```
/// use trip_cost::evaluation::meals_for_duration;
///
/// let thresholds = [4.0, 8.0, 12.0];
/// assert_eq!(meals_for_duration(240, &thresholds), 0);
/// assert_eq!(meals_for_duration(241, &thresholds), 1);
/// assert_eq!(meals_for_duration(721, &thresholds), 3);
/// ```
pub fn meals_for_duration(duration_minutes: u32, thresholds_hours: &[f64]) -> u32 {
    let hours = f64::from(duration_minutes) / 60.0;
    thresholds_hours.iter().filter(|&&t| hours > t).count() as u32
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_inputs(vehicle: &Vehicle, route: &Route, travelers: u32) -> Result<(), ExpenseError> {
    if !vehicle.has_valid_mileage() {
        return Err(ExpenseError::InvalidVehicle {
            vehicle: format!("{} {}", vehicle.brand(), vehicle.model()),
            mileage: vehicle.mileage(),
        });
    }
    if travelers < 1 {
        return Err(ExpenseError::InvalidTravelerCount(travelers));
    }

    let invalid_route = |reason: String| ExpenseError::InvalidRoute {
        route: route.id().to_string(),
        reason,
    };
    let distance = route.distance();
    if !distance.is_finite() || distance < 0.0 {
        return Err(invalid_route(format!(
            "distance must be a non-negative number, found {distance}"
        )));
    }
    if let Some(toll) = route
        .tolls()
        .iter()
        .find(|t| !t.cost.is_finite() || t.cost < 0.0)
    {
        return Err(invalid_route(format!(
            "toll '{}' has invalid cost {}",
            toll.name, toll.cost
        )));
    }
    if let Some(stop) = route.fuel_stops().iter().find(|s| !s.has_valid_prices()) {
        return Err(invalid_route(format!(
            "fuel stop '{}' has a negative or non-numeric price",
            stop.name
        )));
    }
    Ok(())
}
