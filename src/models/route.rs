//! Candidate routes with their toll plazas and fuel stops.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// How demanding a route is to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Moderate" => Ok(Difficulty::Moderate),
            "Challenging" => Ok(Difficulty::Challenging),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// A toll plaza charging a fixed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toll {
    /// Identifier.
    #[serde(default)]
    pub id: String,
    /// Plaza name.
    pub name: String,
    /// Road or town the plaza is on.
    pub location: String,
    /// Charge in currency units; never negative.
    pub cost: f64,
    /// Position.
    #[serde(default)]
    pub coordinates: Coordinates,
}

/// A refueling station with per-unit prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStop {
    /// Identifier.
    #[serde(default)]
    pub id: String,
    /// Station name.
    pub name: String,
    /// Road or town the station is on.
    pub location: String,
    /// Petrol price per liter.
    pub petrol_price: f64,
    /// Diesel price per liter.
    pub diesel_price: f64,
    /// CNG price per unit, if the station sells it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cng_price: Option<f64>,
    /// Position.
    #[serde(default)]
    pub coordinates: Coordinates,
    /// Facilities such as "Restroom" or "ATM".
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl FuelStop {
    /// Returns `true` if every present price is finite and non-negative.
    pub fn has_valid_prices(&self) -> bool {
        let valid = |p: f64| p.is_finite() && p >= 0.0;
        valid(self.petrol_price) && valid(self.diesel_price) && self.cng_price.map_or(true, valid)
    }
}

/// One candidate path between two locations.
///
/// Tolls and fuel stops are kept in travel order.
///
/// # Examples
///
/// ```
/// use trip_cost::models::{Coordinates, Difficulty, Route, Toll};
///
/// let route = Route::new("route-1", "Highway", 200.0, 300)
///     .with_toll(Toll {
///         id: "toll-1".into(),
///         name: "Kherki Daula".into(),
///         location: "NH-8".into(),
///         cost: 65.0,
///         coordinates: Coordinates::default(),
///     })
///     .with_difficulty(Difficulty::Moderate);
/// assert_eq!(route.toll_count(), 1);
/// assert_eq!(route.total_toll_cost(), 65.0);
/// assert_eq!(route.duration_hours(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    id: String,
    name: String,
    distance: f64,
    duration: u32,
    #[serde(default)]
    tolls: Vec<Toll>,
    #[serde(default)]
    fuel_stops: Vec<FuelStop>,
    #[serde(default)]
    is_popular: bool,
    difficulty: Difficulty,
}

impl Route {
    /// Creates a route with no tolls or fuel stops, not popular, Easy.
    ///
    /// `distance` is in kilometers, `duration` in minutes.
    pub fn new(id: impl Into<String>, name: impl Into<String>, distance: f64, duration: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            distance,
            duration,
            tolls: Vec::new(),
            fuel_stops: Vec::new(),
            is_popular: false,
            difficulty: Difficulty::Easy,
        }
    }

    /// Appends a toll plaza.
    pub fn with_toll(mut self, toll: Toll) -> Self {
        self.tolls.push(toll);
        self
    }

    /// Replaces the toll list.
    pub fn with_tolls(mut self, tolls: Vec<Toll>) -> Self {
        self.tolls = tolls;
        self
    }

    /// Appends a fuel stop.
    pub fn with_fuel_stop(mut self, stop: FuelStop) -> Self {
        self.fuel_stops.push(stop);
        self
    }

    /// Replaces the fuel stop list.
    pub fn with_fuel_stops(mut self, stops: Vec<FuelStop>) -> Self {
        self.fuel_stops = stops;
        self
    }

    /// Marks the route as popular.
    pub fn with_popular(mut self, popular: bool) -> Self {
        self.is_popular = popular;
        self
    }

    /// Sets the difficulty tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Route ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Driving time in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Driving time in hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration) / 60.0
    }

    /// Toll plazas in travel order.
    pub fn tolls(&self) -> &[Toll] {
        &self.tolls
    }

    /// Fuel stops in travel order.
    pub fn fuel_stops(&self) -> &[FuelStop] {
        &self.fuel_stops
    }

    /// Whether the route is marked popular.
    pub fn is_popular(&self) -> bool {
        self.is_popular
    }

    /// Difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of toll plazas.
    pub fn toll_count(&self) -> usize {
        self.tolls.len()
    }

    /// Sum of all toll charges.
    pub fn total_toll_cost(&self) -> f64 {
        self.tolls.iter().fold(0.0, |acc, t| acc + t.cost)
    }

    /// Returns `true` if the route has no toll plazas.
    pub fn is_toll_free(&self) -> bool {
        self.tolls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toll(cost: f64) -> Toll {
        Toll {
            id: String::new(),
            name: "T".into(),
            location: "L".into(),
            cost,
            coordinates: Coordinates::default(),
        }
    }

    #[test]
    fn test_route_defaults() {
        let r = Route::new("r", "Route", 120.0, 90);
        assert_eq!(r.id(), "r");
        assert_eq!(r.distance(), 120.0);
        assert_eq!(r.duration(), 90);
        assert!(r.is_toll_free());
        assert!(r.fuel_stops().is_empty());
        assert!(!r.is_popular());
        assert_eq!(r.difficulty(), Difficulty::Easy);
        assert!((r.duration_hours() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_route_toll_sum() {
        let r = Route::new("r", "Route", 1.0, 1)
            .with_toll(toll(65.0))
            .with_toll(toll(110.0));
        assert_eq!(r.toll_count(), 2);
        assert_eq!(r.total_toll_cost(), 175.0);
        assert!(!r.is_toll_free());
    }

    #[test]
    fn test_toll_free_cost_is_positive_zero() {
        let r = Route::new("r", "Route", 200.0, 300);
        let cost = r.total_toll_cost();
        assert_eq!(cost, 0.0);
        assert!(cost.is_sign_positive());
        assert_eq!(serde_json::to_string(&cost).expect("serializable"), "0.0");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Moderate".parse::<Difficulty>(), Ok(Difficulty::Moderate));
        assert!("Extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Challenging.to_string(), "Challenging");
    }

    #[test]
    fn test_fuel_stop_price_validity() {
        let mut stop = FuelStop {
            id: String::new(),
            name: "S".into(),
            location: "L".into(),
            petrol_price: 96.5,
            diesel_price: 89.3,
            cng_price: None,
            coordinates: Coordinates::default(),
            amenities: vec![],
        };
        assert!(stop.has_valid_prices());
        stop.cng_price = Some(-1.0);
        assert!(!stop.has_valid_prices());
        stop.cng_price = Some(70.0);
        stop.diesel_price = f64::NAN;
        assert!(!stop.has_valid_prices());
    }

    #[test]
    fn test_route_json_shape() {
        let json = r#"{
            "id": "route-3",
            "name": "Economic Route (Toll-Free)",
            "distance": 330,
            "duration": 360,
            "tolls": [],
            "fuelStops": [{
                "name": "HP Petrol Station",
                "location": "Mumbai-Pune Expressway",
                "petrolPrice": 98.2,
                "dieselPrice": 91.15
            }],
            "isPopular": false,
            "difficulty": "Easy"
        }"#;
        let r: Route = serde_json::from_str(json).expect("valid route");
        assert_eq!(r.fuel_stops().len(), 1);
        assert_eq!(r.fuel_stops()[0].cng_price, None);
        assert_eq!(r.distance(), 330.0);
    }
}
