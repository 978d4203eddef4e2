//! Vehicle and fuel type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of energy a vehicle consumes.
///
/// The unit of "fuel" is liters for Petrol, Diesel and CNG, and a
/// kWh-equivalent for Electric. The calculator treats the unit as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    #[serde(rename = "CNG")]
    Cng,
    Electric,
}

impl FuelType {
    /// All fuel types, in catalog order.
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Cng,
        FuelType::Electric,
    ];

    /// Display label used by the catalog and bindings.
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Cng => "CNG",
            FuelType::Electric => "Electric",
        }
    }

    /// Unit of fuel quantity for this type.
    pub fn unit(&self) -> &'static str {
        match self {
            FuelType::Electric => "kWh",
            FuelType::Petrol | FuelType::Diesel | FuelType::Cng => "L",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A car or motorcycle used for a trip.
///
/// `mileage` is distance traveled per fuel unit (km/L or km/kWh). It is not
/// validated here; the calculator rejects non-positive mileage.
///
/// # Examples
///
/// ```
/// use trip_cost::models::{FuelType, Vehicle};
///
/// let v = Vehicle::new("Honda", "City", 2023, 17.8, FuelType::Petrol);
/// assert_eq!(v.brand(), "Honda");
/// assert_eq!(v.mileage(), 17.8);
/// assert_eq!(v.fuel_type(), FuelType::Petrol);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    id: String,
    brand: String,
    model: String,
    year: i32,
    mileage: f64,
    fuel_type: FuelType,
}

impl Vehicle {
    /// Creates a vehicle with an empty catalog ID.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: f64,
        fuel_type: FuelType,
    ) -> Self {
        Self {
            id: String::new(),
            brand: brand.into(),
            model: model.into(),
            year,
            mileage,
            fuel_type,
        }
    }

    /// Sets the catalog ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Catalog ID (empty for ad-hoc vehicles).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Manufacturer.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Model year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Distance per fuel unit.
    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// Fuel type.
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    /// Returns `true` if mileage is finite and strictly positive.
    pub fn has_valid_mileage(&self) -> bool {
        self.mileage.is_finite() && self.mileage > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new("Maruti Suzuki", "Swift", 2023, 23.2, FuelType::Petrol);
        assert_eq!(v.id(), "");
        assert_eq!(v.brand(), "Maruti Suzuki");
        assert_eq!(v.model(), "Swift");
        assert_eq!(v.year(), 2023);
        assert_eq!(v.mileage(), 23.2);
        assert_eq!(v.fuel_type(), FuelType::Petrol);
    }

    #[test]
    fn test_vehicle_with_id() {
        let v = Vehicle::new("Tata", "Nexon EV", 2023, 4.5, FuelType::Electric).with_id("nexon-ev");
        assert_eq!(v.id(), "nexon-ev");
    }

    #[test]
    fn test_mileage_validity() {
        let ok = Vehicle::new("a", "b", 2020, 10.0, FuelType::Diesel);
        let zero = Vehicle::new("a", "b", 2020, 0.0, FuelType::Diesel);
        let negative = Vehicle::new("a", "b", 2020, -3.0, FuelType::Diesel);
        let nan = Vehicle::new("a", "b", 2020, f64::NAN, FuelType::Diesel);
        assert!(ok.has_valid_mileage());
        assert!(!zero.has_valid_mileage());
        assert!(!negative.has_valid_mileage());
        assert!(!nan.has_valid_mileage());
    }

    #[test]
    fn test_fuel_type_labels() {
        assert_eq!(FuelType::Cng.to_string(), "CNG");
        assert_eq!(FuelType::Electric.unit(), "kWh");
        assert_eq!(FuelType::Diesel.unit(), "L");
    }

    #[test]
    fn test_vehicle_json_shape() {
        let json = r#"{"id":"ertiga-2023","brand":"Maruti Suzuki","model":"Ertiga",
            "year":2023,"mileage":26.08,"fuelType":"CNG"}"#;
        let v: Vehicle = serde_json::from_str(json).expect("valid vehicle");
        assert_eq!(v.fuel_type(), FuelType::Cng);
        assert_eq!(v.id(), "ertiga-2023");

        let back = serde_json::to_value(&v).expect("serializes");
        assert_eq!(back["fuelType"], "CNG");
    }
}
