//! Default unit prices per fuel type and fuel-stop price selection.

use serde::{Deserialize, Serialize};

use crate::models::{FuelStop, FuelType};

/// Fallback price per fuel unit, used when a route has no fuel stops.
///
/// # Examples
///
/// ```
/// use trip_cost::models::FuelType;
/// use trip_cost::pricing::FuelPriceTable;
///
/// let table = FuelPriceTable::default();
/// assert_eq!(table.price(FuelType::Petrol), 96.50);
/// assert_eq!(table.price(FuelType::Electric), 8.00);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPriceTable {
    pub petrol: f64,
    pub diesel: f64,
    pub cng: f64,
    pub electric: f64,
}

impl Default for FuelPriceTable {
    fn default() -> Self {
        Self {
            petrol: 96.50,
            diesel: 89.30,
            cng: 75.20,
            electric: 8.00,
        }
    }
}

/// Which fuel-stop price an electric vehicle is charged at.
///
/// Fuel stops carry no energy price. `PetrolAverage` keeps the historical
/// behavior of averaging the stops' petrol prices; `TableRate` ignores the
/// stops and uses the table's electric rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectricStopPricing {
    #[default]
    PetrolAverage,
    TableRate,
}

/// Where a unit price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    /// The fallback table.
    Table,
    /// Mean over this many fuel stops.
    StopAverage(usize),
}

impl FuelPriceTable {
    /// Default unit price for a fuel type.
    pub fn price(&self, fuel_type: FuelType) -> f64 {
        match fuel_type {
            FuelType::Petrol => self.petrol,
            FuelType::Diesel => self.diesel,
            FuelType::Cng => self.cng,
            FuelType::Electric => self.electric,
        }
    }

    /// The price a single stop charges for `fuel_type`.
    ///
    /// Returns `None` when the stop's prices do not apply (electric vehicles
    /// under [`ElectricStopPricing::TableRate`]). Stops without CNG, or
    /// listing it at zero, are treated as selling it at the table's CNG price.
    pub fn stop_price(
        &self,
        fuel_type: FuelType,
        stop: &FuelStop,
        electric: ElectricStopPricing,
    ) -> Option<f64> {
        match fuel_type {
            FuelType::Petrol => Some(stop.petrol_price),
            FuelType::Diesel => Some(stop.diesel_price),
            FuelType::Cng => Some(stop.cng_price.filter(|&p| p > 0.0).unwrap_or(self.cng)),
            FuelType::Electric => match electric {
                ElectricStopPricing::PetrolAverage => Some(stop.petrol_price),
                ElectricStopPricing::TableRate => None,
            },
        }
    }

    /// Unit price for a trip: the mean stop price if the route has stops
    /// that apply, otherwise the table price.
    pub fn unit_price(
        &self,
        fuel_type: FuelType,
        stops: &[FuelStop],
        electric: ElectricStopPricing,
    ) -> (f64, PriceSource) {
        if stops.is_empty() {
            return (self.price(fuel_type), PriceSource::Table);
        }

        let mut sum = 0.0;
        for stop in stops {
            match self.stop_price(fuel_type, stop, electric) {
                Some(p) => sum += p,
                None => return (self.price(fuel_type), PriceSource::Table),
            }
        }

        (sum / stops.len() as f64, PriceSource::StopAverage(stops.len()))
    }

    /// Returns the first field that is negative or non-finite, if any.
    pub(crate) fn invalid_entry(&self) -> Option<(FuelType, f64)> {
        FuelType::ALL
            .iter()
            .map(|&ft| (ft, self.price(ft)))
            .find(|&(_, p)| !p.is_finite() || p < 0.0)
    }
}
