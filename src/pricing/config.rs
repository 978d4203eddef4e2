//! Cost configuration: prices, meal policy and the default party size.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ElectricStopPricing, FuelPriceTable};

/// Errors from loading or validating a [`CostConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The JSON document is malformed or has wrongly typed fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of range, e.g. a negative price.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything the calculator needs besides the vehicle and route.
///
/// All fields have defaults, so a partial JSON document is enough:
///
/// ```
/// use trip_cost::pricing::CostConfig;
///
/// let config = CostConfig::from_json_str(r#"{"meal_cost": 300}"#).unwrap();
/// assert_eq!(config.meal_cost, 300.0);
/// assert_eq!(config.default_travelers, 2);
/// assert_eq!(config.prices.petrol, 96.50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Fallback price per fuel unit.
    pub prices: FuelPriceTable,
    /// Price source for electric vehicles on routes with fuel stops.
    pub electric_stop_pricing: ElectricStopPricing,
    /// Cost of one meal for one person.
    pub meal_cost: f64,
    /// Trip lengths in hours; each one strictly exceeded adds a meal.
    pub meal_thresholds_hours: Vec<f64>,
    /// Party size used when a caller does not give one.
    pub default_travelers: u32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            prices: FuelPriceTable::default(),
            electric_stop_pricing: ElectricStopPricing::default(),
            meal_cost: 250.0,
            meal_thresholds_hours: vec![4.0, 8.0, 12.0],
            default_travelers: 2,
        }
    }
}

impl CostConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CostConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading cost config from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Checks prices, meal policy and default party size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((fuel_type, price)) = self.prices.invalid_entry() {
            return Err(ConfigError::Invalid(format!(
                "{fuel_type} price must be a non-negative number, found {price}"
            )));
        }
        if !self.meal_cost.is_finite() || self.meal_cost < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "meal_cost must be a non-negative number, found {}",
                self.meal_cost
            )));
        }
        if let Some(t) = self
            .meal_thresholds_hours
            .iter()
            .find(|t| !t.is_finite() || **t < 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "meal thresholds must be non-negative hours, found {t}"
            )));
        }
        if self.meal_thresholds_hours.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Invalid(
                "meal thresholds must be strictly increasing".to_string(),
            ));
        }
        if self.default_travelers == 0 {
            return Err(ConfigError::Invalid(
                "default_travelers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
