//! Geographic locations.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle (haversine) distance to `other` in kilometers.
    ///
    /// ```
    /// use trip_cost::models::Coordinates;
    ///
    /// let a = Coordinates::new(0.0, 0.0);
    /// let b = Coordinates::new(1.0, 0.0);
    /// assert!((a.distance_km(&b) - 111.19).abs() < 0.01);
    /// ```
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// A named place a trip can start or end at.
///
/// # Examples
///
/// ```
/// use trip_cost::models::{Coordinates, Location};
///
/// let loc = Location::new("pune-1", "Shaniwar Wada", "Pune", "Maharashtra",
///     Coordinates::new(18.5196, 73.8553));
/// assert_eq!(loc.city(), "Pune");
/// assert_eq!(loc.label(), "Shaniwar Wada, Pune");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: String,
    name: String,
    city: String,
    state: String,
    coordinates: Coordinates,
}

impl Location {
    /// Creates a location.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            coordinates,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Landmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or region.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Position.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// "Name, City" label.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.city)
    }

    /// Straight-line distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.coordinates.distance_km(&other.coordinates)
    }
}
