/// Reasons an expense computation or trip plan is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ExpenseError {
    /// Mileage is zero, negative or not a number.
    #[error("invalid vehicle '{vehicle}': mileage must be a positive number, found {mileage}")]
    InvalidVehicle { vehicle: String, mileage: f64 },
    /// The party has no travelers.
    #[error("invalid traveler count {0}: a trip needs at least one traveler")]
    InvalidTravelerCount(u32),
    /// Negative or non-finite distance, toll cost or fuel-stop price.
    #[error("invalid route '{route}': {reason}")]
    InvalidRoute { route: String, reason: String },
    /// The requested route ID is not among the candidates.
    #[error("no candidate route with id '{0}'")]
    UnknownRoute(String),
    /// The route source returned no candidates.
    #[error("no candidate routes from '{from}' to '{to}'")]
    NoRoutes { from: String, to: String },
}
