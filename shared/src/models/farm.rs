//! Farm parameter models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Numeric and location details a farmer enters alongside the soil sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct FarmParameters {
    /// Air temperature in °C
    #[validate(range(min = -10.0, max = 50.0, message = "Temperature must be between -10 and 50 °C"))]
    pub temperature: f64,

    /// Relative humidity in percent
    #[validate(range(min = 0.0, max = 100.0, message = "Humidity must be between 0 and 100%"))]
    pub humidity: f64,

    /// Nitrogen (N) in kg/ha
    pub nitrogen: u32,

    /// Phosphorus (P) in kg/ha
    pub phosphorus: u32,

    /// Potassium (K) in kg/ha
    pub potassium: u32,

    /// Free-text location, e.g. city and country; may be left blank
    pub location: String,

    /// Farm area in acres
    #[validate(range(min = 0.1, message = "Area must be at least 0.1 acres"))]
    pub area: f64,
}

impl Default for FarmParameters {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 70.0,
            nitrogen: 30,
            phosphorus: 10,
            potassium: 30,
            location: "California, USA".to_string(),
            area: 1.0,
        }
    }
}
