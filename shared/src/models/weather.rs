//! Weather observation models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Weather conditions a farmer wants summarized into advice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct WeatherObservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub temperature_celsius: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Humidity must be between 0 and 100%"))]
    pub humidity_percent: f64,
    /// Probability of precipitation, 0-100
    #[serde(default)]
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "Precipitation probability must be between 0 and 100%"
    ))]
    pub precipitation_probability: f64,
    /// Expected rain in millimetres
    #[serde(default)]
    pub expected_rain_mm: f64,
    pub conditions: String,
}

impl WeatherObservation {
    pub fn rain_expected(&self) -> bool {
        self.expected_rain_mm > 0.0 || self.precipitation_probability >= 50.0
    }
}
