//! Weather advice service
//!
//! Condenses a weather observation into at most two plain sentences for a
//! smallholder farmer.

use std::sync::Arc;

use shared::{weather_advice_prompt, WeatherObservation};
use validator::Validate;

use crate::error::AppResult;
use crate::external::{GenerationRequest, GenerativeModel};

/// Service summarizing weather for farmers
#[derive(Clone)]
pub struct WeatherAdviceService {
    model: Arc<dyn GenerativeModel>,
}

impl WeatherAdviceService {
    /// Create a new WeatherAdviceService instance
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Summarize the observation into short advice
    pub async fn advise(&self, observation: &WeatherObservation) -> AppResult<String> {
        observation.validate()?;

        let advice = self
            .model
            .generate(GenerationRequest::text(weather_advice_prompt(observation)))
            .await?;

        tracing::debug!(rain_expected = observation.rain_expected(), "Weather advice generated");

        Ok(advice)
    }
}
