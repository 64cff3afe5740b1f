//! Soil classification service
//!
//! Asks the model to name the soil type and maps the reply onto the closed
//! label set. Off-vocabulary replies are not errors; they become
//! `SoilClassification::Unknown`.

use std::sync::Arc;

use shared::{classification_prompt, parse_soil_label, validate_soil_inputs, SoilClassification};

use crate::error::{AppError, AppResult};
use crate::external::{GenerationRequest, GenerativeModel, InlineImage};

/// Service classifying soil samples
#[derive(Clone)]
pub struct SoilClassifierService {
    model: Arc<dyn GenerativeModel>,
}

impl SoilClassifierService {
    /// Create a new SoilClassifierService instance
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Classify a soil sample from an image, a description, or both
    pub async fn classify(
        &self,
        image: Option<InlineImage>,
        description: Option<&str>,
    ) -> AppResult<SoilClassification> {
        validate_soil_inputs(image.is_some(), description)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let prompt = classification_prompt(image.is_some(), description);
        let request = GenerationRequest::text(prompt)
            .with_image(image)
            .with_temperature(shared::CLASSIFICATION_TEMPERATURE);

        let reply = self.model.generate(request).await?;
        let classification = parse_soil_label(&reply);

        match &classification {
            SoilClassification::Known { soil_type } => {
                tracing::info!(model = self.model.model_name(), "Detected soil type: {}", soil_type);
            }
            SoilClassification::Unknown { raw_response } => {
                tracing::warn!(
                    model = self.model.model_name(),
                    raw_response = %raw_response,
                    "Classifier reply is not a known soil label"
                );
            }
        }

        Ok(classification)
    }
}
