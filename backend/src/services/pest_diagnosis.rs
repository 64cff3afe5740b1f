//! Pest and disease diagnosis service

use std::sync::Arc;

use shared::{pest_diagnosis_prompt, PestReport};

use crate::error::AppResult;
use crate::external::{GenerationRequest, GenerativeModel, InlineImage};

/// Service diagnosing crop photos
#[derive(Clone)]
pub struct PestDiagnosisService {
    model: Arc<dyn GenerativeModel>,
}

impl PestDiagnosisService {
    /// Create a new PestDiagnosisService instance
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Identify the pest or disease in a crop photo, in English and Punjabi
    pub async fn diagnose(&self, image: InlineImage) -> AppResult<PestReport> {
        let size = image.data.len();
        let request = GenerationRequest::text(pest_diagnosis_prompt()).with_image(Some(image));

        let diagnosis = self.model.generate(request).await?;

        tracing::info!(
            model = self.model.model_name(),
            image_bytes = size,
            "Pest diagnosis complete"
        );

        Ok(PestReport::new(diagnosis))
    }
}
