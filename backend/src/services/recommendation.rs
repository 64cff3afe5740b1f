//! Crop recommendation service
//!
//! Recommending and translating are separate calls with separate results,
//! so a failed translation never costs the caller the recommendation.

use std::sync::Arc;

use shared::{
    recommendation_prompt, translation_prompt, validate_translation_text, FarmParameters,
    Language, SoilClassification, Translation,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::external::{GenerationRequest, GenerativeModel};

/// Service producing profit-ranked crop recommendations
#[derive(Clone)]
pub struct RecommendationService {
    model: Arc<dyn GenerativeModel>,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Recommend the top three crops for a soil and farm
    ///
    /// An `Unknown` classification is passed through as its sentinel label.
    pub async fn recommend(
        &self,
        classification: &SoilClassification,
        description: &str,
        params: &FarmParameters,
    ) -> AppResult<String> {
        params.validate()?;

        let prompt = recommendation_prompt(classification, description, params);
        let request =
            GenerationRequest::text(prompt).with_temperature(shared::RECOMMENDATION_TEMPERATURE);

        let recommendations = self.model.generate(request).await?;

        tracing::info!(
            soil = classification.label(),
            location = %params.location,
            chars = recommendations.len(),
            "Crop recommendations generated"
        );

        Ok(recommendations)
    }

    /// Translate recommendation text, preserving its formatting
    pub async fn translate(&self, text: &str, language: Language) -> AppResult<Translation> {
        validate_translation_text(text).map_err(|e| AppError::ValidationError(e.to_string()))?;

        let request = GenerationRequest::text(translation_prompt(text, language))
            .with_temperature(shared::TRANSLATION_TEMPERATURE);

        let translated = self.model.generate(request).await?;

        tracing::debug!(language = language.code(), "Recommendations translated");

        Ok(Translation {
            language,
            text: translated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::fake::FakeModel;
    use shared::SoilType;

    #[tokio::test]
    async fn test_area_is_rendered_in_both_profit_lines() {
        let model = Arc::new(FakeModel::new().reply("1. Crop Name: Cotton"));
        let service = RecommendationService::new(model.clone());
        let params = FarmParameters {
            area: 2.0,
            ..FarmParameters::default()
        };

        service
            .recommend(&SoilType::BlackSoil.into(), "Texture: sticky plastic clay", &params)
            .await
            .unwrap();

        let prompt = &model.requests()[0].prompt;
        assert!(prompt.contains("- Total profit for 2.0 acres."));
        assert!(prompt.contains("- Total Profit (2.0 acres): [Estimate USD]"));
        assert_eq!(model.requests()[0].temperature, Some(0.5));
    }

    #[tokio::test]
    async fn test_unknown_classification_uses_sentinel_label() {
        let model = Arc::new(FakeModel::new().reply("1. Crop Name: Millet"));
        let service = RecommendationService::new(model.clone());
        let unknown = SoilClassification::Unknown {
            raw_response: "loam".to_string(),
        };

        service
            .recommend(&unknown, "Texture: mixed loam balanced", &FarmParameters::default())
            .await
            .unwrap();

        assert!(model.requests()[0]
            .prompt
            .contains("- Soil type: Unknown (check inputs)"));
    }

    #[tokio::test]
    async fn test_invalid_parameters_are_rejected_before_calling_model() {
        let model = Arc::new(FakeModel::new().reply("unused"));
        let service = RecommendationService::new(model.clone());
        let params = FarmParameters {
            area: 0.0,
            ..FarmParameters::default()
        };

        let err = service
            .recommend(&SoilType::RedSoil.into(), "desc", &params)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(model.requests().is_empty());
    }

    #[tokio::test]
    async fn test_translate_targets_language() {
        let model = Arc::new(FakeModel::new().reply("੧. ਫਸਲ ਦਾ ਨਾਮ: ਕਪਾਹ"));
        let service = RecommendationService::new(model.clone());

        let translation = service
            .translate("1. Crop Name: Cotton", Language::Punjabi)
            .await
            .unwrap();

        assert_eq!(translation.language, Language::Punjabi);
        assert_eq!(translation.text, "੧. ਫਸਲ ਦਾ ਨਾਮ: ਕਪਾਹ");
        let request = &model.requests()[0];
        assert!(request.prompt.contains("into Punjabi, preserving formatting and details"));
        assert_eq!(request.temperature, Some(0.3));
    }

    #[tokio::test]
    async fn test_translate_rejects_empty_text() {
        let model = Arc::new(FakeModel::new());
        let service = RecommendationService::new(model.clone());
        assert!(service.translate("  ", Language::Hindi).await.is_err());
        assert!(model.requests().is_empty());
    }
}
