//! Soil analysis pipeline
//!
//! Runs classify → recommend → translate for one form submission. Each step
//! only runs when the previous one produced a result. A failed step becomes
//! an error notice and an empty section; it never aborts the run.

use chrono::Utc;
use shared::{
    AnalysisMethod, FarmParameters, Language, Notice, SoilAnalysisReport, SoilObservation,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::external::InlineImage;
use crate::services::recommendation::RecommendationService;
use crate::services::soil_classifier::SoilClassifierService;

/// Shown whenever estimates are displayed
pub const ESTIMATE_DISCLAIMER: &str = "Note: Estimates are AI-generated based on general data. \
     Check local markets and consult experts for accuracy.";

/// Shown when no soil type could be detected
pub const GETTING_STARTED_HINT: &str = "Describe your soil and enter details, then click \
     'Analyze' to get started! (Image optional.)";

/// One soil analysis submission
#[derive(Debug, Clone)]
pub struct SoilAnalysisInput {
    pub image: Option<InlineImage>,
    pub observation: SoilObservation,
    pub parameters: FarmParameters,
    /// Send the questionnaire description along with the image
    pub refine_with_description: bool,
    pub language: Language,
}

/// Orchestrates the soil analysis steps
#[derive(Clone)]
pub struct SoilAnalysisService {
    classifier: SoilClassifierService,
    recommender: RecommendationService,
}

impl SoilAnalysisService {
    /// Create a new SoilAnalysisService instance
    pub fn new(classifier: SoilClassifierService, recommender: RecommendationService) -> Self {
        Self {
            classifier,
            recommender,
        }
    }

    /// Run the full analysis
    ///
    /// Only invalid input is returned as an error. Remote failures are
    /// reported through the report's notices.
    pub async fn analyze(&self, input: SoilAnalysisInput) -> AppResult<SoilAnalysisReport> {
        input.parameters.validate()?;

        let run_id = Uuid::new_v4();
        let description = input.observation.describe();
        let method = if input.image.is_some() {
            AnalysisMethod::Image
        } else {
            AnalysisMethod::SoilDescription
        };
        // Without an image the description is the only evidence
        let classifier_description = if input.image.is_none() || input.refine_with_description {
            Some(description.as_str())
        } else {
            None
        };

        tracing::info!(run_id = %run_id, method = %method, "Starting soil analysis");

        let mut report = SoilAnalysisReport {
            run_id,
            method,
            ai_powered: false,
            soil_description: description.clone(),
            classification: None,
            recommendations: None,
            translation: None,
            notices: Vec::new(),
            completed_at: Utc::now(),
        };

        report.classification = match self
            .classifier
            .classify(input.image, classifier_description)
            .await
        {
            Ok(classification) => Some(classification),
            Err(e) => {
                tracing::error!(run_id = %run_id, "Soil detection failed: {}", e);
                report
                    .notices
                    .push(Notice::error(format!("Error detecting soil: {}", e)));
                None
            }
        };

        let Some(classification) = report.classification.clone() else {
            report.notices.push(Notice::info(GETTING_STARTED_HINT));
            report.completed_at = Utc::now();
            return Ok(report);
        };

        report.ai_powered = true;
        report.notices.push(Notice::success(format!(
            "Detected Soil Type: {} (via {})",
            classification.label(),
            report.method_label()
        )));

        match self
            .recommender
            .recommend(&classification, &description, &input.parameters)
            .await
        {
            Ok(recommendations) => {
                if input.language != Language::English {
                    report.translation = self
                        .translate(run_id, &recommendations, input.language, &mut report.notices)
                        .await;
                }
                report.recommendations = Some(recommendations);
            }
            Err(e) => {
                tracing::error!(run_id = %run_id, "Crop recommendation failed: {}", e);
                report
                    .notices
                    .push(Notice::error(format!("Error recommending crops: {}", e)));
            }
        }

        report.notices.push(Notice::info(ESTIMATE_DISCLAIMER));
        report.completed_at = Utc::now();

        tracing::info!(
            run_id = %run_id,
            soil = classification.label(),
            recommendations = report.recommendations.is_some(),
            translated = report.translation.is_some(),
            "Soil analysis finished"
        );

        Ok(report)
    }

    async fn translate(
        &self,
        run_id: Uuid,
        recommendations: &str,
        language: Language,
        notices: &mut Vec<Notice>,
    ) -> Option<shared::Translation> {
        match self.recommender.translate(recommendations, language).await {
            Ok(translation) => Some(translation),
            Err(e) => {
                tracing::warn!(run_id = %run_id, language = language.code(), "Translation failed: {}", e);
                notices.push(Notice::error(format!(
                    "Error translating recommendations: {}",
                    e
                )));
                notices.push(Notice::info(format!(
                    "{} translation is currently unavailable.",
                    language
                )));
                None
            }
        }
    }
}
