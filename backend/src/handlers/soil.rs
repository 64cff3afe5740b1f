//! HTTP handlers for soil analysis endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{
    parse_soil_label, soil_questionnaire, FarmParameters, Language, ObservationQuestion,
    SoilAnalysisReport, SoilClassification, SoilObservation, Translation,
};

use crate::error::{AppError, AppResult};
use crate::handlers::upload::{
    decode_base64_image, read_bool_field, read_image_field, read_json_field,
};
use crate::services::{
    RecommendationService, SoilAnalysisInput, SoilAnalysisService, SoilClassifierService,
};
use crate::AppState;

/// Questionnaire and form defaults for building the soil form
#[derive(Debug, Serialize)]
pub struct SoilOptionsResponse {
    pub questions: Vec<ObservationQuestion>,
    pub default_parameters: FarmParameters,
    pub languages: Vec<LanguageOption>,
}

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Get the soil questionnaire vocabulary
pub async fn get_soil_options() -> Json<SoilOptionsResponse> {
    Json(SoilOptionsResponse {
        questions: soil_questionnaire(),
        default_parameters: FarmParameters::default(),
        languages: Language::ALL
            .iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                name: lang.name(),
            })
            .collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct DescribeSoilResponse {
    pub description: String,
}

/// Preview the description generated from questionnaire answers
pub async fn describe_soil(Json(observation): Json<SoilObservation>) -> Json<DescribeSoilResponse> {
    Json(DescribeSoilResponse {
        description: observation.describe(),
    })
}

/// Input for classifying a soil sample without a file upload
#[derive(Debug, Deserialize)]
pub struct ClassifySoilInput {
    /// Free-text description; takes priority over `observation`
    pub description: Option<String>,
    pub observation: Option<SoilObservation>,
    /// Base64 image or data URL
    pub image_base64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifySoilResponse {
    pub label: &'static str,
    pub classification: SoilClassification,
}

/// Classify a soil sample
pub async fn classify_soil(
    State(state): State<AppState>,
    Json(input): Json<ClassifySoilInput>,
) -> AppResult<Json<ClassifySoilResponse>> {
    let description = input
        .description
        .filter(|d| !d.trim().is_empty())
        .or_else(|| input.observation.map(|o| o.describe()));
    let image = input
        .image_base64
        .as_deref()
        .map(|encoded| decode_base64_image(encoded, state.config.uploads.max_image_bytes))
        .transpose()?;

    let service = SoilClassifierService::new(state.soil_model.clone());
    let classification = service.classify(image, description.as_deref()).await?;

    Ok(Json(ClassifySoilResponse {
        label: classification.label(),
        classification,
    }))
}

/// Input for requesting crop recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendCropsInput {
    /// Soil label as returned by classification, sentinel included
    pub soil_label: String,
    pub description: String,
    pub parameters: FarmParameters,
}

#[derive(Debug, Serialize)]
pub struct RecommendCropsResponse {
    pub soil_label: &'static str,
    pub recommendations: String,
}

/// Recommend profitable crops for a classified soil
pub async fn recommend_crops(
    State(state): State<AppState>,
    Json(input): Json<RecommendCropsInput>,
) -> AppResult<Json<RecommendCropsResponse>> {
    let classification = parse_soil_label(&input.soil_label);

    let service = RecommendationService::new(state.soil_model.clone());
    let recommendations = service
        .recommend(&classification, &input.description, &input.parameters)
        .await?;

    Ok(Json(RecommendCropsResponse {
        soil_label: classification.label(),
        recommendations,
    }))
}

/// Input for translating recommendations
#[derive(Debug, Deserialize)]
pub struct TranslateInput {
    pub text: String,
    #[serde(default)]
    pub language: Language,
}

/// Translate recommendations into another language
pub async fn translate_recommendations(
    State(state): State<AppState>,
    Json(input): Json<TranslateInput>,
) -> AppResult<Json<Translation>> {
    let service = RecommendationService::new(state.soil_model.clone());
    let translation = service.translate(&input.text, input.language).await?;
    Ok(Json(translation))
}

/// Run the full analysis from the soil form
///
/// Multipart fields: `image` (optional file), `observation` and `parameters`
/// (JSON), `refine_with_description` (bool, default true), `language`.
pub async fn analyze_soil(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<SoilAnalysisReport>> {
    let limit = state.config.uploads.max_image_bytes;
    let mut input = SoilAnalysisInput {
        image: None,
        observation: SoilObservation::default(),
        parameters: FarmParameters::default(),
        refine_with_description: true,
        language: Language::default(),
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => input.image = read_image_field(field, limit).await?,
            "observation" => input.observation = read_json_field(field).await?,
            "parameters" => input.parameters = read_json_field(field).await?,
            "refine_with_description" => {
                input.refine_with_description = read_bool_field(field).await?
            }
            "language" => {
                let value = field.text().await?;
                input.language = Language::parse(&value).ok_or_else(|| AppError::Validation {
                    message: format!("Unsupported language: {}", value),
                    message_pa: format!("ਭਾਸ਼ਾ ਉਪਲਬਧ ਨਹੀਂ: {}", value),
                    field: "language".to_string(),
                })?;
            }
            other => tracing::debug!("Ignoring unknown form field '{}'", other),
        }
    }

    let service = SoilAnalysisService::new(
        SoilClassifierService::new(state.soil_model.clone()),
        RecommendationService::new(state.soil_model.clone()),
    );
    let report = service.analyze(input).await?;
    Ok(Json(report))
}
