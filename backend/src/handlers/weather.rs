//! HTTP handlers for weather advice endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use shared::WeatherObservation;

use crate::error::AppResult;
use crate::services::WeatherAdviceService;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WeatherAdviceResponse {
    pub advice: String,
    pub rain_expected: bool,
}

/// Summarize weather conditions into short farmer advice
pub async fn get_weather_advice(
    State(state): State<AppState>,
    Json(observation): Json<WeatherObservation>,
) -> AppResult<Json<WeatherAdviceResponse>> {
    let service = WeatherAdviceService::new(state.soil_model.clone());
    let advice = service.advise(&observation).await?;
    Ok(Json(WeatherAdviceResponse {
        advice,
        rain_expected: observation.rain_expected(),
    }))
}
