//! Route definitions for the Crop Advisor API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/soil", soil_routes())
        .nest("/pest", pest_routes())
        .nest("/weather", weather_routes())
}

/// Soil classification and crop recommendation routes
fn soil_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::get_soil_options))
        .route("/describe", post(handlers::describe_soil))
        .route("/classify", post(handlers::classify_soil))
        .route("/recommend", post(handlers::recommend_crops))
        .route("/translate", post(handlers::translate_recommendations))
        .route("/analyze", post(handlers::analyze_soil))
}

/// Pest and disease detection routes
fn pest_routes() -> Router<AppState> {
    Router::new()
        .route("/diagnose", post(handlers::diagnose_pest))
        .route("/report", post(handlers::download_pest_report))
}

/// Weather advice routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/advice", post(handlers::get_weather_advice))
}
