//! Crop Advisor - Backend Server
//!
//! Soil classification, profit-ranked crop recommendations and pest
//! diagnosis for smallholder farmers, backed by a hosted Gemini model.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{GeminiClient, GenerativeModel};

/// Room for form fields and multipart framing on top of the image itself
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Largest request body that can still carry an image at the upload limit
///
/// `/soil/classify` sends the image base64-encoded inside JSON, so the
/// encoded size is the bound, not the raw one.
fn request_body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes.div_ceil(3) * 4 + FORM_OVERHEAD_BYTES
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Model behind soil classification, recommendations, translation and weather advice
    pub soil_model: Arc<dyn GenerativeModel>,
    /// Model behind pest diagnosis
    pub pest_model: Arc<dyn GenerativeModel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;
    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    tracing::info!("Starting Crop Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    let soil_model = GeminiClient::from_config(&config.gemini, &config.soil)?;
    let pest_model = GeminiClient::from_config(&config.gemini, &config.pest)?;
    tracing::info!(
        "Using {} for soil analysis and {} for pest detection",
        config.soil.model,
        config.pest.model
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        soil_model: Arc::new(soil_model),
        pest_model: Arc::new(pest_model),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = request_body_limit(state.config.uploads.max_image_bytes);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
