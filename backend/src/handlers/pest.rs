//! HTTP handlers for pest and disease detection endpoints

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use shared::{PestReport, PEST_REPORT_FILE_NAME};

use crate::error::{AppError, AppResult};
use crate::external::InlineImage;
use crate::handlers::upload::read_image_field;
use crate::services::PestDiagnosisService;
use crate::AppState;

/// Pull the crop photo out of the form
///
/// The form offers both a gallery upload (`image`) and a camera capture
/// (`camera`); the gallery upload wins when both are present.
async fn read_crop_image(state: &AppState, mut multipart: Multipart) -> AppResult<InlineImage> {
    let limit = state.config.uploads.max_image_bytes;
    let mut uploaded = None;
    let mut captured = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => uploaded = read_image_field(field, limit).await?,
            "camera" => captured = read_image_field(field, limit).await?,
            other => tracing::debug!("Ignoring unknown form field '{}'", other),
        }
    }

    uploaded.or(captured).ok_or(AppError::MissingImage)
}

async fn diagnose(state: &AppState, multipart: Multipart) -> AppResult<PestReport> {
    let image = read_crop_image(state, multipart).await?;
    let service = PestDiagnosisService::new(state.pest_model.clone());
    service.diagnose(image).await
}

/// Diagnose the pest or disease in a crop photo
pub async fn diagnose_pest(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<PestReport>> {
    let report = diagnose(&state, multipart).await?;
    Ok(Json(report))
}

/// Diagnose a crop photo and return the report as a text download
pub async fn download_pest_report(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let report = diagnose(&state, multipart).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", PEST_REPORT_FILE_NAME),
            ),
        ],
        report.to_text(),
    ))
}
