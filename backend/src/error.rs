//! Error handling for the Crop Advisor server
//!
//! Provides consistent error responses in English and Punjabi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ImageError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_pa: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    #[error("Missing image")]
    MissingImage,

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    // External service errors
    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        match shared::first_validation_error(&errors) {
            Some((field, message)) => AppError::Validation {
                message_pa: format!("ਗਲਤ ਜਾਣਕਾਰੀ: {}", message),
                field,
                message,
            },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::Multipart(err.body_text())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_pa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Status code and body for this error
    pub fn detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation {
                field,
                message,
                message_pa,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_pa: message_pa.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_pa: format!("ਗਲਤ ਜਾਣਕਾਰੀ: {}", msg),
                    field: None,
                },
            ),
            AppError::Multipart(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_MULTIPART".to_string(),
                    message_en: format!("Invalid form upload: {}", msg),
                    message_pa: format!("ਫਾਰਮ ਅਪਲੋਡ ਗਲਤ ਹੈ: {}", msg),
                    field: None,
                },
            ),
            AppError::MissingImage => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "MISSING_IMAGE".to_string(),
                    message_en: "Upload or capture a crop image first".to_string(),
                    message_pa: "ਪਹਿਲਾਂ ਫਸਲ ਦੀ ਤਸਵੀਰ ਅਪਲੋਡ ਕਰੋ ਜਾਂ ਖਿੱਚੋ".to_string(),
                    field: Some("image".to_string()),
                },
            ),
            AppError::Image(err) => {
                let status = match err {
                    ImageError::Unsupported(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    ImageError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                    ImageError::Empty => StatusCode::BAD_REQUEST,
                };
                (
                    status,
                    ErrorDetail {
                        code: "INVALID_IMAGE".to_string(),
                        message_en: format!("Image rejected: {}. Use a JPG or PNG file.", err),
                        message_pa: "ਤਸਵੀਰ ਸਵੀਕਾਰ ਨਹੀਂ ਹੋਈ। JPG ਜਾਂ PNG ਫਾਈਲ ਵਰਤੋ।".to_string(),
                        field: Some("image".to_string()),
                    },
                )
            }
            AppError::ModelError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MODEL_ERROR".to_string(),
                    message_en: format!("Something went wrong: {}", msg),
                    message_pa: format!("ਕੁਝ ਗਲਤ ਹੋ ਗਿਆ: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_pa: format!("ਸੈਟਿੰਗ ਵਿੱਚ ਗਲਤੀ: {}", msg),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.detail();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
