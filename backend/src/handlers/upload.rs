//! Multipart form helpers shared by the upload endpoints

use axum::extract::multipart::Field;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use shared::{detect_image_format, validate_image_size};

use crate::error::{AppError, AppResult};
use crate::external::InlineImage;

/// Read an uploaded image part
///
/// Browsers send an empty part when no file was picked; that is `Ok(None)`.
pub async fn read_image_field(field: Field<'_>, limit: usize) -> AppResult<Option<InlineImage>> {
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await?;

    if bytes.is_empty() {
        return Ok(None);
    }

    validate_image_size(bytes.len(), limit)?;
    let format = detect_image_format(&bytes, file_name.as_deref(), content_type.as_deref())?;

    tracing::debug!(
        file_name = ?file_name,
        format = format.mime_type(),
        bytes = bytes.len(),
        "Received image upload"
    );

    Ok(Some(InlineImage::new(format, bytes.to_vec())))
}

/// Decode a base64 image sent inside a JSON body
pub fn decode_base64_image(encoded: &str, limit: usize) -> AppResult<InlineImage> {
    // Accept data URLs as produced by FileReader.readAsDataURL
    let payload = encoded
        .split_once(";base64,")
        .map(|(_, data)| data)
        .unwrap_or(encoded)
        .trim();

    let bytes = STANDARD.decode(payload).map_err(|e| AppError::Validation {
        field: "image_base64".to_string(),
        message: format!("Image is not valid base64: {}", e),
        message_pa: "ਤਸਵੀਰ ਦਾ base64 ਗਲਤ ਹੈ".to_string(),
    })?;

    validate_image_size(bytes.len(), limit)?;
    let format = detect_image_format(&bytes, None, None)?;
    Ok(InlineImage::new(format, bytes))
}

/// Parse a JSON-encoded text part
pub async fn read_json_field<T: DeserializeOwned>(field: Field<'_>) -> AppResult<T> {
    let name = field.name().unwrap_or("field").to_string();
    let text = field.text().await?;
    serde_json::from_str(&text).map_err(|e| AppError::Validation {
        message: format!("Invalid JSON in '{}': {}", name, e),
        message_pa: format!("'{}' ਵਿੱਚ JSON ਗਲਤ ਹੈ", name),
        field: name,
    })
}

/// Parse a checkbox-style text part
pub async fn read_bool_field(field: Field<'_>) -> AppResult<bool> {
    let name = field.name().unwrap_or("field").to_string();
    let text = field.text().await?;
    parse_bool(&text).ok_or_else(|| AppError::Validation {
        message: format!("'{}' must be true or false", name),
        message_pa: format!("'{}' true ਜਾਂ false ਹੋਣਾ ਚਾਹੀਦਾ ਹੈ", name),
        field: name,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
