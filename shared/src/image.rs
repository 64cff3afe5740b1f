//! Image format detection for uploaded photos

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image formats accepted from upload or camera capture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("image is empty")]
    Empty,

    #[error("unsupported image type: {0}")]
    Unsupported(String),

    #[error("image is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Detect the format from the file's leading bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(JPEG_MAGIC) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(PNG_MAGIC) {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }

    /// Match a `.jpg`, `.jpeg` or `.png` file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// Work out the format of an uploaded image
///
/// Magic bytes win; the file name and declared content type are only used
/// when the bytes are not recognized (e.g. truncated test fixtures).
pub fn detect_image_format(
    bytes: &[u8],
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<ImageFormat, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    ImageFormat::sniff(bytes)
        .or_else(|| file_name.and_then(ImageFormat::from_file_name))
        .or_else(|| content_type.and_then(ImageFormat::from_content_type))
        .ok_or_else(|| {
            ImageError::Unsupported(
                file_name
                    .or(content_type)
                    .unwrap_or("unrecognized bytes")
                    .to_string(),
            )
        })
}
