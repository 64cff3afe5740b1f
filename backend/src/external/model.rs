//! Generative model abstraction
//!
//! Services talk to the hosted model through [`GenerativeModel`] so tests
//! can swap in a scripted fake.

use async_trait::async_trait;
use shared::ImageFormat;

use crate::error::AppResult;

/// An image sent inline with a prompt
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl InlineImage {
    pub fn new(format: ImageFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Everything the model receives for one call
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
    /// Sampling temperature; `None` keeps the model default
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            temperature: None,
        }
    }

    pub fn with_image(mut self, image: Option<InlineImage>) -> Self {
        self.image = image;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A hosted model that turns a prompt (and optional image) into text
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a reply. Errors are transport, quota or model failures.
    async fn generate(&self, request: GenerationRequest) -> AppResult<String>;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;
}
