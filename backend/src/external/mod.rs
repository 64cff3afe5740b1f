//! External API integrations

pub mod gemini;
pub mod model;

#[cfg(test)]
pub mod fake;

pub use gemini::GeminiClient;
pub use model::{GenerationRequest, GenerativeModel, InlineImage};
