//! Shared types and logic for the Crop Advisor platform
//!
//! This crate contains the soil questionnaire vocabulary, label parsing and
//! prompt construction shared between the backend and the browser front end
//! (via WASM). It performs no I/O.

pub mod image;
pub mod models;
pub mod prompts;
pub mod types;
pub mod validation;

pub use image::*;
pub use models::*;
pub use prompts::*;
pub use types::*;
pub use validation::*;
