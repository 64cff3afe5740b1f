//! WebAssembly module for the Crop Advisor front end
//!
//! Provides client-side computation for:
//! - Building the soil questionnaire form
//! - Previewing the soil description before it is sent
//! - Farm parameter and image checks before upload
//! - Interpreting classifier replies

use serde::Serialize;
use validator::Validate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::detect_image_format;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"Crop Advisor WASM module loaded".into());
}

#[derive(Serialize)]
struct LanguageOption {
    code: &'static str,
    name: &'static str,
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn describe(observation_json: &str) -> Result<String, String> {
    let observation: SoilObservation = serde_json::from_str(observation_json)
        .map_err(|e| format!("Invalid observation JSON: {}", e))?;
    Ok(observation.describe())
}

fn check_farm_parameters(params_json: &str) -> Result<(), String> {
    let params: FarmParameters = serde_json::from_str(params_json)
        .map_err(|e| format!("Invalid parameters JSON: {}", e))?;

    params.validate().map_err(|errors| {
        first_validation_error(&errors)
            .map(|(_, message)| message)
            .unwrap_or_else(|| errors.to_string())
    })
}

fn questionnaire_json() -> Result<String, String> {
    serde_json::to_string(&soil_questionnaire()).map_err(|e| e.to_string())
}

fn languages_json() -> Result<String, String> {
    let options: Vec<LanguageOption> = Language::ALL
        .iter()
        .map(|lang| LanguageOption {
            code: lang.code(),
            name: lang.name(),
        })
        .collect();
    serde_json::to_string(&options).map_err(|e| e.to_string())
}

/// Turn questionnaire answers (JSON) into the soil description
#[wasm_bindgen]
pub fn describe_soil_observation(observation_json: &str) -> Result<String, JsValue> {
    describe(observation_json).map_err(to_js_error)
}

/// Questionnaire with bilingual labels and defaults, as JSON
#[wasm_bindgen]
pub fn soil_form_options() -> Result<String, JsValue> {
    questionnaire_json().map_err(to_js_error)
}

/// Languages recommendations can be translated into, as JSON
#[wasm_bindgen]
pub fn language_options() -> Result<String, JsValue> {
    languages_json().map_err(to_js_error)
}

/// ISO codes of the supported languages
#[wasm_bindgen]
pub fn language_codes() -> js_sys::Array {
    Language::ALL
        .iter()
        .map(|lang| JsValue::from_str(lang.code()))
        .collect()
}

/// Validate farm parameters (JSON); the error carries the first field message
#[wasm_bindgen]
pub fn validate_farm_parameters(params_json: &str) -> Result<(), JsValue> {
    check_farm_parameters(params_json).map_err(to_js_error)
}

/// Whether there is enough evidence to submit the soil form
#[wasm_bindgen]
pub fn has_soil_evidence(has_image: bool, description: Option<String>) -> bool {
    validate_soil_inputs(has_image, description.as_deref()).is_ok()
}

/// MIME type of an image the backend will accept, or `None`
#[wasm_bindgen]
pub fn accepted_image_type(bytes: &[u8], file_name: Option<String>, limit: usize) -> Option<String> {
    validate_image_size(bytes.len(), limit).ok()?;
    detect_image_format(bytes, file_name.as_deref(), None)
        .ok()
        .map(|format| format.mime_type().to_string())
}

/// Map a classifier reply onto a display label
#[wasm_bindgen]
pub fn soil_label_for_reply(reply: &str) -> String {
    parse_soil_label(reply).label().to_string()
}

/// Whether a label names one of the four soil types
#[wasm_bindgen]
pub fn is_known_soil_label(label: &str) -> bool {
    SoilType::from_label(label).is_some()
}

/// Format an acreage or temperature the way it appears in recommendations
#[wasm_bindgen]
pub fn format_farm_quantity(value: f64) -> String {
    format_quantity(value)
}
