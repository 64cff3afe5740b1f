//! Prompt construction for the generative model
//!
//! All prompts are plain text. Structure in the replies is only enforced
//! client-side (see [`crate::parse_soil_label`]).

use crate::models::{FarmParameters, SoilClassification, SoilType, WeatherObservation};
use crate::types::{format_quantity, Language};

/// Sampling temperature for soil classification (near-deterministic)
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.1;

/// Sampling temperature for crop recommendations, leaving room for estimate variety
pub const RECOMMENDATION_TEMPERATURE: f32 = 0.5;

/// Sampling temperature for translating recommendations
pub const TRANSLATION_TEMPERATURE: f32 = 0.3;

fn soil_label_list(separator: &str) -> String {
    SoilType::ALL
        .iter()
        .map(|soil| soil.label())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Build the soil classification prompt
///
/// With an image the model is asked to reason about what it sees before
/// answering. Without an image the description is the only evidence.
pub fn classification_prompt(has_image: bool, description: Option<&str>) -> String {
    let description = description.map(str::trim).filter(|d| !d.is_empty());

    let text_prompt = description.map(|d| {
        format!(
            "You are an expert agronomist. Classify the soil strictly as one of:\n\
             - {}\n\n\
             Soil description: {}",
            soil_label_list("\n- "),
            d
        )
    });

    if has_image {
        let image_prompt = format!(
            "You are an expert agronomist. Analyze the soil image step-by-step:\n\
             1. Describe the color, texture, and any visible particles (e.g., gritty, sticky).\n\
             2. Consider the additional description if provided.\n\
             3. Classify strictly as one of: {}.\n\
             Respond with only the soil type name (e.g., \"{}\").",
            soil_label_list(", "),
            SoilType::BlackSoil.label()
        );
        match text_prompt {
            Some(text) => format!("{}\n\n{}", image_prompt, text),
            None => image_prompt,
        }
    } else {
        format!(
            "{}\n\nBased on this description, respond with only the soil type name.",
            text_prompt.unwrap_or_default()
        )
    }
}

/// Build the crop recommendation prompt
pub fn recommendation_prompt(
    classification: &SoilClassification,
    description: &str,
    params: &FarmParameters,
) -> String {
    let area = format_quantity(params.area);
    format!(
        "You are an expert in agriculture and economics. Based on the following:\n\
         - Soil type: {soil}\n\
         - Soil description: {description}\n\
         - Temperature: {temperature}°C\n\
         - Humidity: {humidity}%\n\
         - Nitrogen (N): {n} kg/ha\n\
         - Phosphorus (P): {p} kg/ha\n\
         - Potassium (K): {k} kg/ha\n\
         - Location: {location}\n\
         - Area: {area} acres\n\
         \n\
         Recommend the top 3 crops that would maximize profit in this location. Consider:\n\
         - Suitability to soil, climate, and nutrient levels.\n\
         - Local market demand, current prices, and yield potential.\n\
         - Estimated profit per acre (in USD, based on average data).\n\
         - Total profit for {area} acres.\n\
         - Reasons for each recommendation.\n\
         - Any risks or tips.\n\
         \n\
         Format response as:\n\
         1. Crop Name: [Name]\n   \
            - Suitability: [Brief]\n   \
            - Estimated Yield: [Amount per acre]\n   \
            - Market Price: [Price per unit]\n   \
            - Profit per Acre: [Estimate USD]\n   \
            - Total Profit ({area} acres): [Estimate USD]\n   \
            - Reasons: [Details]\n\
         2. ...",
        soil = classification.label(),
        description = description,
        temperature = format_quantity(params.temperature),
        humidity = format_quantity(params.humidity),
        n = params.nitrogen,
        p = params.phosphorus,
        k = params.potassium,
        location = params.location,
        area = area,
    )
}

/// Build the prompt translating recommendations into another language
pub fn translation_prompt(text: &str, language: Language) -> String {
    format!(
        "Translate the following agricultural crop recommendations into {}, \
         preserving formatting and details:\n\n{}",
        language.name(),
        text
    )
}

/// Instruction sent with a crop photo for pest and disease diagnosis
pub fn pest_diagnosis_prompt() -> &'static str {
    "You are an expert in agriculture. Detect the pest or disease in this crop image. \
     Explain in English: what pest/disease it is, how it happens, why it occurs, \
     and what precautions farmers should take. \
     Then also explain the same in Punjabi language."
}

/// Build the prompt summarizing weather into short farmer advice
pub fn weather_advice_prompt(observation: &WeatherObservation) -> String {
    let data = serde_json::to_string(observation).unwrap_or_default();
    format!(
        "You are an agriculture assistant. Summarize this weather data for a small farmer in India.\n\
         - Keep it short (max 2 sentences).\n\
         - Use simple words.\n\
         - If rain is expected, warn to avoid irrigation.\n\
         - If temperature is high, suggest watering or shade.\n\
         Weather Data: {}",
        data
    )
}
