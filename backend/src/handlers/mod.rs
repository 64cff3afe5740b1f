//! HTTP handlers for the Crop Advisor API

pub mod health;
pub mod pest;
pub mod soil;
pub mod upload;
pub mod weather;

pub use health::health_check;
pub use pest::{diagnose_pest, download_pest_report};
pub use soil::{
    analyze_soil, classify_soil, describe_soil, get_soil_options, recommend_crops,
    translate_recommendations,
};
pub use weather::get_weather_advice;
