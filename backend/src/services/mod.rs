//! Business logic services for the Crop Advisor platform

pub mod pest_diagnosis;
pub mod recommendation;
pub mod soil_analysis;
pub mod soil_classifier;
pub mod weather_advice;

pub use pest_diagnosis::PestDiagnosisService;
pub use recommendation::RecommendationService;
pub use soil_analysis::{SoilAnalysisInput, SoilAnalysisService};
pub use soil_classifier::SoilClassifierService;
pub use weather_advice::WeatherAdviceService;
