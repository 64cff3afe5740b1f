//! Soil analysis report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::SoilClassification;
use crate::types::Language;

/// Severity of a banner shown next to the analysis results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A user-visible banner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Which input drove the classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    Image,
    SoilDescription,
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisMethod::Image => write!(f, "Image"),
            AnalysisMethod::SoilDescription => write!(f, "Soil description"),
        }
    }
}

/// A translated copy of the recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub language: Language,
    pub text: String,
}

/// Everything produced by one soil analysis run
///
/// Sections that could not be produced are `None`; the reason is in `notices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilAnalysisReport {
    pub run_id: Uuid,
    pub method: AnalysisMethod,
    pub ai_powered: bool,
    pub soil_description: String,
    pub classification: Option<SoilClassification>,
    pub recommendations: Option<String>,
    pub translation: Option<Translation>,
    pub notices: Vec<Notice>,
    pub completed_at: DateTime<Utc>,
}

impl SoilAnalysisReport {
    /// Method label as shown on screen, e.g. "Image (AI-powered)"
    pub fn method_label(&self) -> String {
        if self.ai_powered {
            format!("{} (AI-powered)", self.method)
        } else {
            self.method.to_string()
        }
    }
}
