//! Soil classification models

use serde::{Deserialize, Serialize};

/// Label shown when the model's reply is not one of the known soil types
pub const UNKNOWN_SOIL_LABEL: &str = "Unknown (check inputs)";

/// The closed set of soil types the classifier may return
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    BlackSoil,
    RedSoil,
    ClaySoil,
    SandySoil,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::BlackSoil,
        SoilType::RedSoil,
        SoilType::ClaySoil,
        SoilType::SandySoil,
    ];

    /// Exact label the model is instructed to answer with
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::BlackSoil => "Black Soil",
            SoilType::RedSoil => "Red Soil",
            SoilType::ClaySoil => "Clay Soil",
            SoilType::SandySoil => "Sandy Soil",
        }
    }

    /// Match a label exactly, case and punctuation included
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|soil| soil.label() == label)
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a soil sample
///
/// `Unknown` keeps the raw model reply for diagnostics. It carries no
/// `SoilType`, so it can never be treated as a fifth soil category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SoilClassification {
    Known { soil_type: SoilType },
    Unknown { raw_response: String },
}

impl SoilClassification {
    /// Label used in prompts and on screen
    pub fn label(&self) -> &'static str {
        match self {
            SoilClassification::Known { soil_type } => soil_type.label(),
            SoilClassification::Unknown { .. } => UNKNOWN_SOIL_LABEL,
        }
    }

    pub fn soil_type(&self) -> Option<SoilType> {
        match self {
            SoilClassification::Known { soil_type } => Some(*soil_type),
            SoilClassification::Unknown { .. } => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, SoilClassification::Known { .. })
    }
}

impl From<SoilType> for SoilClassification {
    fn from(soil_type: SoilType) -> Self {
        SoilClassification::Known { soil_type }
    }
}

impl std::fmt::Display for SoilClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a classifier reply onto the closed label set
///
/// Only surrounding whitespace is ignored. Any other deviation (casing,
/// punctuation, extra words, refusals) yields `Unknown`.
pub fn parse_soil_label(response: &str) -> SoilClassification {
    match SoilType::from_label(response.trim()) {
        Some(soil_type) => SoilClassification::Known { soil_type },
        None => SoilClassification::Unknown {
            raw_response: response.to_string(),
        },
    }
}
