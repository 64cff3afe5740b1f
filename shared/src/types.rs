//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Languages the advisor can translate recommendations into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Punjabi,
    Hindi,
    Tamil,
    Telugu,
    English,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Punjabi,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::English,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Punjabi => "pa",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::English => "en",
        }
    }

    /// English name of the language, as used inside prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::Punjabi => "Punjabi",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::English => "English",
        }
    }

    /// Look up a language by ISO 639-1 code or English name
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.code().eq_ignore_ascii_case(value) || lang.name().eq_ignore_ascii_case(value)
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A form label in English and Punjabi
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BilingualLabel {
    pub en: String,
    pub pa: String,
}

impl BilingualLabel {
    pub fn new(en: &str, pa: &str) -> Self {
        Self {
            en: en.to_string(),
            pa: pa.to_string(),
        }
    }
}

/// Render a float the way a farmer typed it: whole numbers keep one decimal place
///
/// `2.0` renders as `"2.0"` rather than `"2"`, so prompt text reads "2.0 acres".
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
