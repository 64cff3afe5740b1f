//! Pest and disease diagnosis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File name offered when downloading a pest report
pub const PEST_REPORT_FILE_NAME: &str = "pest_report.txt";

/// Free-text diagnosis returned for a crop photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PestReport {
    pub diagnosis: String,
    pub generated_at: DateTime<Utc>,
}

impl PestReport {
    pub fn new(diagnosis: String) -> Self {
        Self {
            diagnosis,
            generated_at: Utc::now(),
        }
    }

    /// Plain-text body of the downloadable report
    pub fn to_text(&self) -> String {
        self.diagnosis.clone()
    }
}
