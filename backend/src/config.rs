//! Configuration management for the Crop Advisor server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Credentials from `soil.env` / `pest.env` (or a `GEMINI_API_KEY` variable)
//! 3. Configuration files (development.toml, production.toml)
//! 4. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Env file holding the credential for the soil flow
pub const SOIL_ENV_FILE: &str = "soil.env";

/// Env file holding the credential for the pest flow
pub const PEST_ENV_FILE: &str = "pest.env";

/// Variable name looked up in the env files and the process environment
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Settings shared by every Gemini client
    pub gemini: GeminiConfig,

    /// Model used for soil classification, recommendations and translation
    pub soil: ModelConfig,

    /// Model used for pest and disease diagnosis
    pub pest: ModelConfig,

    /// Upload limits
    pub uploads: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// API key; required at startup
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name, e.g. gemini-2.5-flash
    pub model: String,

    /// Apply harassment / hate-speech safety thresholds
    #[serde(default)]
    pub safety_filters: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Largest accepted image, in bytes
    pub max_image_bytes: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.timeout_secs", 60)?
            .set_default("soil.model", "gemini-2.5-flash")?
            .set_default("soil.safety_filters", true)?
            .set_default("pest.model", "gemini-1.5-flash")?
            .set_default("pest.safety_filters", false)?
            .set_default("uploads.max_image_bytes", 10 * 1024 * 1024)?;

        // Per-flow credential files
        if let Some(key) = credential(SOIL_ENV_FILE) {
            builder = builder.set_default("soil.api_key", key)?;
        }
        if let Some(key) = credential(PEST_ENV_FILE) {
            builder = builder.set_default("pest.api_key", key)?;
        }

        let config = builder
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Fail fast when a flow has no credential
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (flow, model, env_file) in [
            ("soil", &self.soil, SOIL_ENV_FILE),
            ("pest", &self.pest, PEST_ENV_FILE),
        ] {
            if model.api_key().is_none() {
                return Err(ConfigError::Message(format!(
                    "Gemini API key not found for the {flow} flow. Set {API_KEY_VAR} in {env_file} \
                     or AGRI__{}__API_KEY in the environment.",
                    flow.to_uppercase()
                )));
            }
            if model.model.trim().is_empty() {
                return Err(ConfigError::Message(format!(
                    "No model name configured for the {flow} flow"
                )));
            }
        }
        if self.uploads.max_image_bytes == 0 {
            return Err(ConfigError::Message(
                "uploads.max_image_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl ModelConfig {
    /// The API key, if present and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

/// Read `GEMINI_API_KEY` from an env file, falling back to the process environment
fn credential(env_file: &str) -> Option<String> {
    let from_file = dotenvy::from_filename_iter(env_file).ok().and_then(|iter| {
        iter.filter_map(Result::ok)
            .find(|(key, _)| key == API_KEY_VAR)
            .map(|(_, value)| value)
    });

    from_file.or_else(|| std::env::var(API_KEY_VAR).ok())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
