//! Application settings
//!
//! Layered configuration for the `ecoprompt` binary.

mod loader;

pub use loader::load_config;

use ecoprompt_impact::{Calibration, DEFAULT_PROMPTS_PER_DAY};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Impact model constants
    pub calibration: Calibration,
    /// Measurement-mode projection
    pub projection: ProjectionConfig,
    /// Gemini client
    pub gemini: GeminiSettings,
}

/// Measurement-mode projection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Prompts-per-day rates to project over
    pub prompts_per_day: Vec<u32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            prompts_per_day: DEFAULT_PROMPTS_PER_DAY.to_vec(),
        }
    }
}

/// Gemini client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// Model override; `None` keeps `GEMINI_MODEL` or the provider default
    pub model: Option<String>,
    /// Maximum output tokens per request
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: None,
            max_tokens: 8192,
            timeout_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::loader::DEFAULT_CONFIG;
    use config::{Config, File, FileFormat};

    fn embedded() -> AppConfig {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_embedded_defaults_match_calibration() {
        let config = embedded();
        assert_eq!(config.calibration, Calibration::default());
        assert_eq!(config.projection.prompts_per_day, vec![10, 50]);
    }

    #[test]
    fn test_embedded_gemini_defaults() {
        let config = embedded();
        assert!(config.gemini.model.is_none());
        assert_eq!(config.gemini.max_tokens, 8192);
        assert_eq!(config.gemini.timeout_secs, 60);
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(
                "[calibration]\npue = 1.1\n[projection]\nprompts_per_day = [5]\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!((config.calibration.pue - 1.1).abs() < 1e-12);
        assert!((config.calibration.wue - 1.8).abs() < 1e-12);
        assert_eq!(config.projection.prompts_per_day, vec![5]);
    }

    #[test]
    fn test_struct_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.calibration, Calibration::default());
        assert_eq!(config.projection.prompts_per_day, DEFAULT_PROMPTS_PER_DAY.to_vec());
        assert_eq!(config.gemini.max_tokens, 8192);
    }
}
