//! Model Energy Profiles
//!
//! Energy coefficients per model, in kWh per 1K tokens. Output tokens
//! dominate since each one is a full forward pass; input tokens are processed
//! in parallel during prefill.

use crate::completion::TokenUsage;
use ecoprompt_impact::MeasuredCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Constants
// ============================================================================

/// Fixed energy per call for routing, networking and scheduling (kWh)
pub const PER_CALL_OVERHEAD_KWH: f64 = 0.000_001;

/// Default energy per 1K input tokens for unknown models (kWh)
pub const DEFAULT_INPUT_KWH_PER_1K: f64 = 0.000_025;

/// Default energy per 1K output tokens for unknown models (kWh)
pub const DEFAULT_OUTPUT_KWH_PER_1K: f64 = 0.000_5;

// Gemini flash-lite class
/// Flash-Lite energy per 1K input tokens
pub const FLASH_LITE_INPUT_KWH_PER_1K: f64 = 0.000_005;
/// Flash-Lite energy per 1K output tokens
pub const FLASH_LITE_OUTPUT_KWH_PER_1K: f64 = 0.000_1;

// Gemini flash class
/// Flash energy per 1K input tokens
pub const FLASH_INPUT_KWH_PER_1K: f64 = 0.000_01;
/// Flash energy per 1K output tokens
pub const FLASH_OUTPUT_KWH_PER_1K: f64 = 0.000_2;

// Gemini pro class
/// Pro energy per 1K input tokens
pub const PRO_INPUT_KWH_PER_1K: f64 = 0.000_05;
/// Pro energy per 1K output tokens
pub const PRO_OUTPUT_KWH_PER_1K: f64 = 0.001;

// ============================================================================
// Energy Profile
// ============================================================================

/// Energy coefficients for one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    /// Model name
    pub model: String,
    /// Provider name
    pub provider: String,
    /// Energy per 1K input tokens (kWh)
    pub input_kwh_per_1k: f64,
    /// Energy per 1K output tokens (kWh)
    pub output_kwh_per_1k: f64,
    /// Fixed energy per call (kWh)
    pub per_call_kwh: f64,
}

impl EnergyProfile {
    /// Profile for a model
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        provider: impl Into<String>,
        input_kwh_per_1k: f64,
        output_kwh_per_1k: f64,
    ) -> Self {
        Self {
            model: model.into(),
            provider: provider.into(),
            input_kwh_per_1k,
            output_kwh_per_1k,
            per_call_kwh: PER_CALL_OVERHEAD_KWH,
        }
    }

    /// Profile used for models without one
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(
            "unknown",
            "unknown",
            DEFAULT_INPUT_KWH_PER_1K,
            DEFAULT_OUTPUT_KWH_PER_1K,
        )
    }

    /// Energy of one call with the given token usage
    #[must_use]
    pub fn estimate(&self, usage: &TokenUsage) -> MeasuredCall {
        let input = f64::from(usage.prompt_tokens) / 1_000.0 * self.input_kwh_per_1k;
        let output = f64::from(usage.completion_tokens) / 1_000.0 * self.output_kwh_per_1k;
        MeasuredCall::new(self.per_call_kwh + input + output)
    }
}

/// Default profiles for the Gemini models
#[must_use]
pub fn default_profiles() -> HashMap<String, EnergyProfile> {
    let flash_lite = ["gemini-2.5-flash-lite"];
    let flash = ["gemini-3-flash-preview", "gemini-2.5-flash"];
    let pro = ["gemini-3-pro-preview", "gemini-2.5-pro"];

    let mut profiles = HashMap::new();
    for model in flash_lite {
        profiles.insert(
            model.to_string(),
            EnergyProfile::new(
                model,
                "gemini",
                FLASH_LITE_INPUT_KWH_PER_1K,
                FLASH_LITE_OUTPUT_KWH_PER_1K,
            ),
        );
    }
    for model in flash {
        profiles.insert(
            model.to_string(),
            EnergyProfile::new(model, "gemini", FLASH_INPUT_KWH_PER_1K, FLASH_OUTPUT_KWH_PER_1K),
        );
    }
    for model in pro {
        profiles.insert(
            model.to_string(),
            EnergyProfile::new(model, "gemini", PRO_INPUT_KWH_PER_1K, PRO_OUTPUT_KWH_PER_1K),
        );
    }
    profiles
}

// ============================================================================
// Energy Table
// ============================================================================

/// Model profiles with a fallback for unknown models
#[derive(Debug, Clone)]
pub struct EnergyTable {
    profiles: HashMap<String, EnergyProfile>,
    fallback: EnergyProfile,
}

impl Default for EnergyTable {
    fn default() -> Self {
        Self::new(default_profiles())
    }
}

impl EnergyTable {
    /// Table from explicit profiles
    #[must_use]
    pub fn new(profiles: HashMap<String, EnergyProfile>) -> Self {
        Self {
            profiles,
            fallback: EnergyProfile::fallback(),
        }
    }

    /// Add or replace a model's profile
    pub fn insert(&mut self, profile: EnergyProfile) {
        self.profiles.insert(profile.model.clone(), profile);
    }

    /// Profile for a model, if one is known
    #[must_use]
    pub fn get(&self, model: &str) -> Option<&EnergyProfile> {
        self.profiles.get(model)
    }

    /// Profile for a model, falling back to the default coefficients
    #[must_use]
    pub fn profile_for(&self, model: &str) -> &EnergyProfile {
        self.profiles.get(model).unwrap_or_else(|| {
            tracing::debug!(model, "No energy profile for model, using default");
            &self.fallback
        })
    }
}
