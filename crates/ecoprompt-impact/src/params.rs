//! Request Parameters
//!
//! Inputs to the two estimation modes: a manual parameter set and a single
//! measured API call.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Model Class
// ============================================================================

/// Model size class, selecting the base energy per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelClass {
    /// Small models (distilled, on-device class)
    Small,
    /// Medium models (general-purpose hosted)
    Medium,
    /// Large frontier models
    Large,
    /// Multimodal models
    Multimodal,
}

impl ModelClass {
    /// All model classes, smallest first
    pub const ALL: [ModelClass; 4] = [Self::Small, Self::Medium, Self::Large, Self::Multimodal];

    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Multimodal => "Multimodal",
        }
    }
}

impl fmt::Display for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "multimodal" => Ok(Self::Multimodal),
            other => Err(Error::invalid(
                "model_class",
                format!("'{other}' is not one of small, medium, large, multimodal"),
            )),
        }
    }
}

// ============================================================================
// Request Type
// ============================================================================

/// Kind of content generated, scaling the base energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Text generation
    Text,
    /// Image generation
    Image,
    /// Video generation
    Video,
}

impl RequestType {
    /// All request types, cheapest first
    pub const ALL: [RequestType; 3] = [Self::Text, Self::Image, Self::Video];

    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Video => "Video",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(Error::invalid(
                "request_type",
                format!("'{other}' is not one of text, image, video"),
            )),
        }
    }
}

// ============================================================================
// Request Parameters
// ============================================================================

/// Manual-mode input describing a batch of identical requests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestParameters {
    /// Model size class
    pub model_class: ModelClass,
    /// Generated content type
    pub request_type: RequestType,
    /// Average tokens per request
    pub token_count: u32,
    /// Average inference time per request (ms)
    pub inference_time_ms: u32,
    /// Number of requests
    pub num_requests: u64,
}

impl Default for RequestParameters {
    /// Dashboard defaults: 100 medium text requests of 500 tokens at 100ms
    fn default() -> Self {
        Self {
            model_class: ModelClass::Medium,
            request_type: RequestType::Text,
            token_count: 500,
            inference_time_ms: 100,
            num_requests: 100,
        }
    }
}

impl RequestParameters {
    /// Create parameters for a batch of requests
    #[must_use]
    pub fn new(model_class: ModelClass, request_type: RequestType) -> Self {
        Self {
            model_class,
            request_type,
            ..Default::default()
        }
    }

    /// Set the average token count
    #[must_use]
    pub fn with_token_count(mut self, token_count: u32) -> Self {
        self.token_count = token_count;
        self
    }

    /// Set the average inference time
    #[must_use]
    pub fn with_inference_time_ms(mut self, inference_time_ms: u32) -> Self {
        self.inference_time_ms = inference_time_ms;
        self
    }

    /// Set the number of requests
    #[must_use]
    pub fn with_num_requests(mut self, num_requests: u64) -> Self {
        self.num_requests = num_requests;
        self
    }

    /// Reject counts outside the positive domain
    pub fn validate(&self) -> Result<()> {
        if self.token_count == 0 {
            return Err(Error::invalid("token_count", "must be at least 1"));
        }
        if self.inference_time_ms == 0 {
            return Err(Error::invalid("inference_time_ms", "must be at least 1"));
        }
        if self.num_requests == 0 {
            return Err(Error::invalid("num_requests", "must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Measured Call
// ============================================================================

/// Energy reported for one real API call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredCall {
    /// Energy consumed by the call (kWh)
    pub energy_kwh: f64,
}

impl MeasuredCall {
    /// Wrap a measured energy value
    #[must_use]
    pub fn new(energy_kwh: f64) -> Self {
        Self { energy_kwh }
    }

    /// The value must be a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        if !self.energy_kwh.is_finite() || self.energy_kwh < 0.0 {
            return Err(Error::invalid(
                "energy_kwh",
                format!("must be a non-negative number, got {}", self.energy_kwh),
            ));
        }
        Ok(())
    }
}
