//! EcoPrompt Impact - footprint model for AI requests
//!
//! This crate converts AI request parameters into energy, CO₂ and water
//! estimates with a 0–100 impact score and letter rating:
//! - Calibration: the constant tables the model multiplies by
//! - Params: manual request parameters and measured calls
//! - Estimator: manual and measurement estimation pipelines
//! - Score: sub-score normalization, weighting and rating
//! - Projection: per-day, monthly and yearly scaling and comparisons
//! - Report: terminal rendering

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod calibration;
pub mod error;
pub mod estimator;
pub mod params;
pub mod projection;
pub mod report;
pub mod score;

#[cfg(test)]
mod tests;

pub use calibration::Calibration;
pub use error::{Error, Result};
pub use estimator::{ImpactEstimator, ImpactResult};
pub use params::{MeasuredCall, ModelClass, RequestParameters, RequestType};
pub use projection::{
    Footprint, PeriodProjection, ProjectionResult, RealWorldComparison, UsageProjection,
    DEFAULT_PROMPTS_PER_DAY,
};
pub use report::{format_impact, format_projection, ImpactReport};
pub use score::{Rating, ScoreBreakdown};
