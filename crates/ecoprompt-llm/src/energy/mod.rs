//! Energy Measurement - per-call energy of LLM requests
//!
//! Providers report token usage, not energy. This module converts a call's
//! token usage into a [`MeasuredCall`](ecoprompt_impact::MeasuredCall) for the
//! impact model.
//!
//! # Module Structure
//!
//! - `profile`: Per-model energy coefficients and defaults
//! - `meter`: Run one prompt and measure it

mod meter;
mod profile;


pub use meter::{measure_prompt, MeasuredResponse};
pub use profile::{default_profiles, EnergyProfile, EnergyTable};
