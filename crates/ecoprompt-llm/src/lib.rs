//! EcoPrompt LLM - generative AI client for live-prompt measurement
//!
//! This crate supplies the per-call energy figure consumed by
//! `ecoprompt-impact`:
//! - Provider: `LlmProvider` trait and completion types
//! - Gemini: Google Gemini REST provider
//! - Energy: per-model energy profiles and prompt measurement
//! - Mock: canned provider for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod energy;
pub mod error;
pub mod gemini;
pub mod message;
pub mod mock;
pub mod provider;
pub mod util;

pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use energy::{default_profiles, measure_prompt, EnergyProfile, EnergyTable, MeasuredResponse};
pub use error::{Error, Result};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use message::{Message, MessageRole};
pub use mock::MockProvider;
pub use provider::LlmProvider;
