//! Prompt Measurement
//!
//! Runs a single prompt through a provider and attaches the energy estimate
//! of that call.

use super::profile::EnergyTable;
use crate::completion::{CompletionRequest, TokenUsage};
use crate::error::Result;
use crate::message::Message;
use crate::provider::LlmProvider;
use crate::util::estimate_tokens;
use ecoprompt_impact::MeasuredCall;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A generated response with its energy estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredResponse {
    /// Generated text
    pub content: String,
    /// Model that actually served the request
    pub model: String,
    /// Token usage
    pub usage: TokenUsage,
    /// Whether `usage` was estimated client-side
    pub usage_estimated: bool,
    /// Energy of the call
    pub call: MeasuredCall,
}

/// Send one prompt and measure the energy of the call
///
/// `model` of `None` uses the provider default. When the provider returns no
/// usage metadata, token counts are estimated from the prompt and response
/// text.
pub async fn measure_prompt(
    provider: &dyn LlmProvider,
    table: &EnergyTable,
    prompt: &str,
    model: Option<&str>,
) -> Result<MeasuredResponse> {
    let request = CompletionRequest::new(model.unwrap_or_default())
        .with_message(Message::user(prompt));

    let response = provider.complete(request).await?;

    let (usage, usage_estimated) = match response.usage {
        Some(usage) => (usage, false),
        None => {
            warn!(
                provider = provider.name(),
                "Provider returned no token usage, estimating from text"
            );
            let usage = TokenUsage::new(estimate_tokens(prompt), estimate_tokens(&response.content));
            (usage, true)
        }
    };

    let call = table.profile_for(&response.model).estimate(&usage);
    call.validate()?;

    info!(
        provider = provider.name(),
        model = %response.model,
        prompt_tokens = usage.prompt_tokens,
        completion_tokens = usage.completion_tokens,
        energy_kwh = call.energy_kwh,
        "Measured prompt"
    );

    Ok(MeasuredResponse {
        content: response.content,
        model: response.model,
        usage,
        usage_estimated,
        call,
    })
}
