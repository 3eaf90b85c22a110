//! CLI command: `ecoprompt prompt`
//!
//! Live-prompt mode: sends one prompt to Gemini, converts the reported token
//! usage to energy, and projects it over daily usage.

use crate::settings::AppConfig;
use anyhow::{bail, Context};
use clap::Args;
use ecoprompt_impact::{format_projection, ImpactEstimator, ProjectionResult};
use ecoprompt_llm::{measure_prompt, EnergyTable, GeminiConfig, GeminiProvider, MeasuredResponse};
use serde::Serialize;
use std::time::Duration;

/// Arguments for `ecoprompt prompt`
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Prompt text (asked interactively when omitted)
    pub text: Option<String>,

    /// Gemini model to use
    #[arg(long)]
    pub model: Option<String>,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PromptOutput<'a> {
    response: &'a MeasuredResponse,
    projection: &'a ProjectionResult,
}

/// Run the prompt subcommand.
pub async fn run(
    args: PromptArgs,
    config: &AppConfig,
    estimator: &ImpactEstimator,
) -> anyhow::Result<()> {
    let prompt = match args.text {
        Some(text) => text,
        None => inquire::Text::new("Prompt:")
            .with_help_message("Sent to Gemini; energy is derived from token usage")
            .prompt()
            .context("Failed to read prompt")?,
    };
    if prompt.trim().is_empty() {
        bail!("Prompt is empty");
    }

    let provider = GeminiProvider::new(gemini_config(config)?)
        .context("Failed to create Gemini client")?;
    let table = EnergyTable::default();

    let measured = measure_prompt(&provider, &table, &prompt, args.model.as_deref())
        .await
        .context("Gemini request failed")?;
    let projection = estimator
        .estimate_from_measurement(&measured.call, &config.projection.prompts_per_day)
        .context("Failed to project energy")?;

    if args.json {
        return super::print_json(&PromptOutput {
            response: &measured,
            projection: &projection,
        });
    }

    println!("{}", measured.content);
    println!();
    println!(
        "Model: {} · {} input / {} output tokens{}",
        measured.model,
        measured.usage.prompt_tokens,
        measured.usage.completion_tokens,
        if measured.usage_estimated { " (estimated)" } else { "" }
    );
    print!("{}", format_projection(&projection));
    Ok(())
}

/// Gemini configuration from the environment plus application settings
pub fn gemini_config(config: &AppConfig) -> anyhow::Result<GeminiConfig> {
    let mut gemini = GeminiConfig::from_env()
        .context("Gemini is not configured. Set GEMINI_API_KEY in .env")?
        .with_max_tokens(config.gemini.max_tokens)
        .with_timeout(Duration::from_secs(config.gemini.timeout_secs));
    if let Some(model) = &config.gemini.model {
        gemini = gemini.with_model(model.clone());
    }
    Ok(gemini)
}
