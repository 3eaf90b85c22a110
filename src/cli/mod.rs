//! CLI module for EcoPrompt
//!
//! Provides the estimation commands:
//! - `estimate`: footprint of a batch of requests from manual parameters
//! - `prompt`: send a live prompt to Gemini and project its energy
//! - `project`: project a known per-call energy value

use crate::settings::{load_config, AppConfig};
use anyhow::Context;
use clap::{Parser, Subcommand};
use ecoprompt_impact::ImpactEstimator;

pub mod estimate;
pub mod project;
pub mod prompt;

#[cfg(test)]
mod tests;

/// EcoPrompt CLI
#[derive(Parser, Debug)]
#[command(name = "ecoprompt")]
#[command(about = "Energy, water and CO₂ footprint of AI requests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the footprint of a batch of requests
    Estimate(estimate::EstimateArgs),
    /// Send a prompt to Gemini and project the energy of the call
    Prompt(prompt::PromptArgs),
    /// Project a known per-call energy value over daily usage
    Project(project::ProjectArgs),
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config()?;
    let estimator = build_estimator(&config)?;

    match command {
        Commands::Estimate(args) => estimate::run(args, &estimator),
        Commands::Prompt(args) => prompt::run(args, &config, &estimator).await,
        Commands::Project(args) => project::run(args, &config, &estimator),
    }
}

/// Build the estimator from the configured calibration
pub fn build_estimator(config: &AppConfig) -> anyhow::Result<ImpactEstimator> {
    ImpactEstimator::new(config.calibration.clone()).context("Invalid calibration in configuration")
}

/// Print a serializable value as pretty JSON
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}
