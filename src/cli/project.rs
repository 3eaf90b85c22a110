//! CLI command: `ecoprompt project`
//!
//! Measurement mode from a known per-call energy value, without any API call.

use crate::settings::AppConfig;
use anyhow::Context;
use clap::{value_parser, Args};
use ecoprompt_impact::{format_projection, ImpactEstimator, MeasuredCall};

/// Arguments for `ecoprompt project`
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Energy of one call (kWh)
    #[arg(long)]
    pub energy_kwh: f64,

    /// Prompts per day to project (repeatable; defaults to configuration)
    #[arg(long = "per-day", value_parser = value_parser!(u32).range(1..))]
    pub per_day: Vec<u32>,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ProjectArgs {
    /// Rates from the arguments, falling back to the configured ones
    #[must_use]
    pub fn rates<'a>(&'a self, config: &'a AppConfig) -> &'a [u32] {
        if self.per_day.is_empty() {
            &config.projection.prompts_per_day
        } else {
            &self.per_day
        }
    }
}

/// Run the project subcommand.
pub fn run(
    args: ProjectArgs,
    config: &AppConfig,
    estimator: &ImpactEstimator,
) -> anyhow::Result<()> {
    let call = MeasuredCall::new(args.energy_kwh);
    let projection = estimator
        .estimate_from_measurement(&call, args.rates(config))
        .context("Failed to project energy")?;

    if args.json {
        super::print_json(&projection)
    } else {
        print!("{}", format_projection(&projection));
        Ok(())
    }
}
