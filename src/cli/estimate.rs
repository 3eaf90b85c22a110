//! CLI command: `ecoprompt estimate`
//!
//! Manual mode. Bounds match the dashboard inputs; the estimator itself only
//! rejects zero values.

use anyhow::Context;
use clap::{value_parser, Args};
use ecoprompt_impact::{
    format_impact, ImpactEstimator, ImpactReport, ModelClass, RequestParameters, RequestType,
};
use tracing::info;

/// Arguments for `ecoprompt estimate`
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Number of requests
    #[arg(long, default_value_t = 100, value_parser = value_parser!(u64).range(1..=1_000_000))]
    pub requests: u64,

    /// Request type: text, image or video
    #[arg(long, default_value = "text")]
    pub request_type: RequestType,

    /// Model class: small, medium, large or multimodal
    #[arg(long, default_value = "medium")]
    pub model_class: ModelClass,

    /// Average tokens per request
    #[arg(long, default_value_t = 500, value_parser = value_parser!(u32).range(10..=100_000))]
    pub tokens: u32,

    /// Inference time per request (ms)
    #[arg(long, default_value_t = 100, value_parser = value_parser!(u32).range(1..=10_000))]
    pub inference_ms: u32,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    /// Request parameters described by the arguments
    #[must_use]
    pub fn parameters(&self) -> RequestParameters {
        RequestParameters::new(self.model_class, self.request_type)
            .with_token_count(self.tokens)
            .with_inference_time_ms(self.inference_ms)
            .with_num_requests(self.requests)
    }
}

/// Run the estimate subcommand.
pub fn run(args: EstimateArgs, estimator: &ImpactEstimator) -> anyhow::Result<()> {
    let params = args.parameters();
    let result = estimator
        .estimate_from_parameters(&params)
        .context("Failed to estimate impact")?;

    info!(
        impact_score = result.impact_score,
        rating = %result.rating.letter(),
        "Estimate complete"
    );

    let report = ImpactReport::new(estimator, params, result);
    if args.json {
        super::print_json(&report)
    } else {
        print!("{}", format_impact(&report));
        Ok(())
    }
}
