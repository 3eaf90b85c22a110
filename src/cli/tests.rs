//! Tests for CLI argument parsing

use super::*;
use crate::settings::AppConfig;
use clap::Parser;
use ecoprompt_impact::{ModelClass, Rating, RequestType};

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("ecoprompt").chain(args.iter().copied()))
}

#[test]
fn test_no_subcommand() {
    let cli = parse(&[]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_estimate_defaults() {
    let cli = parse(&["estimate"]).unwrap();
    let Some(Commands::Estimate(args)) = cli.command else {
        panic!("expected estimate");
    };

    let params = args.parameters();
    assert_eq!(params.num_requests, 100);
    assert_eq!(params.model_class, ModelClass::Medium);
    assert_eq!(params.request_type, RequestType::Text);
    assert_eq!(params.token_count, 500);
    assert_eq!(params.inference_time_ms, 100);
    assert!(!args.json);
}

#[test]
fn test_estimate_full_arguments() {
    let cli = parse(&[
        "estimate",
        "--requests",
        "1000000",
        "--request-type",
        "Video",
        "--model-class",
        "large",
        "--tokens",
        "1000",
        "--inference-ms",
        "250",
        "--json",
    ])
    .unwrap();
    let Some(Commands::Estimate(args)) = cli.command else {
        panic!("expected estimate");
    };

    assert_eq!(args.requests, 1_000_000);
    assert_eq!(args.request_type, RequestType::Video);
    assert_eq!(args.model_class, ModelClass::Large);
    assert!(args.json);

    let estimator = build_estimator(&AppConfig::default()).unwrap();
    let result = estimator.estimate_from_parameters(&args.parameters()).unwrap();
    assert_eq!(result.impact_score, 100.0);
    assert_eq!(result.rating, Rating::E);
}

#[test]
fn test_estimate_bounds() {
    assert!(parse(&["estimate", "--requests", "0"]).is_err());
    assert!(parse(&["estimate", "--requests", "1000001"]).is_err());
    assert!(parse(&["estimate", "--tokens", "9"]).is_err());
    assert!(parse(&["estimate", "--tokens", "100001"]).is_err());
    assert!(parse(&["estimate", "--inference-ms", "0"]).is_err());
    assert!(parse(&["estimate", "--inference-ms", "10001"]).is_err());
    assert!(parse(&["estimate", "--tokens", "10", "--inference-ms", "10000"]).is_ok());
}

#[test]
fn test_estimate_rejects_unknown_enums() {
    assert!(parse(&["estimate", "--model-class", "huge"]).is_err());
    assert!(parse(&["estimate", "--request-type", "audio"]).is_err());
}

#[test]
fn test_prompt_arguments() {
    let cli = parse(&["prompt", "Hello there", "--model", "gemini-2.5-flash"]).unwrap();
    let Some(Commands::Prompt(args)) = cli.command else {
        panic!("expected prompt");
    };
    assert_eq!(args.text.as_deref(), Some("Hello there"));
    assert_eq!(args.model.as_deref(), Some("gemini-2.5-flash"));

    let cli = parse(&["prompt"]).unwrap();
    let Some(Commands::Prompt(args)) = cli.command else {
        panic!("expected prompt");
    };
    assert!(args.text.is_none());
    assert!(args.model.is_none());
}

#[test]
fn test_project_rates() {
    let config = AppConfig::default();

    let cli = parse(&["project", "--energy-kwh", "0.00002"]).unwrap();
    let Some(Commands::Project(args)) = cli.command else {
        panic!("expected project");
    };
    assert_eq!(args.rates(&config), &[10, 50]);

    let cli = parse(&[
        "project",
        "--energy-kwh",
        "0.00002",
        "--per-day",
        "5",
        "--per-day",
        "100",
    ])
    .unwrap();
    let Some(Commands::Project(args)) = cli.command else {
        panic!("expected project");
    };
    assert_eq!(args.rates(&config), &[5, 100]);

    assert!(parse(&["project", "--energy-kwh", "0.1", "--per-day", "0"]).is_err());
    assert!(parse(&["project"]).is_err());
}

#[test]
fn test_invalid_calibration_rejected() {
    let mut config = AppConfig::default();
    config.calibration.reference_tokens = 0.0;
    assert!(build_estimator(&config).is_err());
}
