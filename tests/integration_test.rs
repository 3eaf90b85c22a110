//! Integration tests for EcoPrompt
//!
//! These tests verify the integration between the workspace crates:
//! - ecoprompt-impact: manual and measurement estimation
//! - ecoprompt-llm: provider calls and per-call energy

use ecoprompt_impact::{
    format_impact, format_projection, Calibration, ImpactEstimator, ImpactReport, MeasuredCall,
    ModelClass, Rating, RequestParameters, RequestType,
};
use ecoprompt_llm::{
    measure_prompt, CompletionResponse, EnergyProfile, EnergyTable, MockProvider, TokenUsage,
};

const EPS: f64 = 1e-9;

// ============================================================================
// Manual Mode
// ============================================================================

#[test]
fn test_reference_scenario_report() {
    let estimator = ImpactEstimator::default();
    let params = RequestParameters::default();
    let result = estimator.estimate_from_parameters(&params).unwrap();

    assert!((result.total_energy_kwh - 0.06).abs() < EPS);
    assert!((result.total_co2_kg - 0.03).abs() < EPS);
    assert!((result.total_water_l - 0.108).abs() < EPS);
    assert_eq!(result.rating, Rating::A);

    let report = ImpactReport::new(&estimator, params, result);
    let text = format_impact(&report);
    assert!(text.contains("• Energy: 0.0600 kWh"));
    assert!(text.contains("• Rating: A (Low Impact)"));
    assert!(text.contains("• Total Requests: 100"));
}

#[test]
fn test_worst_case_saturates() {
    let estimator = ImpactEstimator::default();
    let params = RequestParameters::new(ModelClass::Large, RequestType::Video)
        .with_num_requests(1_000_000);
    let result = estimator.estimate_from_parameters(&params).unwrap();

    assert_eq!(result.impact_score, 100.0);
    assert_eq!(result.rating.to_string(), "E (Very High Impact)");
}

#[test]
fn test_report_json_shape() {
    let estimator = ImpactEstimator::default();
    let params = RequestParameters::default();
    let result = estimator.estimate_from_parameters(&params).unwrap();
    let report = ImpactReport::new(&estimator, params, result);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["parameters"]["model_class"], "medium");
    assert_eq!(json["result"]["rating"], "A");
    assert!(json["periods"]["yearly"]["energy_kwh"].as_f64().unwrap() > 21.8);
    assert!(json["comparison"]["trees_to_offset"].is_number());
}

// ============================================================================
// Measurement Mode
// ============================================================================

#[tokio::test]
async fn test_mock_prompt_feeds_projection() {
    let provider = MockProvider::new();
    provider.add_response(CompletionResponse {
        content: "Short answer".to_string(),
        usage: Some(TokenUsage::new(0, 95)),
        finish_reason: Some("STOP".to_string()),
        model: "gemini-2.5-flash".to_string(),
    });
    let table = EnergyTable::default();

    let measured = measure_prompt(&provider, &table, "Explain PUE", Some("gemini-2.5-flash"))
        .await
        .unwrap();

    // 1e-6 overhead + 95/1000 * 2e-4
    assert!((measured.call.energy_kwh - 0.00002).abs() < EPS);
    assert!(!measured.usage_estimated);
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(provider.requests()[0].model, "gemini-2.5-flash");

    let projection = ImpactEstimator::default()
        .estimate_from_measurement(&measured.call, &[10, 50])
        .unwrap();
    let ten = projection.for_rate(10).unwrap();
    assert!((ten.daily_energy_kwh - 0.0002).abs() < EPS);
    assert!((ten.yearly_energy_kwh - 0.073).abs() < EPS);
    assert!((ten.yearly_water_l - 0.1314).abs() < EPS);

    let text = format_projection(&projection);
    assert!(text.contains("Yearly (10/day): 0.07 kWh | 0.13 Liters"));
}

#[test]
fn test_unknown_model_uses_fallback_profile() {
    let provider = MockProvider::new();
    let table = EnergyTable::default();

    let measured = tokio_test::block_on(measure_prompt(&provider, &table, "hi", None)).unwrap();
    let expected = EnergyProfile::fallback().estimate(&TokenUsage::new(10, 100));

    assert_eq!(measured.model, "mock-model");
    assert!((measured.call.energy_kwh - expected.energy_kwh).abs() < EPS);
}

#[test]
fn test_custom_calibration_changes_water_only() {
    let calibration = Calibration {
        wue: 3.0,
        ..Calibration::default()
    };
    let estimator = ImpactEstimator::new(calibration).unwrap();
    let projection = estimator
        .estimate_from_measurement(&MeasuredCall::new(0.001), &[1])
        .unwrap();

    assert!((projection.energy_kwh - 0.001).abs() < EPS);
    assert!((projection.water_l - 0.003).abs() < EPS);
}
