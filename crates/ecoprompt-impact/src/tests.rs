//! Tests for the impact model

use super::*;
use crate::report::format_number_with_commas;
use crate::score::score;

const EPS: f64 = 1e-9;

fn reference_params() -> RequestParameters {
    RequestParameters::new(ModelClass::Medium, RequestType::Text)
        .with_token_count(500)
        .with_inference_time_ms(100)
        .with_num_requests(100)
}

#[test]
fn test_reference_scenario() {
    let estimator = ImpactEstimator::default();
    let result = estimator
        .estimate_from_parameters(&reference_params())
        .unwrap();

    assert!((result.energy_per_request_kwh - 0.0005).abs() < EPS);
    assert!((result.total_energy_kwh - 0.06).abs() < EPS);
    assert!((result.total_co2_kg - 0.03).abs() < EPS);
    assert!((result.total_water_l - 0.108).abs() < EPS);
    assert_eq!(result.num_requests, 100);

    // 0.6 * 0.4 + 0.6 * 0.4 + 0.216 * 0.2
    assert!((result.impact_score - 0.5232).abs() < 1e-6);
    assert_eq!(result.rating, Rating::A);
}

#[test]
fn test_factors_scale_energy_per_request() {
    let estimator = ImpactEstimator::default();
    let params = RequestParameters::new(ModelClass::Large, RequestType::Image)
        .with_token_count(1000)
        .with_inference_time_ms(50)
        .with_num_requests(1);

    let result = estimator.estimate_from_parameters(&params).unwrap();

    // 0.002 * 3.0 * (1000 / 500) * (50 / 100)
    assert!((result.energy_per_request_kwh - 0.006).abs() < EPS);
    assert!((result.total_energy_kwh - 0.0072).abs() < EPS);
}

#[test]
fn test_score_clamps_at_maximum() {
    let estimator = ImpactEstimator::default();
    let params = RequestParameters::new(ModelClass::Large, RequestType::Video)
        .with_num_requests(1_000_000);

    let result = estimator.estimate_from_parameters(&params).unwrap();

    assert_eq!(result.scores.energy, 100.0);
    assert_eq!(result.scores.co2, 100.0);
    assert_eq!(result.scores.water, 100.0);
    assert_eq!(result.impact_score, 100.0);
    assert_eq!(result.rating, Rating::E);
    assert_eq!(result.rating.to_string(), "E (Very High Impact)");
}

#[test]
fn test_totals_non_negative_and_score_in_range() {
    let estimator = ImpactEstimator::default();

    for class in ModelClass::ALL {
        for request_type in RequestType::ALL {
            for requests in [1, 37, 10_000, 1_000_000] {
                let params = RequestParameters::new(class, request_type)
                    .with_token_count(10)
                    .with_inference_time_ms(10_000)
                    .with_num_requests(requests);
                let result = estimator.estimate_from_parameters(&params).unwrap();

                assert!(result.total_energy_kwh >= 0.0);
                assert!(result.total_co2_kg >= 0.0);
                assert!(result.total_water_l >= 0.0);
                assert!((0.0..=100.0).contains(&result.impact_score));
                assert_eq!(result.rating, Rating::from_score(result.impact_score));
            }
        }
    }
}

#[test]
fn test_doubling_requests_doubles_totals() {
    let estimator = ImpactEstimator::default();
    let single = estimator
        .estimate_from_parameters(&reference_params().with_num_requests(250))
        .unwrap();
    let double = estimator
        .estimate_from_parameters(&reference_params().with_num_requests(500))
        .unwrap();

    assert!((double.total_energy_kwh - 2.0 * single.total_energy_kwh).abs() < EPS);
    assert!((double.total_co2_kg - 2.0 * single.total_co2_kg).abs() < EPS);
    assert!((double.total_water_l - 2.0 * single.total_water_l).abs() < EPS);
    assert_eq!(single.energy_per_request_kwh, double.energy_per_request_kwh);
}

#[test]
fn test_zero_counts_rejected() {
    let estimator = ImpactEstimator::default();

    let err = estimator
        .estimate_from_parameters(&reference_params().with_token_count(0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(ref msg) if msg.contains("token_count")));

    let err = estimator
        .estimate_from_parameters(&reference_params().with_num_requests(0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(ref msg) if msg.contains("num_requests")));

    let err = estimator
        .estimate_from_parameters(&reference_params().with_inference_time_ms(0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn test_rating_boundaries() {
    assert_eq!(Rating::from_score(0.0), Rating::A);
    assert_eq!(Rating::from_score(20.0), Rating::A);
    assert_eq!(Rating::from_score(20.0001), Rating::B);
    assert_eq!(Rating::from_score(40.0), Rating::B);
    assert_eq!(Rating::from_score(40.0001), Rating::C);
    assert_eq!(Rating::from_score(60.0), Rating::C);
    assert_eq!(Rating::from_score(60.0001), Rating::D);
    assert_eq!(Rating::from_score(80.0), Rating::D);
    assert_eq!(Rating::from_score(80.0001), Rating::E);
    assert_eq!(Rating::from_score(100.0), Rating::E);

    assert_eq!(Rating::A.to_string(), "A (Low Impact)");
    assert_eq!(Rating::C.to_string(), "C");
    assert_eq!(Rating::D.letter(), 'D');
}

#[test]
fn test_sub_score_is_capped() {
    assert!((score(5.0, 10.0) - 50.0).abs() < EPS);
    assert_eq!(score(10.0, 10.0), 100.0);
    assert_eq!(score(1_000.0, 10.0), 100.0);
    assert_eq!(score(0.0, 10.0), 0.0);
}

#[test]
fn test_weighted_score_not_rescaled() {
    let breakdown = ScoreBreakdown {
        energy: 50.0,
        co2: 50.0,
        water: 50.0,
    };
    let weighted = breakdown.weighted(&calibration::ScoreWeights::default());
    assert!((weighted - 50.0).abs() < EPS);
}

#[test]
fn test_measurement_projection() {
    let estimator = ImpactEstimator::default();
    let result = estimator
        .estimate_from_measurement(&MeasuredCall::new(0.00002), &DEFAULT_PROMPTS_PER_DAY)
        .unwrap();

    assert!((result.water_l - 0.000036).abs() < EPS);
    assert_eq!(result.projections.len(), 2);

    let ten = result.for_rate(10).unwrap();
    assert!((ten.daily_energy_kwh - 0.0002).abs() < EPS);
    assert!((ten.daily_water_l - 0.00036).abs() < EPS);
    assert!((ten.yearly_energy_kwh - 0.073).abs() < EPS);
    assert!((ten.yearly_water_l - 0.1314).abs() < EPS);

    let fifty = result.for_rate(50).unwrap();
    assert!((fifty.daily_energy_kwh - 0.001).abs() < EPS);
    assert!((fifty.yearly_energy_kwh - 0.365).abs() < EPS);

    assert!(result.for_rate(7).is_none());
}

#[test]
fn test_measurement_rejects_invalid_input() {
    let estimator = ImpactEstimator::default();

    for energy in [-0.1, f64::NAN, f64::INFINITY] {
        let err = estimator
            .estimate_from_measurement(&MeasuredCall::new(energy), &DEFAULT_PROMPTS_PER_DAY)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    assert!(estimator
        .estimate_from_measurement(&MeasuredCall::new(0.001), &[10, 0])
        .is_err());

    let err = estimator
        .estimate_from_measurement(&MeasuredCall::new(0.001), &[])
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidParameter("prompts_per_day must not be empty".to_string())
    );

    // Zero energy is a valid measurement
    let zero = estimator
        .estimate_from_measurement(&MeasuredCall::new(0.0), &[10])
        .unwrap();
    assert_eq!(zero.projections[0].yearly_water_l, 0.0);
}

#[test]
fn test_period_projection_and_comparisons() {
    let estimator = ImpactEstimator::default();
    let result = estimator
        .estimate_from_parameters(&reference_params())
        .unwrap();

    let periods = estimator.project_periods(&result);
    assert!((periods.daily.energy_kwh - 0.06).abs() < EPS);
    assert!((periods.monthly.energy_kwh - 1.8).abs() < EPS);
    assert!((periods.yearly.energy_kwh - 21.9).abs() < EPS);
    assert!((periods.yearly.co2_kg - 10.95).abs() < EPS);

    let comparison = estimator.compare(&result);
    assert!((comparison.home_energy_pct - 0.219).abs() < EPS);
    assert!((comparison.trees_to_offset - 10.95 / 21.0).abs() < EPS);
    assert!((comparison.drinking_water_people - 0.054).abs() < EPS);
}

#[test]
fn test_custom_calibration_is_used() {
    let calibration = Calibration {
        pue: 2.0,
        wue: 0.0,
        ..Default::default()
    };
    let estimator = ImpactEstimator::new(calibration).unwrap();
    let result = estimator
        .estimate_from_parameters(&reference_params())
        .unwrap();

    assert!((result.total_energy_kwh - 0.1).abs() < EPS);
    assert_eq!(result.total_water_l, 0.0);
}

#[test]
fn test_invalid_calibration_rejected() {
    let zero_pue = Calibration {
        pue: 0.0,
        ..Default::default()
    };
    assert!(ImpactEstimator::new(zero_pue).is_err());

    let mut negative = Calibration::default();
    negative.base_energy_kwh.large = -1.0;
    let err = ImpactEstimator::new(negative).unwrap_err();
    assert!(err.to_string().contains("base_energy_kwh.large"));

    let mut zero_baseline = Calibration::default();
    zero_baseline.baselines.water_l = 0.0;
    assert!(zero_baseline.validate().is_err());

    assert!(Calibration::default().validate().is_ok());
}

#[test]
fn test_calibration_partial_deserialize() {
    let calibration: Calibration =
        serde_json::from_str(r#"{"pue": 1.5, "base_energy_kwh": {"small": 0.0002}}"#).unwrap();

    assert_eq!(calibration.pue, 1.5);
    assert_eq!(calibration.base_energy(ModelClass::Small), 0.0002);
    assert_eq!(calibration.base_energy(ModelClass::Large), 0.002);
    assert_eq!(calibration.wue, 1.8);
}

#[test]
fn test_enum_parsing() {
    assert_eq!("medium".parse::<ModelClass>().unwrap(), ModelClass::Medium);
    assert_eq!(" Multimodal ".parse::<ModelClass>().unwrap(), ModelClass::Multimodal);
    assert_eq!("VIDEO".parse::<RequestType>().unwrap(), RequestType::Video);

    let err = "huge".parse::<ModelClass>().unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(ref msg) if msg.contains("huge")));
    assert!("audio".parse::<RequestType>().is_err());
}

#[test]
fn test_result_serialization() {
    let estimator = ImpactEstimator::default();
    let result = estimator
        .estimate_from_parameters(&reference_params())
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["rating"], "A");
    assert_eq!(json["num_requests"], 100);
    assert!(json["scores"]["energy"].is_number());
}

#[test]
fn test_format_impact_report() {
    let estimator = ImpactEstimator::default();
    let params = reference_params().with_num_requests(12_500);
    let result = estimator.estimate_from_parameters(&params).unwrap();
    let report = ImpactReport::new(&estimator, params, result);

    let text = format_impact(&report);
    assert!(text.contains("Total Environmental Impact"));
    assert!(text.contains("12,500"));
    assert!(text.contains("Rating: "));
    assert!(text.contains("Energy per Request: 0.000500 kWh"));
    assert!(text.contains("Trees Needed to Offset"));
}

#[test]
fn test_format_projection() {
    let estimator = ImpactEstimator::default();
    let result = estimator
        .estimate_from_measurement(&MeasuredCall::new(0.00002), &DEFAULT_PROMPTS_PER_DAY)
        .unwrap();

    let text = format_projection(&result);
    assert!(text.contains("10 prompts/day:"));
    assert!(text.contains("50 prompts/day:"));
    assert!(text.contains("0.0002 kWh"));
    assert!(text.contains("Yearly (10/day): 0.07 kWh | 0.13 Liters"));
}

#[test]
fn test_number_formatting() {
    assert_eq!(format_number_with_commas(0), "0");
    assert_eq!(format_number_with_commas(999), "999");
    assert_eq!(format_number_with_commas(1_000), "1,000");
    assert_eq!(format_number_with_commas(1_000_000), "1,000,000");
}
