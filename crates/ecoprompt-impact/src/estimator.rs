//! Impact Estimator
//!
//! The two estimation pipelines. Manual mode turns a parameter set into a
//! scored and rated footprint; measurement mode projects one measured call
//! over a number of prompts per day. They share only the water derivation.

use crate::calibration::Calibration;
use crate::error::{Error, Result};
use crate::params::{MeasuredCall, RequestParameters};
use crate::projection::{
    Footprint, PeriodProjection, ProjectionResult, RealWorldComparison, UsageProjection,
};
use crate::score::{Rating, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Manual-mode output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Total energy including data center overhead (kWh)
    pub total_energy_kwh: f64,
    /// Total CO₂ emissions (kg)
    pub total_co2_kg: f64,
    /// Total cooling water (L)
    pub total_water_l: f64,
    /// Energy per request before overhead (kWh)
    pub energy_per_request_kwh: f64,
    /// Number of requests estimated
    pub num_requests: u64,
    /// Clamped sub-scores
    pub scores: ScoreBreakdown,
    /// Weighted impact score (0–100)
    pub impact_score: f64,
    /// Letter rating of `impact_score`
    pub rating: Rating,
}

impl ImpactResult {
    /// Totals as a footprint
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint {
            energy_kwh: self.total_energy_kwh,
            co2_kg: self.total_co2_kg,
            water_l: self.total_water_l,
        }
    }
}

/// Stateless estimator bound to one calibration table
#[derive(Debug, Clone, Default)]
pub struct ImpactEstimator {
    calibration: Calibration,
}

impl ImpactEstimator {
    /// Create an estimator, rejecting calibrations that would yield negative
    /// or undefined results
    pub fn new(calibration: Calibration) -> Result<Self> {
        calibration.validate()?;
        Ok(Self { calibration })
    }

    /// The calibration in use
    #[must_use]
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Estimate the footprint of a batch of requests
    pub fn estimate_from_parameters(&self, params: &RequestParameters) -> Result<ImpactResult> {
        params.validate()?;
        let cal = &self.calibration;

        let mut energy_per_request =
            cal.base_energy(params.model_class) * cal.type_multiplier(params.request_type);
        energy_per_request *= f64::from(params.token_count) / cal.reference_tokens;
        energy_per_request *= f64::from(params.inference_time_ms) / cal.reference_inference_ms;

        let total_energy = params.num_requests as f64 * energy_per_request * cal.pue;
        let total_co2 = total_energy * cal.grid_carbon_intensity;
        let total_water = total_energy * cal.wue;

        let scores = ScoreBreakdown::new(total_energy, total_co2, total_water, &cal.baselines);
        let impact_score = scores.weighted(&cal.weights);
        let rating = Rating::from_score(impact_score);

        debug!(
            model_class = %params.model_class,
            request_type = %params.request_type,
            num_requests = params.num_requests,
            total_energy,
            impact_score,
            "Estimated impact from parameters"
        );

        Ok(ImpactResult {
            total_energy_kwh: total_energy,
            total_co2_kg: total_co2,
            total_water_l: total_water,
            energy_per_request_kwh: energy_per_request,
            num_requests: params.num_requests,
            scores,
            impact_score,
            rating,
        })
    }

    /// Project one measured call over each prompts-per-day rate
    pub fn estimate_from_measurement(
        &self,
        call: &MeasuredCall,
        prompts_per_day: &[u32],
    ) -> Result<ProjectionResult> {
        call.validate()?;
        if prompts_per_day.is_empty() {
            return Err(Error::invalid("prompts_per_day", "must not be empty"));
        }
        if prompts_per_day.contains(&0) {
            return Err(Error::invalid("prompts_per_day", "must be at least 1"));
        }
        let cal = &self.calibration;
        let energy = call.energy_kwh;

        let projections = prompts_per_day
            .iter()
            .map(|&rate| {
                let daily_energy = energy * f64::from(rate);
                let yearly_energy = daily_energy * cal.days_per_year;
                UsageProjection {
                    prompts_per_day: rate,
                    daily_energy_kwh: daily_energy,
                    daily_water_l: daily_energy * cal.wue,
                    yearly_energy_kwh: yearly_energy,
                    yearly_water_l: yearly_energy * cal.wue,
                }
            })
            .collect();

        debug!(energy_kwh = energy, rates = ?prompts_per_day, "Projected measured call");

        Ok(ProjectionResult {
            energy_kwh: energy,
            water_l: energy * cal.wue,
            projections,
        })
    }

    /// Daily, monthly and yearly totals, treating the estimate as one day
    #[must_use]
    pub fn project_periods(&self, result: &ImpactResult) -> PeriodProjection {
        PeriodProjection::from_daily(result.footprint(), &self.calibration)
    }

    /// Yearly totals in everyday quantities
    #[must_use]
    pub fn compare(&self, result: &ImpactResult) -> RealWorldComparison {
        let periods = self.project_periods(result);
        RealWorldComparison::from_yearly(&periods.yearly, &self.calibration.comparisons)
    }
}
