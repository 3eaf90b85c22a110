//! Impact Reporting
//!
//! Text rendering of estimates for terminal output.

use crate::estimator::{ImpactEstimator, ImpactResult};
use crate::params::RequestParameters;
use crate::projection::{Footprint, PeriodProjection, ProjectionResult, RealWorldComparison};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Legend explaining the rating bands
pub const RATING_LEGEND: &str =
    "A: Bottom 20% (Highly efficient) · B: 20–40% · C: 40–60% · D: 60–80% · E: Top 20% (Excessive)";

/// Everything shown for a manual estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Input parameters
    pub parameters: RequestParameters,
    /// Estimate
    pub result: ImpactResult,
    /// Daily, monthly and yearly totals
    pub periods: PeriodProjection,
    /// Yearly comparisons
    pub comparison: RealWorldComparison,
}

impl ImpactReport {
    /// Assemble a report from an estimate
    #[must_use]
    pub fn new(
        estimator: &ImpactEstimator,
        parameters: RequestParameters,
        result: ImpactResult,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            periods: estimator.project_periods(&result),
            comparison: estimator.compare(&result),
            parameters,
            result,
        }
    }
}

/// Format a manual estimate as text
#[must_use]
pub fn format_impact(report: &ImpactReport) -> String {
    let mut output = String::new();
    let params = &report.parameters;
    let result = &report.result;

    output.push_str("🌍 AI Environmental Impact\n");
    output.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "Parameters: {} requests · {} · {} model · {} tokens · {} ms\n",
        format_number_with_commas(params.num_requests),
        params.request_type,
        params.model_class,
        format_number_with_commas(u64::from(params.token_count)),
        params.inference_time_ms
    ));

    output.push_str("\n📊 Total Environmental Impact\n");
    output.push_str(&format_footprint(&result.footprint()));

    output.push_str("\n🏅 Impact Score\n");
    output.push_str(&format!(
        "• Impact Score (0–100): {:.1}\n",
        result.impact_score
    ));
    output.push_str(&format!("• Rating: {}\n", result.rating));
    output.push_str(&format!(
        "  (energy {:.1} · CO₂ {:.1} · water {:.1})\n",
        result.scores.energy, result.scores.co2, result.scores.water
    ));
    output.push_str(&format!("  {}\n", RATING_LEGEND));

    output.push_str("\n🔍 Per-Request Breakdown\n");
    output.push_str(&format!(
        "• Energy per Request: {:.6} kWh\n",
        result.energy_per_request_kwh
    ));
    output.push_str(&format!(
        "• Total Requests: {}\n",
        format_number_with_commas(result.num_requests)
    ));

    output.push_str("\n📈 Daily & Yearly Projections\n");
    output.push_str("Daily (same rate):\n");
    output.push_str(&format_footprint(&report.periods.daily));
    output.push_str("Monthly (30 days):\n");
    output.push_str(&format_period(&report.periods.monthly));
    output.push_str("Yearly (365 days):\n");
    output.push_str(&format_period(&report.periods.yearly));

    output.push_str("\n🌳 Real-World Comparisons (Yearly)\n");
    output.push_str(&format!(
        "• % of Home Energy Use: {:.2}%\n",
        report.comparison.home_energy_pct
    ));
    output.push_str(&format!(
        "• Trees Needed to Offset: {:.1}\n",
        report.comparison.trees_to_offset
    ));
    output.push_str(&format!(
        "• People's Annual Drinking Water: {:.2}\n",
        report.comparison.drinking_water_people
    ));

    output
}

/// Format a measured-call projection as text
#[must_use]
pub fn format_projection(result: &ProjectionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Energy: {} kWh\n", result.energy_kwh));
    output.push_str(&format!("Water: {} Liters\n", result.water_l));

    output.push_str("\n--- Environmental Impact Score ---\n");
    for p in &result.projections {
        output.push_str(&format!(
            "{:<16} {:.4} kWh | {:.2} Liters\n",
            format!("{} prompts/day:", p.prompts_per_day),
            p.daily_energy_kwh,
            p.daily_water_l
        ));
    }

    output.push('\n');
    for p in &result.projections {
        output.push_str(&format!(
            "Yearly ({}/day): {:.2} kWh | {:.2} Liters\n",
            p.prompts_per_day, p.yearly_energy_kwh, p.yearly_water_l
        ));
    }

    output
}

fn format_footprint(footprint: &Footprint) -> String {
    format!(
        "• Energy: {:.4} kWh\n• CO₂: {:.4} kg\n• Water: {:.2} L\n",
        footprint.energy_kwh, footprint.co2_kg, footprint.water_l
    )
}

fn format_period(footprint: &Footprint) -> String {
    format!(
        "• Energy: {:.2} kWh\n• CO₂: {:.2} kg\n• Water: {:.2} L\n",
        footprint.energy_kwh, footprint.co2_kg, footprint.water_l
    )
}

/// Format an integer with thousands separators
#[must_use]
pub fn format_number_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
