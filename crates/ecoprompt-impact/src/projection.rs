//! Projections
//!
//! Scaling a single estimate over time: per-prompts-per-day projections for a
//! measured call, and daily/monthly/yearly projections plus everyday
//! comparisons for a manual estimate.

use crate::calibration::{Calibration, ComparisonBaselines};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Prompts-per-day multipliers projected for a measured call by default
pub const DEFAULT_PROMPTS_PER_DAY: [u32; 2] = [10, 50];

/// Energy, CO₂ and water of some amount of usage
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Footprint {
    /// Energy (kWh)
    pub energy_kwh: f64,
    /// CO₂ emissions (kg)
    pub co2_kg: f64,
    /// Water (L)
    pub water_l: f64,
}

impl Mul<f64> for Footprint {
    type Output = Footprint;

    fn mul(self, factor: f64) -> Footprint {
        Footprint {
            energy_kwh: self.energy_kwh * factor,
            co2_kg: self.co2_kg * factor,
            water_l: self.water_l * factor,
        }
    }
}

/// Manual-mode footprint repeated daily over a month and a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodProjection {
    /// One day at the same rate
    pub daily: Footprint,
    /// `days_per_month` days
    pub monthly: Footprint,
    /// `days_per_year` days
    pub yearly: Footprint,
}

impl PeriodProjection {
    /// Treat `daily` as one day's usage
    #[must_use]
    pub fn from_daily(daily: Footprint, calibration: &Calibration) -> Self {
        Self {
            daily,
            monthly: daily * calibration.days_per_month,
            yearly: daily * calibration.days_per_year,
        }
    }
}

/// Yearly footprint expressed in everyday quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealWorldComparison {
    /// Share of an average home's yearly electricity (%)
    pub home_energy_pct: f64,
    /// Trees needed to absorb the yearly CO₂
    pub trees_to_offset: f64,
    /// People whose yearly drinking water equals the yearly water use
    pub drinking_water_people: f64,
}

impl RealWorldComparison {
    /// Compare a yearly footprint with the baselines
    #[must_use]
    pub fn from_yearly(yearly: &Footprint, baselines: &ComparisonBaselines) -> Self {
        Self {
            home_energy_pct: yearly.energy_kwh / baselines.home_energy_kwh_per_year * 100.0,
            trees_to_offset: yearly.co2_kg / baselines.tree_co2_kg_per_year,
            drinking_water_people: yearly.water_l / baselines.drinking_water_l_per_year,
        }
    }
}

/// One measured call repeated `prompts_per_day` times a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageProjection {
    /// Prompts per day
    pub prompts_per_day: u32,
    /// Daily energy (kWh)
    pub daily_energy_kwh: f64,
    /// Daily water (L)
    pub daily_water_l: f64,
    /// Yearly energy (kWh)
    pub yearly_energy_kwh: f64,
    /// Yearly water (L)
    pub yearly_water_l: f64,
}

/// Measurement-mode output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Energy of the measured call (kWh)
    pub energy_kwh: f64,
    /// Water of the measured call (L)
    pub water_l: f64,
    /// One entry per requested prompts-per-day multiplier
    pub projections: Vec<UsageProjection>,
}

impl ProjectionResult {
    /// Projection for a given prompts-per-day multiplier, if it was computed
    #[must_use]
    pub fn for_rate(&self, prompts_per_day: u32) -> Option<&UsageProjection> {
        self.projections
            .iter()
            .find(|p| p.prompts_per_day == prompts_per_day)
    }
}
