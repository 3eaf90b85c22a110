//! Impact score and rating
//!
//! Each footprint component is normalized against its baseline onto a 0–100
//! scale, then combined as a weighted sum. The sum is already on the 0–100
//! scale and is not multiplied again.

use crate::calibration::{ScoreBaselines, ScoreWeights};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper end of the score scale
pub const MAX_SCORE: f64 = 100.0;

/// Normalize a value against the baseline that maps to 100, capped at 100
#[must_use]
pub fn score(value: f64, baseline: f64) -> f64 {
    (value / baseline * MAX_SCORE).min(MAX_SCORE)
}

/// Clamped sub-scores of an estimate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Energy sub-score (0–100)
    pub energy: f64,
    /// CO₂ sub-score (0–100)
    pub co2: f64,
    /// Water sub-score (0–100)
    pub water: f64,
}

impl ScoreBreakdown {
    /// Score a footprint against the baselines
    #[must_use]
    pub fn new(energy_kwh: f64, co2_kg: f64, water_l: f64, baselines: &ScoreBaselines) -> Self {
        Self {
            energy: score(energy_kwh, baselines.energy_kwh),
            co2: score(co2_kg, baselines.co2_kg),
            water: score(water_l, baselines.water_l),
        }
    }

    /// Weighted impact score, clamped into [0, 100]
    #[must_use]
    pub fn weighted(&self, weights: &ScoreWeights) -> f64 {
        let total =
            self.energy * weights.energy + self.co2 * weights.co2 + self.water * weights.water;
        total.clamp(0.0, MAX_SCORE)
    }
}

/// Letter rating of an impact score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// Score ≤ 20
    A,
    /// 20 < score ≤ 40
    B,
    /// 40 < score ≤ 60
    C,
    /// 60 < score ≤ 80
    D,
    /// Score > 80
    E,
}

impl Rating {
    /// Rate a score. Each band includes its upper bound.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= 20.0 {
            Self::A
        } else if score <= 40.0 {
            Self::B
        } else if score <= 60.0 {
            Self::C
        } else if score <= 80.0 {
            Self::D
        } else {
            Self::E
        }
    }

    /// Bare letter
    #[must_use]
    pub fn letter(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Display label, with a qualifier on the extreme bands
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A (Low Impact)",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E (Very High Impact)",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
