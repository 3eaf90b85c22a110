//! Calibration - constants of the impact model
//!
//! Every factor the estimator multiplies by lives here. A `Calibration` is
//! immutable once handed to an [`ImpactEstimator`](crate::ImpactEstimator), so
//! alternate tables can be swapped in without touching the algorithm.

use crate::error::{Error, Result};
use crate::params::{ModelClass, RequestType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Small model base energy per request (kWh)
pub const SMALL_BASE_ENERGY_KWH: f64 = 0.0001;
/// Medium model base energy per request (kWh)
pub const MEDIUM_BASE_ENERGY_KWH: f64 = 0.0005;
/// Large model base energy per request (kWh)
pub const LARGE_BASE_ENERGY_KWH: f64 = 0.002;
/// Multimodal model base energy per request (kWh)
pub const MULTIMODAL_BASE_ENERGY_KWH: f64 = 0.005;

/// Text request multiplier
pub const TEXT_MULTIPLIER: f64 = 1.0;
/// Image request multiplier
pub const IMAGE_MULTIPLIER: f64 = 3.0;
/// Video request multiplier
pub const VIDEO_MULTIPLIER: f64 = 10.0;

/// Token count at which the token factor is 1.0
pub const REFERENCE_TOKENS: f64 = 500.0;
/// Inference time (ms) at which the time factor is 1.0
pub const REFERENCE_INFERENCE_MS: f64 = 100.0;

/// Power usage effectiveness (data center overhead)
pub const PUE: f64 = 1.2;
/// Grid carbon intensity (kg CO₂ per kWh, US average)
pub const GRID_CARBON_INTENSITY: f64 = 0.5;
/// Water usage effectiveness (liters per kWh)
pub const WUE: f64 = 1.8;

/// Energy that maps to a score of 100 (kWh)
pub const ENERGY_SCORE_BASELINE_KWH: f64 = 10.0;
/// CO₂ that maps to a score of 100 (kg)
pub const CO2_SCORE_BASELINE_KG: f64 = 5.0;
/// Water that maps to a score of 100 (L)
pub const WATER_SCORE_BASELINE_L: f64 = 50.0;

/// Yearly electricity use of an average home (kWh)
pub const HOME_ENERGY_KWH_PER_YEAR: f64 = 10_000.0;
/// CO₂ absorbed by one tree per year (kg)
pub const TREE_CO2_KG_PER_YEAR: f64 = 21.0;
/// Drinking water consumed by one person per year (L)
pub const DRINKING_WATER_L_PER_YEAR: f64 = 730.0;

/// Days in a projected month
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Days in a projected year
pub const DAYS_PER_YEAR: f64 = 365.0;

// ============================================================================
// Tables
// ============================================================================

/// Base energy per request for each model class (kWh)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseEnergy {
    /// Small models
    pub small: f64,
    /// Medium models
    pub medium: f64,
    /// Large models
    pub large: f64,
    /// Multimodal models
    pub multimodal: f64,
}

impl Default for BaseEnergy {
    fn default() -> Self {
        Self {
            small: SMALL_BASE_ENERGY_KWH,
            medium: MEDIUM_BASE_ENERGY_KWH,
            large: LARGE_BASE_ENERGY_KWH,
            multimodal: MULTIMODAL_BASE_ENERGY_KWH,
        }
    }
}

/// Energy multiplier for each request type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMultiplier {
    /// Text generation
    pub text: f64,
    /// Image generation
    pub image: f64,
    /// Video generation
    pub video: f64,
}

impl Default for TypeMultiplier {
    fn default() -> Self {
        Self {
            text: TEXT_MULTIPLIER,
            image: IMAGE_MULTIPLIER,
            video: VIDEO_MULTIPLIER,
        }
    }
}

/// Values that map to a sub-score of 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBaselines {
    /// Energy baseline (kWh)
    pub energy_kwh: f64,
    /// CO₂ baseline (kg)
    pub co2_kg: f64,
    /// Water baseline (L)
    pub water_l: f64,
}

impl Default for ScoreBaselines {
    fn default() -> Self {
        Self {
            energy_kwh: ENERGY_SCORE_BASELINE_KWH,
            co2_kg: CO2_SCORE_BASELINE_KG,
            water_l: WATER_SCORE_BASELINE_L,
        }
    }
}

/// Weight of each sub-score in the impact score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Energy weight
    pub energy: f64,
    /// CO₂ weight
    pub co2: f64,
    /// Water weight
    pub water: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            energy: 0.4,
            co2: 0.4,
            water: 0.2,
        }
    }
}

/// Everyday quantities used for yearly comparisons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonBaselines {
    /// Household electricity per year (kWh)
    pub home_energy_kwh_per_year: f64,
    /// CO₂ absorbed per tree per year (kg)
    pub tree_co2_kg_per_year: f64,
    /// Drinking water per person per year (L)
    pub drinking_water_l_per_year: f64,
}

impl Default for ComparisonBaselines {
    fn default() -> Self {
        Self {
            home_energy_kwh_per_year: HOME_ENERGY_KWH_PER_YEAR,
            tree_co2_kg_per_year: TREE_CO2_KG_PER_YEAR,
            drinking_water_l_per_year: DRINKING_WATER_L_PER_YEAR,
        }
    }
}

// ============================================================================
// Calibration
// ============================================================================

/// Full calibration table of the impact model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Base energy per model class
    pub base_energy_kwh: BaseEnergy,
    /// Request type multipliers
    pub type_multiplier: TypeMultiplier,
    /// Token normalization reference
    pub reference_tokens: f64,
    /// Inference time normalization reference (ms)
    pub reference_inference_ms: f64,
    /// Power usage effectiveness
    pub pue: f64,
    /// kg CO₂ per kWh
    pub grid_carbon_intensity: f64,
    /// Liters of water per kWh
    pub wue: f64,
    /// Score baselines
    pub baselines: ScoreBaselines,
    /// Score weights
    pub weights: ScoreWeights,
    /// Comparison baselines
    pub comparisons: ComparisonBaselines,
    /// Days per projected month
    pub days_per_month: f64,
    /// Days per projected year
    pub days_per_year: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            base_energy_kwh: BaseEnergy::default(),
            type_multiplier: TypeMultiplier::default(),
            reference_tokens: REFERENCE_TOKENS,
            reference_inference_ms: REFERENCE_INFERENCE_MS,
            pue: PUE,
            grid_carbon_intensity: GRID_CARBON_INTENSITY,
            wue: WUE,
            baselines: ScoreBaselines::default(),
            weights: ScoreWeights::default(),
            comparisons: ComparisonBaselines::default(),
            days_per_month: DAYS_PER_MONTH,
            days_per_year: DAYS_PER_YEAR,
        }
    }
}

impl Calibration {
    /// Base energy per request for a model class (kWh)
    #[must_use]
    pub fn base_energy(&self, class: ModelClass) -> f64 {
        match class {
            ModelClass::Small => self.base_energy_kwh.small,
            ModelClass::Medium => self.base_energy_kwh.medium,
            ModelClass::Large => self.base_energy_kwh.large,
            ModelClass::Multimodal => self.base_energy_kwh.multimodal,
        }
    }

    /// Energy multiplier for a request type
    #[must_use]
    pub fn type_multiplier(&self, request_type: RequestType) -> f64 {
        match request_type {
            RequestType::Text => self.type_multiplier.text,
            RequestType::Image => self.type_multiplier.image,
            RequestType::Video => self.type_multiplier.video,
        }
    }

    /// Check that every factor keeps results finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("base_energy_kwh.small", self.base_energy_kwh.small),
            ("base_energy_kwh.medium", self.base_energy_kwh.medium),
            ("base_energy_kwh.large", self.base_energy_kwh.large),
            ("base_energy_kwh.multimodal", self.base_energy_kwh.multimodal),
            ("type_multiplier.text", self.type_multiplier.text),
            ("type_multiplier.image", self.type_multiplier.image),
            ("type_multiplier.video", self.type_multiplier.video),
            ("grid_carbon_intensity", self.grid_carbon_intensity),
            ("wue", self.wue),
            ("weights.energy", self.weights.energy),
            ("weights.co2", self.weights.co2),
            ("weights.water", self.weights.water),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(field, format!("must be >= 0, got {value}")));
            }
        }

        // Divisors
        let positive = [
            ("reference_tokens", self.reference_tokens),
            ("reference_inference_ms", self.reference_inference_ms),
            ("pue", self.pue),
            ("baselines.energy_kwh", self.baselines.energy_kwh),
            ("baselines.co2_kg", self.baselines.co2_kg),
            ("baselines.water_l", self.baselines.water_l),
            (
                "comparisons.home_energy_kwh_per_year",
                self.comparisons.home_energy_kwh_per_year,
            ),
            (
                "comparisons.tree_co2_kg_per_year",
                self.comparisons.tree_co2_kg_per_year,
            ),
            (
                "comparisons.drinking_water_l_per_year",
                self.comparisons.drinking_water_l_per_year,
            ),
            ("days_per_month", self.days_per_month),
            ("days_per_year", self.days_per_year),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        Ok(())
    }
}
