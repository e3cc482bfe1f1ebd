//! Health metrics calculations module
//!
//! Provides BMI calculation, BMI classification and a combined assessment
//! with the healthy weight range for a given height.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Validate First**: Inputs are checked against [`HealthLimits`] before use
//! 3. **Metric Only**: Weight in kilograms, height in meters

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;
use crate::limits::HealthLimits;
use crate::validation::{validate_bmi, validate_height_m, validate_weight_kg};

// ============================================================================
// BMI Categories
// ============================================================================

/// Lower bound of the normal weight band
pub const NORMAL_BMI_MIN: f64 = 18.5;
/// Lower bound of the overweight band
pub const OVERWEIGHT_BMI_MIN: f64 = 25.0;
/// Lower bound of the obesity band
pub const OBESITY_BMI_MIN: f64 = 30.0;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obesity,
    ];

    /// Get the BMI band for this category as `[lower, upper)`
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, NORMAL_BMI_MIN),
            BmiCategory::NormalWeight => (NORMAL_BMI_MIN, OVERWEIGHT_BMI_MIN),
            BmiCategory::Overweight => (OVERWEIGHT_BMI_MIN, OBESITY_BMI_MIN),
            BmiCategory::Obesity => (OBESITY_BMI_MIN, f64::INFINITY),
        }
    }

    /// Get the category label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// Band lookup without range validation
    fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_BMI_MIN {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_BMI_MIN {
            BmiCategory::NormalWeight
        } else if bmi < OBESITY_BMI_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BmiCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BmiCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown BMI category: {}", s))
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// BMI assessment result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// BMI value
    pub value: f64,
    /// BMI category
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height
    pub healthy_weight_range_kg: (f64, f64),
    /// Distance from healthy range (negative = under, positive = over, 0 = in range)
    pub distance_from_healthy_kg: f64,
}

/// Health calculator operations
pub trait HealthCalc {
    /// Calculate BMI from weight (kg) and height (m)
    ///
    /// Formula: BMI = weight(kg) / height(m)²
    fn body_mass_index(&self, weight_kg: f64, height_m: f64) -> Result<f64>;

    /// Classify a BMI value into its category
    fn bmi_classification(&self, bmi: f64) -> Result<BmiCategory>;
}

/// Calculator validating against a set of [`HealthLimits`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HealthCalculator {
    limits: HealthLimits,
}

impl HealthCalculator {
    /// Create a calculator that validates against `limits`
    pub fn with_limits(limits: HealthLimits) -> Self {
        Self { limits }
    }

    /// Limits this calculator validates against
    pub fn limits(&self) -> &HealthLimits {
        &self.limits
    }

    /// Calculate healthy weight range for a given height
    ///
    /// Based on BMI 18.5-25 (normal range)
    pub fn healthy_weight_range_kg(&self, height_m: f64) -> Result<(f64, f64)> {
        validate_height_m(height_m, &self.limits.height)?;
        let height_m_sq = height_m * height_m;
        Ok((NORMAL_BMI_MIN * height_m_sq, OVERWEIGHT_BMI_MIN * height_m_sq))
    }

    /// Calculate complete BMI assessment
    ///
    /// Fails if either input is invalid or the resulting BMI cannot be
    /// classified (e.g. a heavy weight at a very small height).
    pub fn assess(&self, weight_kg: f64, height_m: f64) -> Result<BmiAssessment> {
        let value = self.body_mass_index(weight_kg, height_m)?;
        let category = self.bmi_classification(value)?;
        let healthy_range = self.healthy_weight_range_kg(height_m)?;

        let distance = if weight_kg < healthy_range.0 {
            weight_kg - healthy_range.0
        } else if weight_kg > healthy_range.1 {
            weight_kg - healthy_range.1
        } else {
            0.0
        };

        Ok(BmiAssessment {
            value,
            category,
            healthy_weight_range_kg: healthy_range,
            distance_from_healthy_kg: distance,
        })
    }
}

impl HealthCalc for HealthCalculator {
    fn body_mass_index(&self, weight_kg: f64, height_m: f64) -> Result<f64> {
        validate_weight_kg(weight_kg, &self.limits.weight)?;
        validate_height_m(height_m, &self.limits.height)?;

        let bmi = weight_kg / (height_m * height_m);
        tracing::trace!(weight_kg, height_m, bmi, "Computed BMI");
        Ok(bmi)
    }

    fn bmi_classification(&self, bmi: f64) -> Result<BmiCategory> {
        validate_bmi(bmi, &self.limits.bmi)?;

        let category = BmiCategory::from_bmi(bmi);
        tracing::trace!(bmi, %category, "Classified BMI");
        Ok(category)
    }
}

// ============================================================================
// Default-limit shortcuts
// ============================================================================

/// Calculate BMI with the standard limits
pub fn compute_body_mass_index(weight_kg: f64, height_m: f64) -> Result<f64> {
    HealthCalculator::default().body_mass_index(weight_kg, height_m)
}

/// Classify BMI with the standard limits
pub fn classify_bmi(bmi: f64) -> Result<BmiCategory> {
    HealthCalculator::default().bmi_classification(bmi)
}

/// Healthy weight range for a height, with the standard limits
pub fn healthy_weight_range_kg(height_m: f64) -> Result<(f64, f64)> {
    HealthCalculator::default().healthy_weight_range_kg(height_m)
}

/// Complete BMI assessment with the standard limits
pub fn assess(weight_kg: f64, height_m: f64) -> Result<BmiAssessment> {
    HealthCalculator::default().assess(weight_kg, height_m)
}

impl From<HealthLimits> for HealthCalculator {
    fn from(limits: HealthLimits) -> Self {
        Self::with_limits(limits)
    }
}
