//! Input validation functions
//!
//! Every check returns [`HealthError::InvalidHealthData`] naming the field and
//! the bound it violated. Rejections are logged at debug level.

use crate::errors::{HealthError, Result};
use crate::limits::{BmiLimits, HeightLimits, WeightLimits};

fn reject(field: &'static str, value: f64, message: String) -> HealthError {
    tracing::debug!(field, value, reason = %message, "Rejected health input");
    HealthError::invalid(message)
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64, limits: &WeightLimits) -> Result<()> {
    if !weight_kg.is_finite() {
        return Err(reject(
            "weight",
            weight_kg,
            "Weight must be a valid number".to_string(),
        ));
    }
    if weight_kg <= 0.0 {
        return Err(reject(
            "weight",
            weight_kg,
            "Weight must be greater than 0 kg".to_string(),
        ));
    }
    if weight_kg < limits.min_kg {
        return Err(reject(
            "weight",
            weight_kg,
            format!("Weight must be at least {} kg", limits.min_kg),
        ));
    }
    if weight_kg > limits.max_kg {
        return Err(reject(
            "weight",
            weight_kg,
            format!("Weight must be at most {} kg", limits.max_kg),
        ));
    }
    Ok(())
}

/// Validate height value (in meters)
pub fn validate_height_m(height_m: f64, limits: &HeightLimits) -> Result<()> {
    if !height_m.is_finite() {
        return Err(reject(
            "height",
            height_m,
            "Height must be a valid number".to_string(),
        ));
    }
    if height_m <= 0.0 {
        return Err(reject(
            "height",
            height_m,
            "Height must be greater than 0 m".to_string(),
        ));
    }
    if height_m < limits.min_m {
        return Err(reject(
            "height",
            height_m,
            format!("Height must be at least {} m", limits.min_m),
        ));
    }
    if height_m > limits.max_m {
        return Err(reject(
            "height",
            height_m,
            format!("Height must be at most {} m", limits.max_m),
        ));
    }
    Ok(())
}

/// Validate a BMI value before classification
pub fn validate_bmi(bmi: f64, limits: &BmiLimits) -> Result<()> {
    if !bmi.is_finite() {
        return Err(reject("bmi", bmi, "BMI must be a valid number".to_string()));
    }
    if bmi <= 0.0 {
        return Err(reject("bmi", bmi, "BMI must be greater than 0".to_string()));
    }
    if bmi > limits.max {
        return Err(reject(
            "bmi",
            bmi,
            format!("BMI must be at most {}", limits.max),
        ));
    }
    Ok(())
}
