//! HealthCalc Core Library
//!
//! Computes Body Mass Index from metric weight and height, validates inputs
//! against plausible ranges, and classifies BMI values into the four
//! standard categories.

pub mod errors;
pub mod health_metrics;
pub mod limits;
pub mod telemetry;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use limits::{BmiLimits, HealthLimits, HeightLimits, WeightLimits};
