//! HealthCalc WASM Module
//!
//! This crate provides WebAssembly bindings so the calculator can run in
//! the browser with the same validation as native callers.

use healthcalc_core::HealthError;
use wasm_bindgen::prelude::*;

fn to_js_error(err: HealthError) -> JsError {
    JsError::new(&err.to_string())
}

/// Calculate BMI from weight (kg) and height (m)
#[wasm_bindgen(js_name = computeBodyMassIndex)]
pub fn compute_body_mass_index(weight_kg: f64, height_m: f64) -> Result<f64, JsError> {
    healthcalc_core::compute_body_mass_index(weight_kg, height_m).map_err(to_js_error)
}

/// Classify a BMI value, returning the category label
#[wasm_bindgen(js_name = classifyBMI)]
pub fn classify_bmi(bmi: f64) -> Result<String, JsError> {
    healthcalc_core::classify_bmi(bmi)
        .map(|category| category.label().to_string())
        .map_err(to_js_error)
}

/// Healthy weight range in kg for a height, as `[min, max]`
#[wasm_bindgen(js_name = healthyWeightRangeKg)]
pub fn healthy_weight_range_kg(height_m: f64) -> Result<Vec<f64>, JsError> {
    healthcalc_core::healthy_weight_range_kg(height_m)
        .map(|(min, max)| vec![min, max])
        .map_err(to_js_error)
}
