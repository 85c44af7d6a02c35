//! Deterministic numeric helpers shared by the analysis modules.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Divide two floats and guard division by zero. Unrounded.
#[must_use]
pub fn safe_div(numer: f64, denom: f64) -> f64 {
    if denom == 0.0 { 0.0 } else { numer / denom }
}

/// Return a ratio rounded to `decimals` places; zero denominator yields `0.0`.
#[must_use]
pub fn ratio(numer: usize, denom: usize, decimals: u32) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64, decimals)
    }
}

/// Return `part / whole * 100` rounded to `decimals` places.
#[must_use]
pub fn percent(part: usize, whole: usize, decimals: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_f64(part as f64 / whole as f64 * 100.0, decimals)
    }
}

/// Arithmetic mean; empty input yields `0.0`.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
