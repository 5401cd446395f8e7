//! Simple descriptive statistics over `f64` slices.
//!
//! Empty-input behavior follows the source conventions: `mean` of nothing
//! is NaN, `max`/`min` of nothing are the infinities.

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &v| acc.min(v))
}

/// Difference between the largest and smallest value.
pub fn range(values: &[f64]) -> f64 {
    max(values) - min(values)
}

/// Population variance.
pub fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

pub fn standard_deviation(values: &[f64]) -> f64 {
    variance(values).sqrt()
}
