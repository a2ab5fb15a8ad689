//! Residuals and outlier scores.

use faer::Col;

/// Residuals: `y - fitted`.
pub fn residuals(y: &Col<f64>, fitted: &Col<f64>) -> Col<f64> {
    Col::from_fn(y.nrows(), |i| y[i] - fitted[i])
}

/// Outlier score per record: the absolute residual.
pub fn outlier_scores(residuals: &Col<f64>) -> Col<f64> {
    Col::from_fn(residuals.nrows(), |i| residuals[i].abs())
}
