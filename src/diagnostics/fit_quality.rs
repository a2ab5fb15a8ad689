//! Goodness-of-fit statistics.

use crate::core::FTest;
use faer::Col;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use thiserror::Error;

/// Errors raised by diagnostics that are undefined for some inputs.
#[derive(Debug, Error, PartialEq)]
pub enum DiagnosticsError {
    #[error(
        "adjusted R² is not computable with {n_observations} observations and {n_features} features (need n > p + 1)"
    )]
    AdjustedRSquaredUndefined {
        n_observations: usize,
        n_features: usize,
    },

    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("feature {index} out of range for {n_features} features")]
    FeatureOutOfRange { index: usize, n_features: usize },

    #[error("a projection line needs at least 2 grid points, got {0}")]
    TooFewGridPoints(usize),
}

/// Coefficient of determination: `1 - SSR / SST`.
///
/// When every observed value is identical SST is zero; R² is then defined
/// as 1.
pub fn r_squared(y: &Col<f64>, residuals: &Col<f64>) -> f64 {
    let n = y.nrows();
    if n == 0 || (0..n).all(|i| y[i] == y[0]) {
        return 1.0;
    }

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

    1.0 - rss / tss
}

/// Adjusted R²: `1 - (1 - R²)(n - 1)/(n - p - 1)`.
///
/// Undefined when `n <= p + 1`.
pub fn adjusted_r_squared(
    r_squared: f64,
    n_observations: usize,
    n_features: usize,
) -> Result<f64, DiagnosticsError> {
    if n_observations <= n_features + 1 {
        return Err(DiagnosticsError::AdjustedRSquaredUndefined {
            n_observations,
            n_features,
        });
    }

    let df_total = (n_observations - 1) as f64;
    let df_resid = (n_observations - n_features - 1) as f64;
    Ok(1.0 - (1.0 - r_squared) * df_total / df_resid)
}

/// Mean of squared residuals.
pub fn mse(residuals: &Col<f64>) -> f64 {
    let n = residuals.nrows();
    if n == 0 {
        return f64::NAN;
    }
    residuals.iter().map(|&r| r.powi(2)).sum::<f64>() / n as f64
}

/// Root mean squared error.
pub fn rmse(residuals: &Col<f64>) -> f64 {
    mse(residuals).sqrt()
}

/// Overall F-test of the regression against the intercept-only model.
///
/// Returns `None` when there are no residual degrees of freedom or the fit is
/// exact (the statistic would be infinite).
pub fn f_test(r_squared: f64, n_observations: usize, n_features: usize) -> Option<FTest> {
    if n_features == 0 || n_observations <= n_features + 1 || r_squared >= 1.0 {
        return None;
    }

    let df_model = n_features;
    let df_residual = n_observations - n_features - 1;
    let statistic =
        (r_squared / df_model as f64) / ((1.0 - r_squared) / df_residual as f64);
    if !statistic.is_finite() {
        return None;
    }

    let p_value = FisherSnedecor::new(df_model as f64, df_residual as f64)
        .ok()
        .map_or(f64::NAN, |d| 1.0 - d.cdf(statistic));

    Some(FTest {
        statistic,
        p_value,
        df_model,
        df_residual,
    })
}
