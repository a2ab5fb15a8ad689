//! Core traits for regression estimators.

use crate::core::{FitResult, SampleSet};
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during regression fitting.
///
/// Every variant means the model is not fittable on the given data; no
/// partial result is produced.
#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("feature {index} is constant")]
    ConstantFeature { index: usize },

    #[error("design matrix is rank deficient: rank {rank} with {n_features} features")]
    RankDeficient { rank: usize, n_features: usize },

    #[error("design matrix has no features")]
    NoFeatures,
}

/// A regression estimator that can be fit to data.
///
/// Fitting returns a fitted model that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;

    /// Fit the model to a generated sample set.
    fn fit_samples(&self, samples: &SampleSet) -> Result<Self::Fitted, RegressionError> {
        self.fit(samples.features(), samples.response())
    }
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions on new data.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Access the fitted parameters.
    fn result(&self) -> &FitResult;

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get the intercept (convenience method).
    fn intercept(&self) -> f64 {
        self.result().intercept
    }

    /// Calculate the score (R²) on new data.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> f64 {
        let predictions = self.predict(x);
        let residuals = Col::from_fn(y.nrows(), |i| y[i] - predictions[i]);
        crate::diagnostics::r_squared(y, &residuals)
    }
}
