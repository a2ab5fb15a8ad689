//! Fitted model parameters.

use faer::{Col, Mat};
use std::fmt;

/// Coefficients and intercept produced by a least-squares fit.
///
/// Only meaningful for the sample set it was fit on.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// One coefficient per feature, in feature order.
    pub coefficients: Col<f64>,

    /// Intercept term.
    pub intercept: f64,

    /// Numerical rank of the centered design matrix.
    pub rank: usize,

    /// Number of observations the model was fit on.
    pub n_observations: usize,

    /// Number of estimated parameters (features + intercept).
    pub n_parameters: usize,
}

impl FitResult {
    pub fn n_features(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Residual degrees of freedom (n - p).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Model degrees of freedom (number of features).
    pub fn model_df(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// Predict the response for every row of `x`.
    ///
    /// `x` must have one column per coefficient.
    pub fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| {
            let mut pred = self.intercept;
            for j in 0..self.n_features() {
                pred += x[(i, j)] * self.coefficients[j];
            }
            pred
        })
    }

    /// Predict a single response.
    ///
    /// Returns `None` when `features` does not have one value per coefficient.
    pub fn predict_one(&self, features: &[f64]) -> Option<f64> {
        if features.len() != self.n_features() {
            return None;
        }
        Some(
            features
                .iter()
                .enumerate()
                .fold(self.intercept, |acc, (j, &x)| acc + x * self.coefficients[j]),
        )
    }
}

/// Renders the regression equation, e.g. `y = 5.000 + 2.000*x1 + 1.500*x2`.
impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.3}", self.intercept)?;
        let single = self.n_features() == 1;
        for j in 0..self.n_features() {
            let c = self.coefficients[j];
            let sign = if c < 0.0 { '-' } else { '+' };
            if single {
                write!(f, " {} {:.3}*x", sign, c.abs())?;
            } else {
                write!(f, " {} {:.3}*x{}", sign, c.abs(), j + 1)?;
            }
        }
        Ok(())
    }
}
