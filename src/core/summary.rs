//! Evaluation output.

use crate::diagnostics::{adjusted_r_squared, outlier_scores, DiagnosticsError};
use faer::Col;

/// A record ranked by the magnitude of its residual.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierRecord {
    /// 1-based position in the outlier table.
    pub rank: usize,
    /// Position of the record in generation order.
    pub index: usize,
    pub features: Vec<f64>,
    pub response: f64,
    /// Signed residual (observed - predicted).
    pub residual: f64,
    /// Outlier score, `|residual|`.
    pub score: f64,
}

/// Overall F-test for the regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTest {
    pub statistic: f64,
    pub p_value: f64,
    pub df_model: usize,
    pub df_residual: usize,
}

/// Everything the evaluator derives from a sample set and its fit.
#[derive(Debug, Clone)]
pub struct EvaluationSummary {
    /// Predicted response per record.
    pub fitted_values: Col<f64>,

    /// Residual per record (observed - predicted).
    pub residuals: Col<f64>,

    /// Coefficient of determination.
    pub r_squared: f64,

    /// Adjusted R², `None` when not requested or not computable.
    pub adj_r_squared: Option<f64>,

    /// Mean of squared residuals.
    pub mse: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// Overall F-test, `None` when undefined for this fit.
    pub f_test: Option<FTest>,

    /// Top-k records by descending absolute residual.
    pub outliers: Vec<OutlierRecord>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of features.
    pub n_features: usize,
}

impl EvaluationSummary {
    /// Adjusted R², or the reason it cannot be computed.
    ///
    /// Computed on demand, so it is available even when the evaluation
    /// options skipped it.
    pub fn adjusted_r_squared(&self) -> Result<f64, DiagnosticsError> {
        adjusted_r_squared(self.r_squared, self.n_observations, self.n_features)
    }

    /// Outlier scores for every record, in generation order.
    pub fn outlier_scores(&self) -> Col<f64> {
        outlier_scores(&self.residuals)
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }
}
