//! One full recomputation: generate, fit, evaluate.
//!
//! Nothing is retained between calls; every parameter change is handled by
//! calling [`compute`] again.

use crate::core::{
    DataSummary, EvaluationOptions, EvaluationSummary, FitResult, OptionsError,
    PlaygroundParams, SampleSet,
};
use crate::diagnostics::{
    adjusted_r_squared, f_test, mse, projection_line, r_squared, residuals, top_k_outliers,
    DiagnosticsError, ProjectionLine,
};
use crate::generate::{GenerationError, SyntheticGenerator};
use crate::solvers::{OlsRegressor, RegressionError, Regressor};
use log::{debug, warn};
use thiserror::Error;

/// Errors that abort a recomputation.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("invalid parameters: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("data generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("model not fittable: {0}")]
    NotFittable(#[from] RegressionError),

    #[error("evaluation failed: {0}")]
    Evaluation(#[from] DiagnosticsError),
}

impl PlaygroundError {
    /// True when the generated data could not be fit.
    pub fn is_not_fittable(&self) -> bool {
        matches!(self, PlaygroundError::NotFittable(_))
    }
}

/// Everything produced by one call to [`compute`].
#[derive(Debug, Clone)]
pub struct PlaygroundReport {
    pub params: PlaygroundParams,
    pub samples: SampleSet,
    pub fit: FitResult,
    pub summary: EvaluationSummary,
}

impl PlaygroundReport {
    /// Observed ranges of the generated data.
    pub fn data_summary(&self) -> DataSummary {
        self.samples.summary()
    }

    /// Fitted line along feature `axis` with other features at their means.
    pub fn projection(
        &self,
        axis: usize,
        n_points: usize,
    ) -> Result<ProjectionLine, DiagnosticsError> {
        projection_line(&self.samples, &self.fit, axis, n_points)
    }
}

/// Fit a sample set by ordinary least squares.
pub fn fit(samples: &SampleSet) -> Result<FitResult, RegressionError> {
    Ok(OlsRegressor::default().fit_samples(samples)?.into_result())
}

/// Derive fitted values, residuals, fit statistics and the outlier table.
///
/// An adjusted R² that cannot be computed is reported as `None`; everything
/// else is still returned.
pub fn evaluate(
    samples: &SampleSet,
    fit: &FitResult,
    options: &EvaluationOptions,
) -> Result<EvaluationSummary, DiagnosticsError> {
    let n = samples.len();
    let p = samples.n_features();
    if fit.n_features() != p {
        return Err(DiagnosticsError::LengthMismatch {
            expected: p,
            got: fit.n_features(),
        });
    }

    let fitted_values = fit.predict(samples.features());
    let residuals = residuals(samples.response(), &fitted_values);
    let r2 = r_squared(samples.response(), &residuals);

    let adj_r_squared = if options.adjusted_r_squared {
        match adjusted_r_squared(r2, n, p) {
            Ok(adj) => Some(adj),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    } else {
        None
    };

    let mse = mse(&residuals);
    let outliers = top_k_outliers(samples, &residuals, options.top_k)?;

    Ok(EvaluationSummary {
        fitted_values,
        residuals,
        r_squared: r2,
        adj_r_squared,
        mse,
        rmse: mse.sqrt(),
        f_test: f_test(r2, n, p),
        outliers,
        n_observations: n,
        n_features: p,
    })
}

/// Generate a sample set from `params`, fit it, and evaluate the fit.
///
/// # Example
///
/// ```rust,ignore
/// use regress_playground::core::{GenerationOptions, PlaygroundParams};
/// use regress_playground::pipeline::compute;
///
/// let report = compute(&PlaygroundParams::from(GenerationOptions::multiple_regression()))?;
/// println!("{}  R² = {:.3}", report.fit, report.summary.r_squared);
/// ```
pub fn compute(params: &PlaygroundParams) -> Result<PlaygroundReport, PlaygroundError> {
    let generator = SyntheticGenerator::new(params.generation.clone())?;
    let samples = generator.generate()?;

    let fit = match fit(&samples) {
        Ok(fit) => fit,
        Err(e) => {
            warn!("model not fittable on {} samples: {e}", samples.len());
            return Err(e.into());
        }
    };
    debug!("fitted {fit}");

    let summary = evaluate(&samples, &fit, &params.evaluation)?;
    debug!(
        "r_squared={:.6}, rmse={:.6}, {} outlier(s) reported",
        summary.r_squared,
        summary.rmse,
        summary.outliers.len()
    );

    Ok(PlaygroundReport {
        params: params.clone(),
        samples,
        fit,
        summary,
    })
}
