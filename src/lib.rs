//! Reproducible core for interactive linear-regression dashboards.
//!
//! A dashboard lets a user move sliders (sample size, coefficients, intercept,
//! noise variance, seed) and watch a freshly generated dataset being fit. This
//! crate is everything behind those sliders except the UI:
//!
//! - [`generate`]: seeded synthetic data `y = c·x + intercept + noise`, with an
//!   optional response clamp
//! - [`solvers`]: ordinary least squares with an intercept
//! - [`diagnostics`]: R², adjusted R², RMSE, F-test, residuals and top-k outliers
//! - [`pipeline`]: [`compute`], one pure call from parameters to report
//!
//! # Example
//!
//! ```rust,ignore
//! use regress_playground::prelude::*;
//!
//! let params = PlaygroundParams::new(
//!     GenerationOptions::builder()
//!         .n_samples(500)
//!         .seed(42)
//!         .coefficients([2.0, 1.5])
//!         .intercept(5.0)
//!         .noise_variance(100.0)
//!         .build()?,
//!     EvaluationOptions::default(),
//! );
//!
//! let report = compute(&params)?;
//! println!("{}", report.fit);
//! println!("R² = {:.3}", report.summary.r_squared);
//! for outlier in &report.summary.outliers {
//!     println!("#{} residual {:.3}", outlier.rank, outlier.residual);
//! }
//! ```

pub mod core;
pub mod diagnostics;
pub mod generate;
pub mod pipeline;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DataSummary, EvaluationOptions, EvaluationSummary, FTest, FitResult, GenerationOptions,
        OptionsError, OutlierRecord, PlaygroundParams, Record, SampleSet,
    };
    pub use crate::diagnostics::{
        adjusted_r_squared, projection_line, r_squared, top_k_outliers, DiagnosticsError,
        ProjectionLine,
    };
    pub use crate::generate::{generate, GenerationError, ResponseClamp, SyntheticGenerator};
    pub use crate::pipeline::{compute, evaluate, fit, PlaygroundError, PlaygroundReport};
    pub use crate::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
}

pub use crate::core::{
    EvaluationOptions, EvaluationSummary, FitResult, GenerationOptions, PlaygroundParams,
    SampleSet,
};
pub use crate::pipeline::{compute, PlaygroundError, PlaygroundReport};
