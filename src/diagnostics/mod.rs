//! Fit evaluation: goodness of fit, residuals and outliers.
//!
//! - **Fit quality**: R², adjusted R², MSE/RMSE and the overall F-test
//! - **Residuals**: signed residuals and absolute outlier scores
//! - **Outliers**: top-k records by residual magnitude
//! - **Projection**: the fitted line along one feature
//!
//! # Example
//!
//! ```rust,ignore
//! use regress_playground::diagnostics::{adjusted_r_squared, r_squared, top_k_outliers};
//!
//! let r2 = r_squared(samples.response(), &residuals);
//! let adj = adjusted_r_squared(r2, samples.len(), samples.n_features())?;
//! let worst = top_k_outliers(&samples, &residuals, 5)?;
//! ```

mod fit_quality;
mod outliers;
mod projection;
mod residuals;

pub use fit_quality::{adjusted_r_squared, f_test, mse, r_squared, rmse, DiagnosticsError};
pub use outliers::top_k_outliers;
pub use projection::{projection_line, ProjectionLine};
pub use residuals::{outlier_scores, residuals};
