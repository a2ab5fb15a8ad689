//! Least-squares solvers.

mod ols;
mod traits;

pub use ols::{FittedOls, OlsRegressor, OlsRegressorBuilder, DEFAULT_RANK_TOLERANCE};
pub use traits::{FittedRegressor, RegressionError, Regressor};
