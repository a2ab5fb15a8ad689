//! Ordinary Least Squares regression solver.

use crate::core::FitResult;
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{center_columns, center_vector, detect_constant_columns};
use faer::{Col, Mat};
use log::debug;

/// Default tolerance below which a diagonal entry of R counts as zero.
pub const DEFAULT_RANK_TOLERANCE: f64 = 1e-10;

/// Ordinary Least Squares regression estimator with an intercept.
///
/// The data is centered and the centered design is solved with a
/// column-pivoted QR decomposition. Designs without full column rank
/// (constant or collinear features) are rejected instead of producing
/// arbitrary coefficients.
///
/// # Example
///
/// ```rust,ignore
/// use regress_playground::solvers::{OlsRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 1, |i, _| i as f64);
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::builder().build().fit(&x, &y)?;
/// println!("{}", fitted.result());
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    rank_tolerance: f64,
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self {
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
        }
    }
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given rank tolerance.
    pub fn new(rank_tolerance: f64) -> Self {
        Self { rank_tolerance }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    pub fn rank_tolerance(&self) -> f64 {
        self.rank_tolerance
    }

    /// Check if a matrix has full column rank.
    pub fn is_full_rank(x: &Mat<f64>) -> bool {
        let qr = x.col_piv_qr();
        let r = qr.R();

        for i in 0..x.ncols().min(x.nrows()) {
            if r[(i, i)].abs() < DEFAULT_RANK_TOLERANCE {
                return false;
            }
        }
        x.nrows() >= x.ncols()
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }

        if n_features == 0 {
            return Err(RegressionError::NoFeatures);
        }

        // One parameter per feature plus the intercept; an exact fit
        // (n_samples == n_params) is allowed.
        let n_params = n_features + 1;
        if n_samples < n_params {
            return Err(RegressionError::InsufficientObservations {
                needed: n_params,
                got: n_samples,
            });
        }

        let constant_cols = detect_constant_columns(x, self.rank_tolerance);
        if let Some(index) = constant_cols.iter().position(|&c| c) {
            return Err(RegressionError::ConstantFeature { index });
        }

        let (x_centered, x_means) = center_columns(x);
        let (y_centered, y_mean) = center_vector(y);

        let (coefficients, rank) = self.solve_with_qr(&x_centered, &y_centered)?;

        // intercept = y_mean - x_means' * coefficients
        let mut intercept = y_mean;
        for j in 0..n_features {
            intercept -= x_means[j] * coefficients[j];
        }

        debug!(
            "ols fit on {n_samples} observations: intercept={intercept:.6}, rank={rank}"
        );

        Ok(FittedOls {
            result: FitResult {
                coefficients,
                intercept,
                rank,
                n_observations: n_samples,
                n_parameters: n_params,
            },
        })
    }
}

impl OlsRegressor {
    /// Solve the least squares problem using QR decomposition with column pivoting.
    fn solve_with_qr(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
    ) -> Result<(Col<f64>, usize), RegressionError> {
        let n_features = x.ncols();
        let n_samples = x.nrows();

        let qr = x.col_piv_qr();
        let q = qr.compute_Q();
        let r = qr.R();
        let perm = qr.P();

        // position[j] = pivoted position of original column j
        let position = perm.arrays().0;

        // Numerical rank from the R diagonal
        let mut rank = 0;
        for i in 0..n_features.min(n_samples) {
            if r[(i, i)].abs() > self.rank_tolerance {
                rank += 1;
            } else {
                break;
            }
        }

        if rank < n_features {
            return Err(RegressionError::RankDeficient { rank, n_features });
        }

        // Solve R * beta_perm = Q' * y
        let qty = q.transpose() * y;

        let mut beta_perm = Col::<f64>::zeros(rank);
        for i in (0..rank).rev() {
            let mut sum = qty[i];
            for j in (i + 1)..rank {
                sum -= r[(i, j)] * beta_perm[j];
            }
            beta_perm[i] = sum / r[(i, i)];
        }

        // Undo the column pivoting
        let coefficients = Col::from_fn(n_features, |j| beta_perm[position[j]]);

        Ok((coefficients, rank))
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    result: FitResult,
}

impl FittedOls {
    /// Consume the fitted model, keeping only its parameters.
    pub fn into_result(self) -> FitResult {
        self.result
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        self.result.predict(x)
    }

    fn result(&self) -> &FitResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    rank_tolerance: Option<f64>,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank tolerance for QR decomposition.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.rank_tolerance = Some(tol);
        self
    }

    /// Build the OLS regressor.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.rank_tolerance.unwrap_or(DEFAULT_RANK_TOLERANCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fit() {
        let x = Mat::from_fn(5, 1, |i, _| i as f64);
        let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);

        let fitted = OlsRegressor::builder().build().fit(&x, &y).expect("model should fit");

        assert!((fitted.coefficients()[0] - 3.0).abs() < 1e-10);
        assert!((fitted.intercept() - 2.0).abs() < 1e-10);
        assert_eq!(fitted.result().rank, 1);
        assert_eq!(fitted.result().n_parameters, 2);
    }

    #[test]
    fn test_predict() {
        let x = Mat::from_fn(5, 1, |i, _| i as f64);
        let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);

        let fitted = OlsRegressor::default().fit(&x, &y).expect("model should fit");

        let x_new = Mat::from_fn(2, 1, |i, _| (i + 10) as f64);
        let preds = fitted.predict(&x_new);

        assert!((preds[0] - (2.0 + 3.0 * 10.0)).abs() < 1e-10);
        assert!((preds[1] - (2.0 + 3.0 * 11.0)).abs() < 1e-10);
    }

    #[test]
    fn test_pivoted_columns_map_back() {
        // Second column has far larger scale so pivoting reorders the columns.
        let x = Mat::from_fn(20, 2, |i, j| {
            let t = i as f64;
            if j == 0 {
                (t * 0.7).sin()
            } else {
                100.0 * t
            }
        });
        let y = Col::from_fn(20, |i| 1.0 - 4.0 * x[(i, 0)] + 0.5 * x[(i, 1)]);

        let fitted = OlsRegressor::default().fit(&x, &y).expect("model should fit");

        assert!((fitted.coefficients()[0] + 4.0).abs() < 1e-8);
        assert!((fitted.coefficients()[1] - 0.5).abs() < 1e-8);
        assert!((fitted.intercept() - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_single_observation_rejected() {
        let x = Mat::from_fn(1, 1, |_, _| 3.0);
        let y = Col::from_fn(1, |_| 7.0);

        let result = OlsRegressor::default().fit(&x, &y);
        assert!(matches!(
            result,
            Err(RegressionError::InsufficientObservations { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn test_full_rank_check() {
        let x = Mat::from_fn(10, 2, |i, j| if j == 0 { i as f64 } else { (i * i) as f64 });
        assert!(OlsRegressor::is_full_rank(&x));

        let collinear = Mat::from_fn(10, 2, |i, j| (j + 1) as f64 * i as f64);
        assert!(!OlsRegressor::is_full_rank(&collinear));
    }
}
