//! Regression lines projected onto a single feature.

use super::fit_quality::DiagnosticsError;
use crate::core::{FitResult, SampleSet};

/// A fitted line along one feature axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionLine {
    /// Feature the line runs along.
    pub axis: usize,
    /// Evenly spaced grid over the observed range of `axis`.
    pub x: Vec<f64>,
    /// Predicted response at each grid point.
    pub y: Vec<f64>,
}

/// Evaluate the fit along feature `axis`, holding every other feature at
/// its sample mean.
///
/// With a single feature this is the regression line itself. The grid spans
/// the observed `[min, max]` of the feature with `n_points` evenly spaced
/// values.
pub fn projection_line(
    samples: &SampleSet,
    fit: &FitResult,
    axis: usize,
    n_points: usize,
) -> Result<ProjectionLine, DiagnosticsError> {
    let n_features = samples.n_features();
    if axis >= n_features {
        return Err(DiagnosticsError::FeatureOutOfRange {
            index: axis,
            n_features,
        });
    }
    if fit.n_features() != n_features {
        return Err(DiagnosticsError::LengthMismatch {
            expected: n_features,
            got: fit.n_features(),
        });
    }
    if n_points < 2 {
        return Err(DiagnosticsError::TooFewGridPoints(n_points));
    }

    let (lo, hi) = samples.summary().feature_ranges[axis];
    let step = (hi - lo) / (n_points - 1) as f64;

    let mut point = samples.feature_means();
    let mut x = Vec::with_capacity(n_points);
    let mut y = Vec::with_capacity(n_points);
    for i in 0..n_points {
        let xi = if i == n_points - 1 { hi } else { lo + step * i as f64 };
        point[axis] = xi;
        x.push(xi);
        y.push(fit.predict_one(&point).unwrap_or(f64::NAN));
    }

    Ok(ProjectionLine { axis, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::{Col, Mat};

    fn plane() -> (SampleSet, FitResult) {
        // x1 in [0, 4], x2 alternates 0 / 2 (mean 1)
        let x = Mat::from_fn(5, 2, |i, j| if j == 0 { i as f64 } else { (i % 2) as f64 * 2.0 });
        let y = Col::from_fn(5, |i| 5.0 + 2.0 * x[(i, 0)] + 1.5 * x[(i, 1)]);
        let fit = FitResult {
            coefficients: Col::from_fn(2, |j| [2.0, 1.5][j]),
            intercept: 5.0,
            rank: 2,
            n_observations: 5,
            n_parameters: 3,
        };
        (SampleSet::new(x, y).unwrap(), fit)
    }

    #[test]
    fn test_projection_holds_other_feature_at_mean() {
        let (samples, fit) = plane();
        let line = projection_line(&samples, &fit, 0, 5).unwrap();
        let x2_mean = samples.feature_means()[1];

        assert_eq!(line.x, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        for (xi, yi) in line.x.iter().zip(&line.y) {
            assert!((yi - (5.0 + 2.0 * xi + 1.5 * x2_mean)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_grid_spans_observed_range() {
        let (samples, fit) = plane();
        let line = projection_line(&samples, &fit, 1, 3).unwrap();
        assert_eq!(line.x.first(), Some(&0.0));
        assert_eq!(line.x.last(), Some(&2.0));
    }

    #[test]
    fn test_invalid_arguments() {
        let (samples, fit) = plane();
        assert!(matches!(
            projection_line(&samples, &fit, 2, 10),
            Err(DiagnosticsError::FeatureOutOfRange { .. })
        ));
        assert_eq!(
            projection_line(&samples, &fit, 0, 1),
            Err(DiagnosticsError::TooFewGridPoints(1))
        );
    }
}
