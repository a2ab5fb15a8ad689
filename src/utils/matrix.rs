//! Matrix utility functions.

use faer::{Col, Mat};

/// Mean of every column of `x`.
pub fn column_means(x: &Mat<f64>) -> Col<f64> {
    let n_rows = x.nrows() as f64;
    Col::from_fn(x.ncols(), |j| {
        (0..x.nrows()).map(|i| x[(i, j)]).sum::<f64>() / n_rows
    })
}

/// Flag columns whose values all lie within `tolerance` of the first row.
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    if x.nrows() == 0 {
        return vec![true; x.ncols()];
    }

    (0..x.ncols())
        .map(|j| {
            let first = x[(0, j)];
            (1..x.nrows()).all(|i| (x[(i, j)] - first).abs() < tolerance)
        })
        .collect()
}

/// Center a matrix by subtracting column means.
pub fn center_columns(x: &Mat<f64>) -> (Mat<f64>, Col<f64>) {
    let means = column_means(x);
    let centered = Mat::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] - means[j]);
    (centered, means)
}

/// Center a vector by subtracting the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let mean = y.iter().sum::<f64>() / y.nrows() as f64;
    (Col::from_fn(y.nrows(), |i| y[i] - mean), mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_means() {
        let x = Mat::from_fn(4, 2, |i, j| (i + 1) as f64 * if j == 0 { 1.0 } else { 10.0 });
        let means = column_means(&x);
        assert!((means[0] - 2.5).abs() < 1e-10);
        assert!((means[1] - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_detect_constant_columns() {
        let x = Mat::from_fn(5, 3, |i, j| match j {
            0 => 1.0,
            1 => i as f64,
            _ => 2.0,
        });

        assert_eq!(detect_constant_columns(&x, 1e-10), vec![true, false, true]);
    }

    #[test]
    fn test_detect_constant_columns_with_tolerance() {
        let x = Mat::from_fn(3, 1, |i, _| if i == 1 { 1.000001 } else { 1.0 });

        assert_eq!(detect_constant_columns(&x, 1e-10), vec![false]);
        assert_eq!(detect_constant_columns(&x, 1e-5), vec![true]);
    }

    #[test]
    fn test_detect_constant_columns_empty() {
        let x = Mat::<f64>::zeros(0, 2);
        assert_eq!(detect_constant_columns(&x, 1e-10), vec![true, true]);
    }

    #[test]
    fn test_center_columns() {
        let x = Mat::from_fn(4, 2, |i, j| (i + 1) as f64 * (j + 1) as f64);
        let (centered, means) = center_columns(&x);

        assert!((means[0] - 2.5).abs() < 1e-10);
        assert!((means[1] - 5.0).abs() < 1e-10);
        for j in 0..2 {
            let sum: f64 = (0..4).map(|i| centered[(i, j)]).sum();
            assert!(sum.abs() < 1e-10);
        }
    }

    #[test]
    fn test_center_vector() {
        let y = Col::from_fn(4, |i| (i + 1) as f64);
        let (centered, mean) = center_vector(&y);

        assert!((mean - 2.5).abs() < 1e-10);
        assert!(centered.iter().sum::<f64>().abs() < 1e-10);
    }
}
