//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};
use regress_playground::core::{EvaluationOptions, GenerationOptions, PlaygroundParams};

/// Options for `y = coefficients·x + intercept + noise` with the given seed.
pub fn options(
    n_samples: usize,
    seed: u64,
    coefficients: &[f64],
    intercept: f64,
    noise_variance: f64,
) -> GenerationOptions {
    GenerationOptions::builder()
        .n_samples(n_samples)
        .seed(seed)
        .coefficients(coefficients.to_vec())
        .intercept(intercept)
        .noise_variance(noise_variance)
        .build()
        .expect("test options should be valid")
}

/// Full parameters with default evaluation options.
pub fn params(
    n_samples: usize,
    seed: u64,
    coefficients: &[f64],
    intercept: f64,
    noise_variance: f64,
) -> PlaygroundParams {
    PlaygroundParams::new(
        options(n_samples, seed, coefficients, intercept, noise_variance),
        EvaluationOptions::default(),
    )
}

/// Generate data with collinear features.
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(n_samples, 2, |i, j| (j + 1) as f64 * i as f64);
    let y = Col::from_fn(n_samples, |i| 1.0 + 2.0 * i as f64);
    (x, y)
}

/// Generate data where the second feature is constant.
pub fn generate_constant_column_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(n_samples, 2, |i, j| if j == 0 { i as f64 } else { 5.0 });
    let y = Col::from_fn(n_samples, |i| 1.0 + 2.0 * i as f64);
    (x, y)
}
