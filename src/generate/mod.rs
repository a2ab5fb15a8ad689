//! Synthetic dataset generation.
//!
//! Datasets follow `y = c_1*x_1 + ... + c_k*x_k + intercept + noise`, with
//! features drawn uniformly from a fixed range and Gaussian noise of a given
//! variance. An optional [`ResponseClamp`] truncates the observed response
//! afterwards.

mod clamp;
mod synthetic;

pub use clamp::ResponseClamp;
pub use synthetic::{generate, GenerationError, SyntheticGenerator};
