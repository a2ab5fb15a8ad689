//! Shared numeric helpers.

mod matrix;

pub use matrix::{center_columns, center_vector, column_means, detect_constant_columns};
