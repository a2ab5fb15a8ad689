//! Generated datasets.

use faer::{Col, Mat};

/// An ordered, immutable set of synthetic records.
///
/// Features are stored as an `(n_samples, n_features)` design matrix and the
/// observed responses as a column, both in generation order.
#[derive(Debug, Clone)]
pub struct SampleSet {
    features: Mat<f64>,
    response: Col<f64>,
}

/// A single record borrowed out of a `SampleSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Position in generation order.
    pub index: usize,
    /// Feature values, one per feature.
    pub features: Vec<f64>,
    /// Observed response.
    pub response: f64,
}

/// Observed `(min, max)` ranges of a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSummary {
    pub n_samples: usize,
    /// One `(min, max)` pair per feature.
    pub feature_ranges: Vec<(f64, f64)>,
    pub response_range: (f64, f64),
}

impl SampleSet {
    /// Build a sample set from a design matrix and a response column.
    ///
    /// Returns `None` when the row counts disagree.
    pub fn new(features: Mat<f64>, response: Col<f64>) -> Option<Self> {
        if features.nrows() != response.nrows() {
            return None;
        }
        Some(Self { features, response })
    }

    /// Both parts were built with the same row count.
    pub(crate) fn from_generated(features: Mat<f64>, response: Col<f64>) -> Self {
        debug_assert_eq!(features.nrows(), response.nrows());
        Self { features, response }
    }

    /// The `(n_samples, n_features)` design matrix.
    pub fn features(&self) -> &Mat<f64> {
        &self.features
    }

    /// Observed responses.
    pub fn response(&self) -> &Col<f64> {
        &self.response
    }

    pub fn len(&self) -> usize {
        self.response.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Values of one feature column in generation order.
    pub fn feature_column(&self, j: usize) -> Vec<f64> {
        (0..self.len()).map(|i| self.features[(i, j)]).collect()
    }

    /// Get record `i`, or `None` when out of bounds.
    pub fn record(&self, i: usize) -> Option<Record> {
        if i >= self.len() {
            return None;
        }
        Some(Record {
            index: i,
            features: (0..self.n_features())
                .map(|j| self.features[(i, j)])
                .collect(),
            response: self.response[i],
        })
    }

    /// Iterate over all records in generation order.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        (0..self.len()).filter_map(move |i| self.record(i))
    }

    /// Sample mean of every feature.
    pub fn feature_means(&self) -> Vec<f64> {
        let n = self.len() as f64;
        (0..self.n_features())
            .map(|j| (0..self.len()).map(|i| self.features[(i, j)]).sum::<f64>() / n)
            .collect()
    }

    /// Observed ranges of every feature and of the response.
    pub fn summary(&self) -> DataSummary {
        let feature_ranges = (0..self.n_features())
            .map(|j| min_max((0..self.len()).map(|i| self.features[(i, j)])))
            .collect();

        DataSummary {
            n_samples: self.len(),
            feature_ranges,
            response_range: min_max(self.response.iter().copied()),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
