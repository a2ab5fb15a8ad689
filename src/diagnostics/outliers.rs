//! Ranking records by residual magnitude.

use super::fit_quality::DiagnosticsError;
use crate::core::{OutlierRecord, SampleSet};
use faer::Col;

/// The `k` records with the largest absolute residual.
///
/// Records are ordered by descending `|residual|`; ties keep generation
/// order, so the earlier record comes first. The result holds `min(k, n)`
/// records.
pub fn top_k_outliers(
    samples: &SampleSet,
    residuals: &Col<f64>,
    k: usize,
) -> Result<Vec<OutlierRecord>, DiagnosticsError> {
    if residuals.nrows() != samples.len() {
        return Err(DiagnosticsError::LengthMismatch {
            expected: samples.len(),
            got: residuals.nrows(),
        });
    }

    let mut order: Vec<usize> = (0..samples.len()).collect();
    // sort_by is stable, which keeps tied records in generation order
    order.sort_by(|&a, &b| residuals[b].abs().total_cmp(&residuals[a].abs()));

    Ok(order
        .into_iter()
        .take(k)
        .enumerate()
        .filter_map(|(rank, index)| {
            samples.record(index).map(|rec| OutlierRecord {
                rank: rank + 1,
                index,
                features: rec.features,
                response: rec.response,
                residual: residuals[index],
                score: residuals[index].abs(),
            })
        })
        .collect())
}
