//! Response clamping.

use crate::core::OptionsError;
use faer::Col;

/// Truncates observed responses into a closed interval.
///
/// Values outside `[lo, hi]` are set to the nearest bound; they are never
/// resampled. Used for bounded quantities such as rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseClamp {
    pub lo: f64,
    pub hi: f64,
}

impl ResponseClamp {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Check that the bounds are finite and ordered.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.lo.is_finite() || !self.hi.is_finite() || self.lo > self.hi {
            return Err(OptionsError::InvalidClamp {
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    /// Clamp a single value.
    pub fn apply(&self, y: f64) -> f64 {
        y.clamp(self.lo, self.hi)
    }

    /// Clamp every value of `y` in place, returning how many were truncated.
    pub fn apply_in_place(&self, y: &mut Col<f64>) -> usize {
        let mut clamped = 0;
        for i in 0..y.nrows() {
            let v = self.apply(y[i]);
            if v != y[i] {
                clamped += 1;
                y[i] = v;
            }
        }
        clamped
    }
}
