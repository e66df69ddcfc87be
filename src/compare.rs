//! Pressure differences between two scales at shared conditions.
use crate::errors::{Result, ScaleError};
use crate::measured::Measured;

/// Reference and sample pressures from one row of a co-loaded assemblage.
///
/// The two standard deviations are kept apart: the reference error is drawn
/// as a horizontal bar, the sample error as a vertical bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPoint {
    /// Pressure from the reference material, e.g. MgO.
    pub reference: Measured,
    /// Pressure from the sample standard, e.g. Au or Pt.
    pub sample: Measured,
    /// Assemblage label, e.g. `Au`.
    pub pair: String,
}

impl ComparisonPoint {
    /// Sample pressure minus reference pressure.
    pub fn delta(&self) -> f64 {
        self.sample.nominal - self.reference.nominal
    }

    /// Horizontal error bar half-width.
    pub fn reference_error(&self) -> f64 {
        self.reference.std_dev
    }

    /// Vertical error bar half-width.
    pub fn sample_error(&self) -> f64 {
        self.sample.std_dev
    }
}

/// Pair reference and sample pressures row by row.
pub fn compare(reference: &[Measured], sample: &[Measured], pair: &str) -> Result<Vec<ComparisonPoint>> {
    if reference.len() != sample.len() {
        return Err(ScaleError::LengthMismatch {
            expected: reference.len(),
            found: sample.len(),
        });
    }
    Ok(reference
        .iter()
        .zip(sample)
        .map(|(a, b)| ComparisonPoint {
            reference: *a,
            sample: *b,
            pair: pair.to_string(),
        })
        .collect())
}
