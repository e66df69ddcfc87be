//! Evaluating pressure scales at tabulated conditions.
use crate::errors::{Result, ScaleError};
use crate::measured::Measured;
use crate::scale::PressureScale;
use crate::table::SampleRecord;

/// Pressure of every record under `model`, in record order.
///
/// Records must belong to the model's material.
pub fn pressures(model: &dyn PressureScale, records: &[SampleRecord]) -> Result<Vec<Measured>> {
    let scale = model.scale();
    if let Some(r) = records.iter().find(|r| r.material != scale.material) {
        return Err(ScaleError::MaterialMismatch {
            scale: scale.material.to_string(),
            record: r.material.to_string(),
        });
    }
    log::debug!("evaluating {} at {} points", scale, records.len());
    records
        .iter()
        .map(|r| model.cal_p(r.volume, r.temperature))
        .collect()
}

/// Pressure at exact volumes and temperatures, as used for phase-boundary points.
pub fn pressures_at(
    model: &dyn PressureScale,
    volumes: &[f64],
    temperatures: &[f64],
) -> Result<Vec<Measured>> {
    let v: Vec<Measured> = volumes.iter().map(|x| Measured::exact(*x)).collect();
    let t: Vec<Measured> = temperatures.iter().map(|x| Measured::exact(*x)).collect();
    model.cal_p_many(&v, &t)
}
