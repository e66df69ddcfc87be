//! Pressure tables exported from an equation-of-state library.
//!
//! Each file holds one calibration as long-format rows `V,T,P` covering a
//! rectilinear volume-temperature grid.  Pressures between nodes are read off
//! by bilinear interpolation and input uncertainty is forwarded with the local
//! slopes of the table.
use crate::errors::{Result, ScaleError};
use crate::measured::Measured;
use crate::scale::{PressureScale, Scale, ScaleProvider};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// One node of an exported table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridRow {
    /// Unit-cell volume.
    #[serde(rename = "V")]
    pub volume: f64,
    /// Temperature.
    #[serde(rename = "T")]
    pub temperature: f64,
    /// Pressure.
    #[serde(rename = "P")]
    pub pressure: f64,
}

/// A calibration backed by a tabulated P(V, T) grid.
#[derive(Debug, Clone)]
pub struct GridScale {
    scale: Scale,
    volumes: Vec<f64>,
    temperatures: Vec<f64>,
    // pressures[i * temperatures.len() + j] at (volumes[i], temperatures[j])
    pressures: Vec<f64>,
}

/// Sorted, deduplicated axis values.
fn axis(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut ax: Vec<f64> = values.collect();
    ax.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ax.dedup();
    ax
}

/// Index of the lower node of the cell holding `x`, and the fractional position inside it.
fn locate(ax: &[f64], x: f64) -> Option<(usize, f64)> {
    let last = ax.len() - 1;
    if !(x >= ax[0] && x <= ax[last]) {
        return None;
    }
    let i = ax.partition_point(|a| *a <= x).saturating_sub(1).min(last - 1);
    Some((i, (x - ax[i]) / (ax[i + 1] - ax[i])))
}

impl GridScale {
    /// Build a grid from table rows.  Every volume must be tabulated at every
    /// temperature exactly once, with at least two nodes along each axis.
    pub fn from_rows(scale: Scale, rows: &[GridRow]) -> Result<Self> {
        let finite = |r: &GridRow| r.volume.is_finite() && r.temperature.is_finite() && r.pressure.is_finite();
        if !rows.iter().all(finite) {
            return Err(ScaleError::Grid(format!("{} has non-finite nodes", scale)));
        }
        let volumes = axis(rows.iter().map(|r| r.volume));
        let temperatures = axis(rows.iter().map(|r| r.temperature));
        if volumes.len() < 2 || temperatures.len() < 2 {
            return Err(ScaleError::Grid(format!(
                "{} needs at least two volumes and two temperatures",
                scale
            )));
        }
        let nt = temperatures.len();
        if rows.len() != volumes.len() * nt {
            return Err(ScaleError::Grid(format!(
                "{} has {} rows for a {}x{} grid",
                scale,
                rows.len(),
                volumes.len(),
                nt
            )));
        }
        let mut pressures = vec![f64::NAN; rows.len()];
        let mut filled = vec![false; rows.len()];
        for r in rows {
            let i = volumes.partition_point(|v| *v < r.volume);
            let j = temperatures.partition_point(|t| *t < r.temperature);
            let k = i * nt + j;
            if filled[k] {
                return Err(ScaleError::Grid(format!(
                    "{} repeats node V = {}, T = {}",
                    scale, r.volume, r.temperature
                )));
            }
            filled[k] = true;
            pressures[k] = r.pressure;
        }
        log::debug!(
            "{}: {} volumes x {} temperatures",
            scale,
            volumes.len(),
            nt
        );
        Ok(GridScale {
            scale,
            volumes,
            temperatures,
            pressures,
        })
    }

    /// Read an exported table from csv.
    pub fn read<P: AsRef<Path>>(scale: Scale, path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ScaleError::IoError(format!("{}: {}", path.display(), e)))?;
        let mut rdr = csv::Reader::from_reader(file);
        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            let row: GridRow = result?;
            rows.push(row);
        }
        GridScale::from_rows(scale, &rows)
    }

    fn node(&self, i: usize, j: usize) -> f64 {
        self.pressures[i * self.temperatures.len() + j]
    }
}

impl PressureScale for GridScale {
    fn scale(&self) -> Scale {
        self.scale
    }

    fn cal_p(&self, volume: Measured, temperature: Measured) -> Result<Measured> {
        let out_of_range = || ScaleError::OutOfRange {
            scale: self.scale.label(),
            volume: volume.nominal,
            temperature: temperature.nominal,
        };
        let (i, s) = locate(&self.volumes, volume.nominal).ok_or_else(out_of_range)?;
        let (j, u) = locate(&self.temperatures, temperature.nominal).ok_or_else(out_of_range)?;
        let p00 = self.node(i, j);
        let p10 = self.node(i + 1, j);
        let p01 = self.node(i, j + 1);
        let p11 = self.node(i + 1, j + 1);

        let p = p00 * (1.0 - s) * (1.0 - u) + p10 * s * (1.0 - u) + p01 * (1.0 - s) * u + p11 * s * u;
        let dv = self.volumes[i + 1] - self.volumes[i];
        let dt = self.temperatures[j + 1] - self.temperatures[j];
        let dp_dv = ((p10 - p00) * (1.0 - u) + (p11 - p01) * u) / dv;
        let dp_dt = ((p01 - p00) * (1.0 - s) + (p11 - p10) * s) / dt;
        let sigma = (dp_dv * volume.std_dev).hypot(dp_dt * temperature.std_dev);
        Ok(Measured::new(p, sigma))
    }
}

/// Resolves calibrations to exported tables in one directory, named
/// `<symbol>_<calibration>.csv`, e.g. `Au_Dorogokupets2007.csv`.
#[derive(Debug, Clone)]
pub struct GridProvider {
    dir: PathBuf,
}

impl GridProvider {
    /// Provider reading tables from `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        GridProvider { dir: dir.into() }
    }

    /// Path of the table holding `scale`.
    pub fn path(&self, scale: Scale) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.csv",
            scale.material.symbol(),
            scale.calibration.name()
        ))
    }
}

impl ScaleProvider for GridProvider {
    fn scale(&self, scale: Scale) -> Result<Box<dyn PressureScale>> {
        let path = self.path(scale);
        log::debug!("loading {} from {}", scale, path.display());
        Ok(Box::new(GridScale::read(scale, path)?))
    }
}
