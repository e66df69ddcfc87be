//! Loading co-measured unit-cell volumes and temperatures from csv tables.
use crate::errors::{Result, ScaleError};
use crate::material::Material;
use crate::measured::Measured;
use std::fs::File;
use std::path::Path;

/// Header of the temperature column.
pub const TEMPERATURE: &str = "T";
/// Header of the temperature uncertainty column.
pub const TEMPERATURE_ERROR: &str = "sT";

/// Where the temperature of each row comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureSource {
    /// Read `T` and `sT` columns.
    Columns,
    /// Every row was measured at this temperature, without uncertainty.
    Fixed(f64),
}

/// One material in one row of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    /// Material the volume belongs to.
    pub material: Material,
    /// Unit-cell volume.
    pub volume: Measured,
    /// Temperature of the measurement.
    pub temperature: Measured,
}

/// A headed csv table held in memory.  Cells are parsed when a column is requested.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl Table {
    /// Read a table from a csv file with a header row.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ScaleError::IoError(format!("{}: {}", path.display(), e)))?;
        let table = Table::from_reader(file)?;
        log::info!("read {} rows from {}", table.len(), path.display());
        if table.is_empty() {
            log::warn!("{} holds no data rows", path.display());
        }
        Ok(table)
    }

    /// Read a table from any csv source.
    pub fn from_reader<R: std::io::Read>(rdr: R) -> Result<Table> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            rows.push(result?);
        }
        Ok(Table { headers, rows })
    }

    /// Column headers, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the column headed `name`.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ScaleError::MissingColumn(name.to_string()))?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let cell = record.get(idx).unwrap_or("");
                match cell.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(value),
                    _ => Err(ScaleError::Parse {
                        column: name.to_string(),
                        row,
                        value: cell.to_string(),
                    }),
                }
            })
            .collect()
    }

    /// Volumes of `material` paired with their uncertainties.
    pub fn volumes(&self, material: Material) -> Result<Vec<Measured>> {
        let v = self.column(&material.volume_column())?;
        let sv = self.column(&material.volume_error_column())?;
        Ok(Measured::zip(&v, &sv))
    }

    /// Temperature of every row.
    pub fn temperatures(&self, source: TemperatureSource) -> Result<Vec<Measured>> {
        match source {
            TemperatureSource::Columns => {
                let t = self.column(TEMPERATURE)?;
                let st = self.column(TEMPERATURE_ERROR)?;
                Ok(Measured::zip(&t, &st))
            }
            TemperatureSource::Fixed(t) => Ok(vec![Measured::exact(t); self.len()]),
        }
    }

    /// One record of `material` per row, in row order.
    pub fn records(&self, material: Material, source: TemperatureSource) -> Result<Vec<SampleRecord>> {
        let volumes = self.volumes(material)?;
        let temperatures = self.temperatures(source)?;
        Ok(volumes
            .into_iter()
            .zip(temperatures)
            .map(|(volume, temperature)| SampleRecord {
                material,
                volume,
                temperature,
            })
            .collect())
    }
}
