//! Error type shared by every module.
/// Custom error type for the pscales crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// Error type from csv crate.
    CsvError(String),
    /// Error type from std::io, with the path that failed.
    IoError(String),
    /// A required column is absent from a table.
    MissingColumn(String),
    /// A cell could not be read as a number.
    Parse {
        /// Column header.
        column: String,
        /// Zero-based data row.
        row: usize,
        /// Raw cell text.
        value: String,
    },
    /// A tabulated scale does not form a complete rectilinear grid.
    Grid(String),
    /// Volume and temperature fall outside the tabulated range of a scale.
    OutOfRange {
        /// Scale label, e.g. `Au-D07`.
        scale: String,
        /// Requested volume.
        volume: f64,
        /// Requested temperature.
        temperature: f64,
    },
    /// Paired inputs differ in length.
    LengthMismatch {
        /// Length of the first input.
        expected: usize,
        /// Length of the second input.
        found: usize,
    },
    /// A record was handed to the scale of another material.
    MaterialMismatch {
        /// Material of the scale.
        scale: String,
        /// Material of the record.
        record: String,
    },
    /// No calibration registered under this name.
    UnknownScale(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScaleError>;

impl std::error::Error for ScaleError {}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScaleError::CsvError(e) => write!(f, "Could not read csv table: {}.", e),
            ScaleError::IoError(e) => write!(f, "Could not read file: {}.", e),
            ScaleError::MissingColumn(c) => write!(f, "Required column '{}' not found.", c),
            ScaleError::Parse { column, row, value } => write!(
                f,
                "Could not parse '{}' in column '{}', row {} as a number.",
                value, column, row
            ),
            ScaleError::Grid(e) => write!(f, "Invalid pressure table: {}.", e),
            ScaleError::OutOfRange {
                scale,
                volume,
                temperature,
            } => write!(
                f,
                "V = {} and T = {} lie outside the tabulated range of {}.",
                volume, temperature, scale
            ),
            ScaleError::LengthMismatch { expected, found } => write!(
                f,
                "Paired inputs differ in length ({} and {}).",
                expected, found
            ),
            ScaleError::MaterialMismatch { scale, record } => write!(
                f,
                "Cannot evaluate a {} record with a {} scale.",
                record, scale
            ),
            ScaleError::UnknownScale(s) => write!(f, "No calibration registered as {}.", s),
        }
    }
}

impl From<csv::Error> for ScaleError {
    fn from(e: csv::Error) -> Self {
        ScaleError::CsvError(e.to_string())
    }
}

impl From<std::io::Error> for ScaleError {
    fn from(e: std::io::Error) -> Self {
        ScaleError::IoError(e.to_string())
    }
}
