use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Load-time failures. Fatal to the session: a dataset that fails to load
/// is never partially exposed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{column}' not found in dataset header")]
    MissingColumn { column: String },

    #[error("Row {row}: ({year}, {month}, {day}, {hour}) is not a valid calendar hour")]
    InvalidTimestamp {
        row: usize,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    },

    #[error("Row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: negative {pollutant} concentration {value}")]
    NegativeConcentration {
        row: usize,
        pollutant: String,
        value: f64,
    },

    #[error("Measurement validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Recoverable selector errors. The caller is told and receives no filtered
/// result; the session continues.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown station '{station}'")]
    UnknownStation { station: String },

    #[error("Unknown pollutant '{0}'")]
    UnknownPollutant(String),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
