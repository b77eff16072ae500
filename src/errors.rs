use thiserror::Error;
use uuid::Uuid;

/// Configuration failures detected before or during a forecast run.
///
/// Shortfalls are not errors; they are reported on the daily plan.
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("Expense `{expense}` references unknown pot {pot_id}")]
    UnknownPot { expense: String, pot_id: Uuid },
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type ForecastResult<T> = Result<T, ForecastError>;

/// Failures while reading or writing profile snapshots.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ForecastError),
}
