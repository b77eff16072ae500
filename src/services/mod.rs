pub mod forecast_service;

pub use forecast_service::{ForecastReport, ForecastService};

use crate::errors::{ForecastError, ProfileError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("{0}")]
    Invalid(String),
}
