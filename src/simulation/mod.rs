//! The forecasting engine: a day simulator driven across a calendar month.

pub mod daily;
pub mod month;
pub mod schedule;

use serde::{Deserialize, Serialize};

pub use daily::{simulate_day, simulate_day_with};
pub use month::{forecast_month, MonthForecaster};

/// Balances below this (but not negative) are flagged as warnings.
pub const DEFAULT_WARNING_THRESHOLD: f64 = 100.0;

/// Tunables that do not change the allocation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOptions {
    pub warning_threshold: f64,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }
}
