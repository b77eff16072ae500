#![doc(test(attr(deny(warnings))))]

//! Cashflow Core forecasts a calendar month of income, expenses and savings pot
//! contributions day by day, reporting shortfalls and weekly roll-ups.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod services;
pub mod simulation;
pub mod storage;
pub mod utils;

pub use domain::{DailyPlan, MonthForecast, UserProfile, WeeklySummary};
pub use errors::{ForecastError, ForecastResult};
pub use simulation::{forecast_month, simulate_day};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
