//! Facade that ties configuration, stored profiles and the engine together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{MonthForecast, MonthTotals, PotProgress, UserProfile};
use crate::services::{ServiceError, ServiceResult};
use crate::simulation::MonthForecaster;
use crate::storage::ProfileStore;

/// A forecast together with the month roll-up and per-pot progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastReport {
    pub forecast: MonthForecast,
    pub totals: MonthTotals,
    pub pot_progress: Vec<PotProgress>,
}

pub struct ForecastService;

impl ForecastService {
    /// Forecasts the month containing `month` using the default options.
    pub fn forecast(profile: &UserProfile, month: NaiveDate) -> ServiceResult<ForecastReport> {
        Self::forecast_with_config(profile, month, &Config::default())
    }

    pub fn forecast_with_config(
        profile: &UserProfile,
        month: NaiveDate,
        config: &Config,
    ) -> ServiceResult<ForecastReport> {
        if !config.warning_threshold.is_finite() {
            return Err(ServiceError::Invalid(format!(
                "warning threshold must be a finite number (got {})",
                config.warning_threshold
            )));
        }
        let forecaster = MonthForecaster::new(config.forecast_options());
        let forecast = forecaster.forecast(profile, month)?;
        let totals = forecast.totals();
        let pot_progress = forecast.pot_progress(&profile.pots);
        if totals.shortfall_count > 0 {
            warn!(
                month = %forecast.month.format("%Y-%m"),
                shortfalls = totals.shortfall_count,
                "Forecast contains unpaid expenses"
            );
        }
        Ok(ForecastReport {
            forecast,
            totals,
            pot_progress,
        })
    }

    /// Loads a named profile from `store` and forecasts it.
    pub fn forecast_stored(
        store: &dyn ProfileStore,
        name: &str,
        month: NaiveDate,
        config: &Config,
    ) -> ServiceResult<ForecastReport> {
        let profile = store.load(name)?;
        info!(profile = name, "Forecasting stored profile");
        Self::forecast_with_config(&profile, month, config)
    }
}
