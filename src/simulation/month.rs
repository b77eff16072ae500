//! Month forecasting: threads the running balance and pot state through every day.

use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::domain::{DailyPlan, MonthForecast, UserProfile, WeeklySummary};
use crate::errors::ForecastResult;

use super::daily::simulate_day_with;
use super::schedule::{closes_week, month_bounds};
use super::ForecastOptions;

/// Forecasts the month containing `month` with the default options.
pub fn forecast_month(user: &UserProfile, month: NaiveDate) -> ForecastResult<MonthForecast> {
    MonthForecaster::default().forecast(user, month)
}

#[derive(Debug, Clone, Default)]
pub struct MonthForecaster {
    options: ForecastOptions,
}

impl MonthForecaster {
    pub fn new(options: ForecastOptions) -> Self {
        Self { options }
    }

    pub fn forecast(&self, user: &UserProfile, month: NaiveDate) -> ForecastResult<MonthForecast> {
        user.validate()?;
        let (first, last) = month_bounds(month);

        // The working copy is owned by this run; the caller's profile is never touched.
        let mut pots = user.pots.clone();
        let mut daily_plans: Vec<DailyPlan> = Vec::new();
        let mut weekly_summaries = Vec::new();
        let mut week_start = 0usize;
        let mut balance = user.starting_balance;

        let mut date = first;
        while date <= last {
            let plan = simulate_day_with(user, date, balance, &mut pots, &self.options)?;
            balance = plan.balance_after;
            daily_plans.push(plan);

            if closes_week(date, last) {
                let week_number = weekly_summaries.len() as u32 + 1;
                if let Some(summary) =
                    WeeklySummary::from_days(week_number, &daily_plans[week_start..])
                {
                    weekly_summaries.push(summary);
                }
                week_start = daily_plans.len();
            }
            date += Duration::days(1);
        }

        let forecast = MonthForecast {
            month: first,
            daily_plans,
            weekly_summaries,
            closing_pots: pots,
        };
        info!(
            month = %first.format("%Y-%m"),
            days = forecast.daily_plans.len(),
            weeks = forecast.weekly_summaries.len(),
            shortfalls = forecast.shortfall_days().count(),
            closing_balance = balance,
            "Month forecast complete"
        );
        Ok(forecast)
    }
}
