//! Forecast output records: per-day plans, weekly roll-ups and month views.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::round_currency;
use crate::domain::pot::Pot;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaidExpense {
    pub expense_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub pot_id: Uuid,
    pub pot_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PotContribution {
    pub pot_id: Uuid,
    pub pot_name: String,
    pub amount: f64,
}

/// Health of the running balance at the end of a day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Good,
    Warning,
    Danger,
}

impl DayStatus {
    pub fn classify(balance: f64, warning_threshold: f64) -> DayStatus {
        if balance < 0.0 {
            DayStatus::Danger
        } else if balance < warning_threshold {
            DayStatus::Warning
        } else {
            DayStatus::Good
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::Good => "good",
            DayStatus::Warning => "warning",
            DayStatus::Danger => "danger",
        };
        f.write_str(label)
    }
}

/// One simulated day. Produced once and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub incoming_balance: f64,
    pub income: f64,
    pub expenses_paid: Vec<PaidExpense>,
    pub pot_contributions: Vec<PotContribution>,
    pub balance_after: f64,
    pub status: DayStatus,
    pub shortfall_alerts: Vec<String>,
}

impl DailyPlan {
    pub fn total_expenses(&self) -> f64 {
        self.expenses_paid.iter().map(|paid| paid.amount).sum()
    }

    pub fn total_contributions(&self) -> f64 {
        self.pot_contributions.iter().map(|item| item.amount).sum()
    }

    pub fn has_shortfall(&self) -> bool {
        !self.shortfall_alerts.is_empty()
    }
}

/// Destination label for a week's leftover money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeftoverAllocation {
    #[serde(rename = "Next-Month Pot")]
    NextMonthPot,
    #[serde(rename = "Buffer Pot")]
    BufferPot,
}

impl LeftoverAllocation {
    /// Weeks 1 and 2 feed next month; later weeks feed the buffer.
    pub fn for_week(week_number: u32) -> LeftoverAllocation {
        if week_number <= 2 {
            LeftoverAllocation::NextMonthPot
        } else {
            LeftoverAllocation::BufferPot
        }
    }
}

impl fmt::Display for LeftoverAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeftoverAllocation::NextMonthPot => "Next-Month Pot",
            LeftoverAllocation::BufferPot => "Buffer Pot",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_pot_contributions: f64,
    pub ending_balance: f64,
    pub leftover: f64,
    pub leftover_allocation: LeftoverAllocation,
}

impl WeeklySummary {
    /// Rolls a non-empty run of consecutive days into a summary.
    pub(crate) fn from_days(week_number: u32, days: &[DailyPlan]) -> Option<WeeklySummary> {
        let first = days.first()?;
        let last = days.last()?;
        let total_income: f64 = days.iter().map(|day| day.income).sum();
        let total_expenses: f64 = days.iter().map(DailyPlan::total_expenses).sum();
        let total_pot_contributions: f64 = days.iter().map(DailyPlan::total_contributions).sum();
        let leftover = total_income - total_expenses - total_pot_contributions;
        Some(WeeklySummary {
            week_number,
            start_date: first.date,
            end_date: last.date,
            total_income: round_currency(total_income),
            total_expenses: round_currency(total_expenses),
            total_pot_contributions: round_currency(total_pot_contributions),
            ending_balance: last.balance_after,
            leftover: round_currency(leftover),
            leftover_allocation: LeftoverAllocation::for_week(week_number),
        })
    }

    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Result of forecasting one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthForecast {
    /// First day of the forecast month.
    pub month: NaiveDate,
    pub daily_plans: Vec<DailyPlan>,
    pub weekly_summaries: Vec<WeeklySummary>,
    /// Pot balances after the last simulated day.
    pub closing_pots: Vec<Pot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_pot_contributions: f64,
    pub closing_balance: f64,
    pub lowest_balance: f64,
    pub lowest_balance_date: Option<NaiveDate>,
    pub shortfall_count: usize,
    pub good_days: usize,
    pub warning_days: usize,
    pub danger_days: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PotProgress {
    pub pot_id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub opening_balance: f64,
    pub closing_balance: f64,
    pub funded_this_month: f64,
    pub percent_of_target: f64,
}

impl MonthForecast {
    pub fn plan_for(&self, date: NaiveDate) -> Option<&DailyPlan> {
        self.daily_plans.iter().find(|plan| plan.date == date)
    }

    pub fn shortfall_days(&self) -> impl Iterator<Item = &DailyPlan> {
        self.daily_plans.iter().filter(|plan| plan.has_shortfall())
    }

    pub fn totals(&self) -> MonthTotals {
        let mut totals = MonthTotals {
            total_income: 0.0,
            total_expenses: 0.0,
            total_pot_contributions: 0.0,
            closing_balance: self
                .daily_plans
                .last()
                .map(|plan| plan.balance_after)
                .unwrap_or_default(),
            lowest_balance: f64::INFINITY,
            lowest_balance_date: None,
            shortfall_count: 0,
            good_days: 0,
            warning_days: 0,
            danger_days: 0,
        };
        for plan in &self.daily_plans {
            totals.total_income += plan.income;
            totals.total_expenses += plan.total_expenses();
            totals.total_pot_contributions += plan.total_contributions();
            totals.shortfall_count += plan.shortfall_alerts.len();
            if plan.balance_after < totals.lowest_balance {
                totals.lowest_balance = plan.balance_after;
                totals.lowest_balance_date = Some(plan.date);
            }
            match plan.status {
                DayStatus::Good => totals.good_days += 1,
                DayStatus::Warning => totals.warning_days += 1,
                DayStatus::Danger => totals.danger_days += 1,
            }
        }
        if totals.lowest_balance_date.is_none() {
            totals.lowest_balance = totals.closing_balance;
        }
        totals.total_income = round_currency(totals.total_income);
        totals.total_expenses = round_currency(totals.total_expenses);
        totals.total_pot_contributions = round_currency(totals.total_pot_contributions);
        totals
    }

    /// Compares closing pot balances against the opening snapshot they were cloned from.
    pub fn pot_progress(&self, opening: &[Pot]) -> Vec<PotProgress> {
        self.closing_pots
            .iter()
            .map(|pot| {
                let opening_balance = opening
                    .iter()
                    .find(|candidate| candidate.id == pot.id)
                    .map(|candidate| candidate.current_balance)
                    .unwrap_or_default();
                let percent_of_target = if pot.target_amount > 0.0 {
                    round_currency(pot.current_balance / pot.target_amount * 100.0)
                } else {
                    100.0
                };
                PotProgress {
                    pot_id: pot.id,
                    name: pot.name.clone(),
                    target_amount: pot.target_amount,
                    opening_balance,
                    closing_balance: round_currency(pot.current_balance),
                    funded_this_month: round_currency(pot.current_balance - opening_balance),
                    percent_of_target,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, income: f64, balance_after: f64) -> DailyPlan {
        DailyPlan {
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            incoming_balance: 0.0,
            income,
            expenses_paid: Vec::new(),
            pot_contributions: Vec::new(),
            balance_after,
            status: DayStatus::classify(balance_after, 100.0),
            shortfall_alerts: Vec::new(),
        }
    }

    #[test]
    fn status_thresholds_are_absolute() {
        assert_eq!(DayStatus::classify(-0.01, 100.0), DayStatus::Danger);
        assert_eq!(DayStatus::classify(0.0, 100.0), DayStatus::Warning);
        assert_eq!(DayStatus::classify(99.99, 100.0), DayStatus::Warning);
        assert_eq!(DayStatus::classify(100.0, 100.0), DayStatus::Good);
    }

    #[test]
    fn leftover_label_switches_after_second_week() {
        assert_eq!(LeftoverAllocation::for_week(1), LeftoverAllocation::NextMonthPot);
        assert_eq!(LeftoverAllocation::for_week(2), LeftoverAllocation::NextMonthPot);
        assert_eq!(LeftoverAllocation::for_week(3), LeftoverAllocation::BufferPot);
        assert_eq!(LeftoverAllocation::for_week(6).to_string(), "Buffer Pot");
        assert_eq!(
            serde_json::to_string(&LeftoverAllocation::NextMonthPot).unwrap(),
            "\"Next-Month Pot\""
        );
    }

    #[test]
    fn weekly_summary_spans_buffered_days() {
        let days = vec![day(2, 50.0, 150.0), day(3, 50.0, 200.0), day(4, 50.0, 250.0)];
        let summary = WeeklySummary::from_days(3, &days).expect("non-empty week");
        assert_eq!(summary.start_date, days[0].date);
        assert_eq!(summary.end_date, days[2].date);
        assert_eq!(summary.day_count(), 3);
        assert_eq!(summary.total_income, 150.0);
        assert_eq!(summary.leftover, 150.0);
        assert_eq!(summary.ending_balance, 250.0);
        assert_eq!(summary.leftover_allocation, LeftoverAllocation::BufferPot);
    }

    #[test]
    fn empty_week_produces_no_summary() {
        assert!(WeeklySummary::from_days(1, &[]).is_none());
    }
}
