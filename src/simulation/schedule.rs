//! Calendar rules deciding which expenses fall due and which pots get funded on a date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::domain::{ContributionFrequency, Expense, ExpenseFrequency, Pot};

/// Days of the month on which bi-weekly expenses may fall (when they are Fridays).
const BI_WEEKLY_ANCHOR_DAYS: [u32; 2] = [4, 18];
/// Daily and monthly pots spread their target over a flat 30-day month.
const DAYS_PER_FUNDING_MONTH: f64 = 30.0;
const WEEKS_PER_FUNDING_MONTH: f64 = 4.0;

pub fn expense_due_on(expense: &Expense, date: NaiveDate) -> bool {
    match expense.frequency {
        ExpenseFrequency::Daily => true,
        ExpenseFrequency::Weekly => date.weekday() == Weekday::Mon,
        ExpenseFrequency::BiWeekly => {
            date.weekday() == Weekday::Fri && BI_WEEKLY_ANCHOR_DAYS.contains(&date.day())
        }
        ExpenseFrequency::Monthly | ExpenseFrequency::OneTime => expense.due_date == Some(date),
    }
}

/// The slice of a pot's target it should receive on `date`, if it is funded that day.
pub fn contribution_target(pot: &Pot, date: NaiveDate) -> Option<f64> {
    match pot.frequency {
        ContributionFrequency::Daily | ContributionFrequency::Monthly => {
            Some(pot.target_amount / DAYS_PER_FUNDING_MONTH)
        }
        ContributionFrequency::Weekly if date.weekday() == Weekday::Mon => {
            Some(pot.target_amount / WEEKS_PER_FUNDING_MONTH)
        }
        ContributionFrequency::Weekly
        | ContributionFrequency::BiWeekly
        | ContributionFrequency::Flexible => None,
    }
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    let last = first + Duration::days(i64::from(days_in_month(date.year(), date.month())) - 1);
    (first, last)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match (
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(first_next), Some(first)) => (first_next - first).num_days() as u32,
        _ => 30,
    }
}

/// Weeks close on Sundays and on the last day of the month.
pub fn closes_week(date: NaiveDate, month_end: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun || date == month_end
}
