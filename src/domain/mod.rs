//! Pure domain models: pots, expenses, the user profile and forecast records.
//! No I/O and no simulation rules live here.

pub mod common;
pub mod expense;
pub mod plan;
pub mod pot;
pub mod profile;

pub use common::round_currency;
pub use expense::{Expense, ExpenseFrequency};
pub use plan::{
    DailyPlan, DayStatus, LeftoverAllocation, MonthForecast, MonthTotals, PaidExpense,
    PotContribution, PotProgress, WeeklySummary,
};
pub use pot::{ContributionFrequency, Pot, PotKind};
pub use profile::{IncomeType, UserProfile};
