//! Recurring and one-off expenses paid out of pots.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub frequency: ExpenseFrequency,
    /// Only meaningful for `monthly` and `one-time` expenses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub pot_id: Uuid,
    #[serde(default)]
    pub priority: i32,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: ExpenseFrequency,
        pot_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            frequency,
            due_date: None,
            pot_id,
            priority: 0,
        }
    }

    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseFrequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    OneTime,
}

impl ExpenseFrequency {
    /// Whether an expense with this cadence is pinned to a concrete due date.
    pub fn requires_due_date(self) -> bool {
        matches!(self, ExpenseFrequency::Monthly | ExpenseFrequency::OneTime)
    }
}

impl fmt::Display for ExpenseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseFrequency::Daily => "daily",
            ExpenseFrequency::Weekly => "weekly",
            ExpenseFrequency::BiWeekly => "bi-weekly",
            ExpenseFrequency::Monthly => "monthly",
            ExpenseFrequency::OneTime => "one-time",
        };
        f.write_str(label)
    }
}
