//! The user's financial snapshot for one forecast run.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{expense::Expense, pot::Pot};
use crate::errors::{ForecastError, ForecastResult};

/// Static description of a user's finances. Never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub starting_balance: f64,
    pub income_type: IncomeType,
    pub income_amount: f64,
    #[serde(default)]
    pub pots: Vec<Pot>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl UserProfile {
    pub fn new(starting_balance: f64, income_type: IncomeType, income_amount: f64) -> Self {
        Self {
            starting_balance,
            income_type,
            income_amount,
            pots: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Appends a pot and returns its identifier for wiring expenses.
    pub fn add_pot(&mut self, pot: Pot) -> Uuid {
        let id = pot.id;
        self.pots.push(pot);
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Income credited on every simulated day.
    pub fn daily_income(&self) -> f64 {
        self.income_type.daily_share(self.income_amount)
    }

    /// Checks the snapshot for caller bugs that would make a forecast meaningless.
    pub fn validate(&self) -> ForecastResult<()> {
        ensure_finite("starting balance", self.starting_balance)?;
        ensure_finite("income amount", self.income_amount)?;

        let mut seen = HashSet::new();
        for pot in &self.pots {
            if !seen.insert(pot.id) {
                return Err(ForecastError::Validation(format!(
                    "duplicate pot id {} ({})",
                    pot.id, pot.name
                )));
            }
            ensure_finite(&format!("target of pot `{}`", pot.name), pot.target_amount)?;
            ensure_finite(&format!("balance of pot `{}`", pot.name), pot.current_balance)?;
            if pot.target_amount < 0.0 {
                return Err(ForecastError::Validation(format!(
                    "pot `{}` has a negative target",
                    pot.name
                )));
            }
            if pot.current_balance < 0.0 {
                return Err(ForecastError::Validation(format!(
                    "pot `{}` has a negative balance",
                    pot.name
                )));
            }
        }

        for expense in &self.expenses {
            if !seen.contains(&expense.pot_id) {
                return Err(ForecastError::UnknownPot {
                    expense: expense.name.clone(),
                    pot_id: expense.pot_id,
                });
            }
            ensure_finite(&format!("amount of expense `{}`", expense.name), expense.amount)?;
            if expense.amount <= 0.0 {
                return Err(ForecastError::Validation(format!(
                    "expense `{}` must have a positive amount",
                    expense.name
                )));
            }
            if expense.frequency.requires_due_date() && expense.due_date.is_none() {
                return Err(ForecastError::Validation(format!(
                    "{} expense `{}` needs a due date",
                    expense.frequency, expense.name
                )));
            }
        }
        Ok(())
    }
}

fn ensure_finite(label: &str, value: f64) -> ForecastResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ForecastError::Validation(format!("{label} is not a finite number")))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeType {
    Daily,
    Weekly,
    Monthly,
}

impl IncomeType {
    /// Flat per-day share of the income. Weeks count as 7 days and months as 30.
    pub fn daily_share(self, amount: f64) -> f64 {
        match self {
            IncomeType::Daily => amount,
            IncomeType::Weekly => amount / 7.0,
            IncomeType::Monthly => amount / 30.0,
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeType::Daily => "daily",
            IncomeType::Weekly => "weekly",
            IncomeType::Monthly => "monthly",
        };
        f.write_str(label)
    }
}
