//! Single-day simulation: income, expense deductions, then pot contributions.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{
    round_currency, DailyPlan, DayStatus, PaidExpense, Pot, PotContribution, UserProfile,
};
use crate::errors::{ForecastError, ForecastResult};

use super::schedule::{contribution_target, expense_due_on};
use super::ForecastOptions;

/// Simulates one day with the default options.
///
/// `pots` is the run's working copy and is updated in place; thread the same
/// slice through every day of one forecast and never share it between runs.
pub fn simulate_day(
    user: &UserProfile,
    date: NaiveDate,
    incoming_balance: f64,
    pots: &mut [Pot],
) -> ForecastResult<DailyPlan> {
    simulate_day_with(user, date, incoming_balance, pots, &ForecastOptions::default())
}

pub fn simulate_day_with(
    user: &UserProfile,
    date: NaiveDate,
    incoming_balance: f64,
    pots: &mut [Pot],
    options: &ForecastOptions,
) -> ForecastResult<DailyPlan> {
    // Every reference is resolved before anything moves so a bad profile leaves pots intact.
    let funding = user
        .expenses
        .iter()
        .map(|expense| {
            pots.iter()
                .position(|pot| pot.id == expense.pot_id)
                .ok_or_else(|| ForecastError::UnknownPot {
                    expense: expense.name.clone(),
                    pot_id: expense.pot_id,
                })
        })
        .collect::<ForecastResult<Vec<usize>>>()?;

    let income = user.daily_income();
    let mut balance = incoming_balance + income;
    let mut expenses_paid = Vec::new();
    let mut shortfall_alerts = Vec::new();

    // Declaration order, not priority order.
    for (expense, &pot_idx) in user.expenses.iter().zip(&funding) {
        if !expense_due_on(expense, date) {
            continue;
        }
        let pot = &mut pots[pot_idx];
        if pot.current_balance >= expense.amount {
            pot.current_balance -= expense.amount;
            balance -= expense.amount;
            expenses_paid.push(PaidExpense {
                expense_id: expense.id,
                name: expense.name.clone(),
                amount: expense.amount,
                pot_id: pot.id,
                pot_name: pot.name.clone(),
            });
        } else {
            warn!(
                %date,
                expense = %expense.name,
                amount = expense.amount,
                pot = %pot.name,
                available = pot.current_balance,
                "Shortfall: pot cannot cover expense"
            );
            shortfall_alerts.push(format!(
                "⚠️ Cannot cover {}: £{}",
                expense.name, expense.amount
            ));
        }
    }

    let mut order: Vec<usize> = (0..pots.len()).collect();
    order.sort_by_key(|&idx| pots[idx].priority);

    let mut pot_contributions = Vec::new();
    for idx in order {
        let pot = &mut pots[idx];
        if pot.is_funded() {
            continue;
        }
        let Some(target) = contribution_target(pot, date) else {
            continue;
        };
        let amount = target.min(pot.remaining()).min(balance);
        if amount <= 0.0 {
            continue;
        }
        pot.current_balance += amount;
        balance -= amount;
        pot_contributions.push(PotContribution {
            pot_id: pot.id,
            pot_name: pot.name.clone(),
            amount,
        });
    }

    let status = DayStatus::classify(balance, options.warning_threshold);
    let balance_after = round_currency(balance);
    debug!(
        %date,
        income,
        paid = expenses_paid.len(),
        contributions = pot_contributions.len(),
        balance_after,
        %status,
        "Simulated day"
    );

    Ok(DailyPlan {
        date,
        incoming_balance,
        income,
        expenses_paid,
        pot_contributions,
        balance_after,
        status,
        shortfall_alerts,
    })
}
