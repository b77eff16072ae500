use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::currency::CurrencyFormat;
use crate::domain::{DailyPlan, DayStatus};
use crate::services::ForecastReport;

/// Turns a forecast report into terminal text.
pub struct Renderer {
    currency: CurrencyFormat,
    color: bool,
}

impl Renderer {
    pub fn new(currency: CurrencyFormat, color: bool) -> Self {
        Self { currency, color }
    }

    pub fn render(&self, report: &ForecastReport) -> String {
        let mut out = String::new();
        let forecast = &report.forecast;

        let _ = writeln!(
            out,
            "{}",
            self.header(&format!("Forecast for {}", forecast.month.format("%B %Y")))
        );
        let _ = writeln!(
            out,
            "{:<14} {:>12} {:>12} {:>12} {:>13}  {}",
            "Date", "Income", "Expenses", "To pots", "Balance", "Status"
        );
        for plan in &forecast.daily_plans {
            self.render_day(&mut out, plan);
        }

        let _ = writeln!(out, "\n{}", self.header("Weekly summaries"));
        for week in &forecast.weekly_summaries {
            let _ = writeln!(
                out,
                "Week {} ({} to {}): income {}, expenses {}, to pots {}, leftover {} -> {}, balance {}",
                week.week_number,
                week.start_date.format("%d %b"),
                week.end_date.format("%d %b"),
                self.money(week.total_income),
                self.money(week.total_expenses),
                self.money(week.total_pot_contributions),
                self.money(week.leftover),
                week.leftover_allocation,
                self.money(week.ending_balance),
            );
        }

        let _ = writeln!(out, "\n{}", self.header("Pots"));
        for pot in &report.pot_progress {
            let _ = writeln!(
                out,
                "{:<20} {} / {} ({:.1}%), +{} this month",
                pot.name,
                self.money(pot.closing_balance),
                self.money(pot.target_amount),
                pot.percent_of_target,
                self.money(pot.funded_this_month),
            );
        }

        let totals = &report.totals;
        let _ = writeln!(out, "\n{}", self.header("Month"));
        let _ = writeln!(out, "Income:        {}", self.money(totals.total_income));
        let _ = writeln!(out, "Expenses:      {}", self.money(totals.total_expenses));
        let _ = writeln!(
            out,
            "To pots:       {}",
            self.money(totals.total_pot_contributions)
        );
        let _ = writeln!(out, "Closing:       {}", self.money(totals.closing_balance));
        if let Some(date) = totals.lowest_balance_date {
            let _ = writeln!(
                out,
                "Lowest:        {} on {}",
                self.money(totals.lowest_balance),
                date.format("%d %b")
            );
        }
        let _ = writeln!(
            out,
            "Days:          {} good, {} warning, {} danger",
            totals.good_days, totals.warning_days, totals.danger_days
        );
        let shortfalls = format!("Shortfalls:    {}", totals.shortfall_count);
        let _ = writeln!(
            out,
            "{}",
            if totals.shortfall_count > 0 {
                self.paint(&shortfalls, DayStatus::Danger)
            } else {
                self.paint(&shortfalls, DayStatus::Good)
            }
        );
        out
    }

    fn render_day(&self, out: &mut String, plan: &DailyPlan) {
        let _ = writeln!(
            out,
            "{:<14} {:>12} {:>12} {:>12} {:>13}  {}",
            plan.date.format("%a %d %b").to_string(),
            self.money(plan.income),
            self.money(plan.total_expenses()),
            self.money(plan.total_contributions()),
            self.money(plan.balance_after),
            self.paint(&plan.status.to_string(), plan.status),
        );
        for alert in &plan.shortfall_alerts {
            let _ = writeln!(out, "    {}", self.paint(alert, DayStatus::Danger));
        }
    }

    fn money(&self, amount: f64) -> String {
        self.currency.format(amount)
    }

    fn header(&self, title: &str) -> String {
        let text = format!("=== {} ===", title);
        if self.color {
            text.as_str().bold().to_string()
        } else {
            text
        }
    }

    fn paint(&self, text: &str, status: DayStatus) -> ColoredString {
        if !self.color {
            return text.normal();
        }
        match status {
            DayStatus::Good => text.green(),
            DayStatus::Warning => text.yellow(),
            DayStatus::Danger => text.red().bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ContributionFrequency, Expense, ExpenseFrequency, IncomeType, Pot, UserProfile,
    };
    use crate::services::ForecastService;
    use chrono::NaiveDate;

    #[test]
    fn plain_render_lists_days_weeks_and_alerts() {
        let mut profile = UserProfile::new(300.0, IncomeType::Daily, 50.0);
        let bills = profile.add_pot(Pot::new("Bills", 0.0, 1, ContributionFrequency::Flexible));
        profile.add_expense(Expense::new("Phone", 25.0, ExpenseFrequency::Weekly, bills));
        let month = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let report = ForecastService::forecast(&profile, month).expect("report");

        let text = Renderer::new(CurrencyFormat::default(), false).render(&report);

        assert!(text.contains("=== Forecast for September 2025 ==="));
        assert!(text.contains("Mon 01 Sep"));
        assert!(text.contains("⚠️ Cannot cover Phone: £25"));
        assert!(text.contains("Week 5 (29 Sep to 30 Sep)"));
        assert!(text.contains("Shortfalls:    5"));
        assert!(!text.contains('\u{1b}'));
    }
}
