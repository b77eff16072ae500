//! Presentation helpers for monetary amounts.

use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences for amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "£".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl CurrencyFormat {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Renders `amount` with two decimals, sign first: `-£1,204.50`.
    pub fn format(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let fraction = cents % 100;
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{sign}{}{}{}{:02}",
            self.symbol,
            group_digits(whole, self.grouping_separator),
            self.decimal_separator,
            fraction
        )
    }
}

pub fn format_amount(amount: f64, symbol: &str) -> String {
    CurrencyFormat::with_symbol(symbol).format(amount)
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_sign() {
        assert_eq!(format_amount(1204.5, "£"), "£1,204.50");
        assert_eq!(format_amount(-12.346, "£"), "-£12.35");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(-0.001, "£"), "£0.00");
        assert_eq!(format_amount(1_000_000.0, "€"), "€1,000,000.00");
    }

    #[test]
    fn honours_custom_separators() {
        let format = CurrencyFormat {
            symbol: "€".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(format.format(9876.5), "€9.876,50");
    }
}
