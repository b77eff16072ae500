#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use cashflow_core::domain::{
    ContributionFrequency, Expense, ExpenseFrequency, IncomeType, Pot, PotKind, UserProfile,
};
use cashflow_core::storage::save_profile_to_path;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// A household with every contribution and expense cadence represented.
pub fn household_profile() -> UserProfile {
    let mut profile = UserProfile::new(300.0, IncomeType::Weekly, 650.0);

    let rent = profile.add_pot(
        Pot::new("Rent", 950.0, 1, ContributionFrequency::Monthly).with_kind(PotKind::Essential),
    );
    let bills = profile.add_pot(
        Pot::new("Bills", 240.0, 2, ContributionFrequency::Weekly)
            .with_balance(60.0)
            .with_kind(PotKind::Essential),
    );
    let travel = profile.add_pot(
        Pot::new("Travel", 0.0, 4, ContributionFrequency::Flexible)
            .with_balance(400.0)
            .with_kind(PotKind::Essential),
    );
    profile.add_pot(
        Pot::new("Card", 300.0, 3, ContributionFrequency::BiWeekly).with_kind(PotKind::Debt),
    );
    profile.add_pot(
        Pot::new("Holiday", 600.0, 5, ContributionFrequency::Daily).with_kind(PotKind::Savings),
    );

    profile.add_expense(
        Expense::new("Rent", 950.0, ExpenseFrequency::Monthly, rent).due_on(date(2025, 4, 28)),
    );
    profile.add_expense(Expense::new("Petrol", 8.0, ExpenseFrequency::Daily, travel));
    profile.add_expense(Expense::new("Phone", 35.0, ExpenseFrequency::Weekly, bills));
    profile.add_expense(Expense::new("Cleaner", 40.0, ExpenseFrequency::BiWeekly, bills));
    profile.add_expense(
        Expense::new("Birthday", 60.0, ExpenseFrequency::OneTime, bills).due_on(date(2025, 4, 15)),
    );
    profile
}

/// Writes `profile` as JSON into a fresh temp directory and returns the file path.
pub fn write_profile(profile: &UserProfile) -> PathBuf {
    let path = temp_dir().join("profile.json");
    save_profile_to_path(profile, &path).expect("save profile");
    path
}
