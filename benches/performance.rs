use cashflow_core::domain::{
    ContributionFrequency, Expense, ExpenseFrequency, IncomeType, Pot, UserProfile,
};
use cashflow_core::forecast_month;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_sample_profile(pot_count: usize, expenses_per_pot: usize) -> UserProfile {
    let mut profile = UserProfile::new(1500.0, IncomeType::Monthly, 4200.0);
    let frequencies = [
        ContributionFrequency::Daily,
        ContributionFrequency::Weekly,
        ContributionFrequency::Monthly,
        ContributionFrequency::BiWeekly,
        ContributionFrequency::Flexible,
    ];
    let cadences = [
        ExpenseFrequency::Daily,
        ExpenseFrequency::Weekly,
        ExpenseFrequency::BiWeekly,
        ExpenseFrequency::Monthly,
        ExpenseFrequency::OneTime,
    ];
    let due = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    for idx in 0..pot_count {
        let pot = Pot::new(
            format!("Pot {idx}"),
            100.0 + (idx % 50) as f64 * 20.0,
            (idx % 7) as i32,
            frequencies[idx % frequencies.len()],
        )
        .with_balance((idx % 10) as f64 * 15.0);
        let pot_id = profile.add_pot(pot);
        for n in 0..expenses_per_pot {
            let cadence = cadences[(idx + n) % cadences.len()];
            let mut expense = Expense::new(
                format!("Expense {idx}-{n}"),
                5.0 + (n % 20) as f64,
                cadence,
                pot_id,
            );
            if cadence.requires_due_date() {
                expense = expense.due_on(due);
            }
            profile.add_expense(expense);
        }
    }
    profile
}

fn bench_forecast(c: &mut Criterion) {
    let month = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let small = build_sample_profile(8, 3);
    c.bench_function("forecast_month_small", |b| {
        b.iter(|| {
            let forecast = forecast_month(black_box(&small), month).expect("forecast");
            black_box(forecast);
        })
    });

    let large = build_sample_profile(500, 10);
    c.bench_function("forecast_month_500_pots", |b| {
        b.iter(|| {
            let forecast = forecast_month(black_box(&large), month).expect("forecast");
            black_box(forecast);
        })
    });
}

criterion_group!(benches, bench_forecast);
criterion_main!(benches);
