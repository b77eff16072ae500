mod common;

use cashflow_core::{
    config::Config,
    init,
    services::ForecastService,
    storage::{JsonProfileStore, ProfileStore},
};

use common::{date, household_profile, temp_dir};

#[test]
fn stored_profile_forecast_smoke() {
    init();

    let store = JsonProfileStore::new(Some(temp_dir())).expect("profile store");
    let profile = household_profile();
    store.save(&profile, "Household").expect("save profile");

    let report =
        ForecastService::forecast_stored(&store, "household", date(2025, 4, 1), &Config::default())
            .expect("forecast stored profile");

    assert_eq!(report.forecast.daily_plans.len(), 30);
    assert_eq!(report.pot_progress.len(), profile.pots.len());
    let rent = report
        .pot_progress
        .iter()
        .find(|pot| pot.name == "Rent")
        .expect("rent pot");
    assert_eq!(rent.opening_balance, 0.0);
    assert!(rent.closing_balance <= rent.target_amount);
}
