//! Command-line front end: `cashflow_core_cli [PROFILE] [YYYY-MM] [--json] [--plain]`.

pub mod render;

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, ConfigManager};
use crate::currency::CurrencyFormat;
use crate::errors::ProfileError;
use crate::services::{ForecastService, ServiceError};
use crate::storage::load_profile_from_path;

pub use render::Renderer;

pub const USAGE: &str = "usage: cashflow_core_cli [PROFILE.json] [YYYY-MM] [--json] [--plain]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0} (see --help)")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub profile: Option<PathBuf>,
    pub month: Option<NaiveDate>,
    pub json: bool,
    pub plain: bool,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        for arg in args.into_iter().map(Into::into) {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--plain" => parsed.plain = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown flag `{flag}`")));
                }
                value => {
                    if let Some(month) = parse_month(value) {
                        if parsed.month.replace(month).is_some() {
                            return Err(CliError::Usage("month given twice".into()));
                        }
                    } else if parsed.profile.replace(PathBuf::from(value)).is_some() {
                        return Err(CliError::Usage("profile given twice".into()));
                    }
                }
            }
        }
        Ok(parsed)
    }
}

/// Accepts `YYYY-MM`, returning the first day of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// Runs one forecast and returns the text to print.
pub fn run(args: CliArgs) -> Result<String, CliError> {
    if args.help {
        return Ok(USAGE.to_string());
    }
    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    let path = args
        .profile
        .or_else(|| config.last_profile.clone())
        .ok_or_else(|| CliError::Usage("no profile given and none remembered".into()))?;
    let month = args.month.unwrap_or_else(|| Utc::now().date_naive());
    debug!(profile = %path.display(), %month, "Running forecast");

    let profile = load_profile_from_path(&path)?;
    let report = ForecastService::forecast_with_config(&profile, month, &config)?;

    if config.last_profile.as_ref() != Some(&path) {
        config.last_profile = Some(path);
        manager.save(&config)?;
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let color = config.ui_color_enabled && !args.plain;
    let renderer = Renderer::new(CurrencyFormat::with_symbol(config.currency_symbol), color);
    Ok(renderer.render(&report))
}

pub fn run_cli() -> Result<(), CliError> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    let output = run(args)?;
    println!("{output}");
    Ok(())
}
