use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::{ForecastMethod, TimeRange};

/// Where the binary reads its NAV data from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single `date,nav` CSV file
    NavCsv(PathBuf),
    /// A JSON array of funds, predicted as a batch
    FundCatalog(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input: InputSource,
    pub range: TimeRange,
    pub method: ForecastMethod,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, so tests don't touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let input = match (non_blank("FUND_CATALOG_PATH"), non_blank("NAV_CSV_PATH")) {
            (Some(catalog), Some(_)) => {
                tracing::warn!("Both FUND_CATALOG_PATH and NAV_CSV_PATH are set; using the catalog");
                InputSource::FundCatalog(PathBuf::from(catalog))
            }
            (Some(catalog), None) => InputSource::FundCatalog(PathBuf::from(catalog)),
            (None, Some(csv)) => InputSource::NavCsv(PathBuf::from(csv)),
            (None, None) => {
                return Err(AppError::Config(
                    "Set NAV_CSV_PATH or FUND_CATALOG_PATH".to_string(),
                ))
            }
        };

        let range = non_blank("NAV_RANGE")
            .map(|tag| TimeRange::parse_lenient(&tag))
            .unwrap_or_default();

        let method = match non_blank("FORECAST_METHOD") {
            Some(name) => name.parse::<ForecastMethod>().map_err(AppError::Config)?,
            None => ForecastMethod::default(),
        };

        Ok(Self { input, range, method })
    }
}
