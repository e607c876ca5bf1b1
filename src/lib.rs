//! NAV prediction engine for mutual-fund analytics.
//!
//! Given an ordered NAV history the engine produces a next-period estimate,
//! a bounded confidence score and a buy/hold/sell recommendation. All
//! computations are pure: the same series always yields the same result.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

pub use errors::AppError;
pub use models::{
    ForecastMethod, Fund, FundReport, NavPoint, NavSeries, PredictionResult, Recommendation,
    TimeRange,
};
pub use services::prediction_service::{predict, predict_with};
pub use services::range_filter::filter_by_range;
