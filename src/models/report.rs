use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ForecastMethod, NavPoint, PredictionResult, TimeRange};

/// Everything the renderer needs to draw one fund's prediction panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundReport {
    pub fund_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub current_value: f64,
    pub risk_label: String,
    pub annual_return: f64,
    pub range: TimeRange,
    pub method: ForecastMethod,
    /// Windowed history for charting
    pub chart: Vec<NavPoint>,
    pub prediction: PredictionResult,
}
