use serde::{Deserialize, Serialize};

use crate::models::Recommendation;

/// Forecasting algorithm requested by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// Weighted blend of polynomial, WMA, EMA and linear forecasts
    #[default]
    Ensemble,
    /// Single linear regression with the slope-based classifier
    LinearTrend,
}

impl ForecastMethod {
    pub fn description(&self) -> &'static str {
        match self {
            ForecastMethod::Ensemble => {
                "Weighted blend of polynomial, weighted moving average, exponential moving average and linear forecasts"
            }
            ForecastMethod::LinearTrend => {
                "Linear trend extrapolation based on historical NAV"
            }
        }
    }
}

impl std::str::FromStr for ForecastMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ensemble" => Ok(ForecastMethod::Ensemble),
            "linear_trend" | "linear" => Ok(ForecastMethod::LinearTrend),
            other => Err(format!(
                "Unknown forecast method '{}'. Must be 'ensemble' or 'linear_trend'",
                other
            )),
        }
    }
}

/// Which code path produced a prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictionModel {
    /// One-step extrapolation used when the series is too short
    Basic,
    Ensemble,
    LinearTrend,
}

/// Oscillator and dispersion readings behind a prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportingStats {
    pub momentum: f64,
    pub rsi: f64,
    pub volatility: f64,
}

/// Individual trend forecasts fed into the ensemble blend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentForecasts {
    pub polynomial: f64,
    pub wma: f64,
    pub ema: f64,
    pub linear: f64,
}

/// Next-period NAV estimate with confidence and advice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub predicted_value: f64,

    /// Heuristic score, 0-100
    pub confidence: u8,

    pub recommendation: Recommendation,
    pub icon: &'static str,
    pub text: &'static str,

    /// (predicted - last) / last * 100
    pub percent_change: f64,

    pub model: PredictionModel,
    pub supporting_stats: SupportingStats,

    /// Only present on the ensemble path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_forecasts: Option<ComponentForecasts>,
}
