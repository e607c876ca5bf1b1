use tracing::debug;

use crate::models::{
    Advice, ComponentForecasts, ForecastMethod, NavSeries, PredictionModel, PredictionResult,
    SupportingStats,
};
use crate::services::indicators::{
    ema_forecast, linear_regression_forecast, momentum, polynomial_regression_forecast,
    regression_trend, rsi, volatility, wma_forecast,
};
use crate::services::recommendation_service::{classify, classify_slope, classify_step};

/// Series shorter than this use the one-step basic fallback
pub const MIN_FULL_MODEL_POINTS: usize = 10;

pub const EMA_PERIOD: usize = 12;
pub const WMA_PERIOD: usize = 10;
pub const MOMENTUM_LOOKBACK: usize = 14;
pub const RSI_PERIOD: usize = 14;

pub const POLYNOMIAL_WEIGHT: f64 = 0.4;
pub const WMA_WEIGHT: f64 = 0.3;
pub const EMA_WEIGHT: f64 = 0.2;
pub const LINEAR_WEIGHT: f64 = 0.1;

pub const CONFIDENCE_FLOOR: u8 = 65;
pub const CONFIDENCE_CEILING: u8 = 95;
pub const BASIC_CONFIDENCE: u8 = 70;

/// Predict the next NAV with the default ensemble model.
pub fn predict(series: &NavSeries) -> PredictionResult {
    predict_with(series, ForecastMethod::default())
}

/// Predict the next NAV with an explicit forecasting method.
///
/// Series with fewer than [`MIN_FULL_MODEL_POINTS`] points always take the
/// basic fallback regardless of `method`.
pub fn predict_with(series: &NavSeries, method: ForecastMethod) -> PredictionResult {
    let values = series.values();

    let result = if values.len() < MIN_FULL_MODEL_POINTS {
        basic_prediction(&values)
    } else {
        match method {
            ForecastMethod::Ensemble => ensemble_prediction(&values),
            ForecastMethod::LinearTrend => linear_trend_prediction(&values),
        }
    };

    debug!(
        points = values.len(),
        model = ?result.model,
        predicted = result.predicted_value,
        confidence = result.confidence,
        recommendation = %result.recommendation,
        "NAV prediction computed"
    );

    result
}

/// Fixed-weight blend of the four trend forecasts
pub fn fuse_forecasts(forecasts: &ComponentForecasts) -> f64 {
    forecasts.polynomial * POLYNOMIAL_WEIGHT
        + forecasts.wma * WMA_WEIGHT
        + forecasts.ema * EMA_WEIGHT
        + forecasts.linear * LINEAR_WEIGHT
}

/// Confidence from trend strength, dispersion and sample size, clamped to
/// [`CONFIDENCE_FLOOR`, `CONFIDENCE_CEILING`].
pub fn confidence_score(momentum: f64, volatility: f64, last_value: f64, points: usize) -> u8 {
    let trend_strength = momentum.abs() / last_value;
    let volatility_score = 1.0 - (volatility / 50.0).min(1.0);
    let data_quality = (points as f64 / 60.0).min(1.0);

    let raw = (trend_strength * 30.0 + volatility_score * 40.0 + data_quality * 30.0).round();

    raw.clamp(CONFIDENCE_FLOOR as f64, CONFIDENCE_CEILING as f64) as u8
}

pub fn percent_change(predicted: f64, last_value: f64) -> f64 {
    (predicted - last_value) / last_value * 100.0
}

pub fn supporting_stats(values: &[f64]) -> SupportingStats {
    SupportingStats {
        momentum: momentum(values, MOMENTUM_LOOKBACK),
        rsi: rsi(values, RSI_PERIOD),
        volatility: volatility(values),
    }
}

pub fn component_forecasts(values: &[f64]) -> ComponentForecasts {
    ComponentForecasts {
        polynomial: polynomial_regression_forecast(values),
        wma: wma_forecast(values, WMA_PERIOD),
        ema: ema_forecast(values, EMA_PERIOD),
        linear: linear_regression_forecast(values),
    }
}

fn ensemble_prediction(values: &[f64]) -> PredictionResult {
    let last_value = values[values.len() - 1];

    let forecasts = component_forecasts(values);
    let stats = supporting_stats(values);

    let predicted_value = fuse_forecasts(&forecasts);
    let change = percent_change(predicted_value, last_value);
    let advice = classify(change, stats.rsi, stats.momentum, stats.volatility);

    build_result(
        predicted_value,
        confidence_score(stats.momentum, stats.volatility, last_value, values.len()),
        advice,
        change,
        PredictionModel::Ensemble,
        stats,
        Some(forecasts),
    )
}

fn linear_trend_prediction(values: &[f64]) -> PredictionResult {
    let last_value = values[values.len() - 1];

    let (slope, _) = regression_trend(values);
    let stats = supporting_stats(values);

    let predicted_value = linear_regression_forecast(values);

    build_result(
        predicted_value,
        confidence_score(stats.momentum, stats.volatility, last_value, values.len()),
        classify_slope(slope),
        percent_change(predicted_value, last_value),
        PredictionModel::LinearTrend,
        stats,
        None,
    )
}

/// One-step extrapolation: `last + (last - second_last)`.
fn basic_prediction(values: &[f64]) -> PredictionResult {
    let current = values[values.len() - 1];
    // A single point has no previous step
    let previous = if values.len() >= 2 {
        values[values.len() - 2]
    } else {
        current
    };
    let step = current - previous;

    build_result(
        current + step,
        BASIC_CONFIDENCE,
        classify_step(step),
        percent_change(current + step, current),
        PredictionModel::Basic,
        supporting_stats(values),
        None,
    )
}

fn build_result(
    predicted_value: f64,
    confidence: u8,
    advice: Advice,
    percent_change: f64,
    model: PredictionModel,
    supporting_stats: SupportingStats,
    component_forecasts: Option<ComponentForecasts>,
) -> PredictionResult {
    PredictionResult {
        predicted_value,
        confidence,
        recommendation: advice.recommendation,
        icon: advice.icon,
        text: advice.text,
        percent_change,
        model,
        supporting_stats,
        component_forecasts,
    }
}
