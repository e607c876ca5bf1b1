/// Prediction engine behaviour tests
///
/// Exercises the public API end to end: range filtering, model selection,
/// the ensemble blend, confidence bounds and recommendation rules.

use chrono::{Months, NaiveDate};
use fund_predictor::models::{NavPoint, NavSeries, PredictionModel, Recommendation, TimeRange};
use fund_predictor::services::indicators::{
    ema_forecast, linear_regression_forecast, momentum, polynomial_regression_forecast, rsi,
    volatility, wma_forecast,
};
use fund_predictor::services::prediction_service::{
    confidence_score, percent_change, BASIC_CONFIDENCE,
};
use fund_predictor::services::range_filter::filter_by_range;
use fund_predictor::services::recommendation_service::classify;
use fund_predictor::{predict, predict_with, ForecastMethod};
use proptest::prelude::*;

fn monthly_series(values: &[f64]) -> NavSeries {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| NavPoint::new(start + Months::new(i as u32), v))
        .collect();
    NavSeries::new(points).unwrap()
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

#[cfg(test)]
mod range_filter {
    use super::*;

    fn sixty() -> NavSeries {
        let values: Vec<f64> = (0..60).map(|i| 120.0 + (i as f64 * 0.37).sin() * 4.0).collect();
        monthly_series(&values)
    }

    #[test]
    fn test_trailing_window_lengths() {
        let s = sixty();
        assert_eq!(filter_by_range(&s, TimeRange::OneMonth).len(), 1);
        assert_eq!(filter_by_range(&s, TimeRange::ThreeMonths).len(), 3);
        assert_eq!(filter_by_range(&s, TimeRange::OneYear).len(), 12);
        assert_eq!(filter_by_range(&s, TimeRange::All).len(), 60);
    }

    #[test]
    fn test_all_after_window_is_idempotent() {
        let s = sixty();
        let one_month = filter_by_range(&s, TimeRange::OneMonth);
        assert_eq!(filter_by_range(&one_month, TimeRange::All), one_month);
    }

    #[test]
    fn test_unrecognised_tag_keeps_full_series() {
        let s = sixty();
        let range: TimeRange = "quarterly".parse().unwrap();
        assert_eq!(filter_by_range(&s, range), s);
    }
}

// ---------------------------------------------------------------------------
// Indicator edge cases
// ---------------------------------------------------------------------------

#[cfg(test)]
mod indicator_edges {
    use super::*;

    #[test]
    fn test_rsi_all_gains_fifteen_points() {
        let values: Vec<f64> = (1..=15).map(|i| i as f64 * 3.0).collect();
        assert_eq!(rsi(&values, 14), 100.0);
    }

    #[test]
    fn test_polynomial_three_points_equals_linear() {
        let values = [10.0, 10.4, 11.3];
        let poly = polynomial_regression_forecast(&values);
        assert!(poly.is_finite());
        assert_eq!(poly, linear_regression_forecast(&values));
    }

    #[test]
    fn test_no_nan_on_flat_series() {
        let flat = [25.0; 20];
        assert_eq!(rsi(&flat, 14), 100.0);
        assert_eq!(volatility(&flat), 0.0);
        assert!(polynomial_regression_forecast(&flat).is_finite());

        let result = predict(&monthly_series(&flat));
        assert!(result.predicted_value.is_finite());
        assert!(result.percent_change.is_finite());
    }
}

// ---------------------------------------------------------------------------
// Recommendation precedence
// ---------------------------------------------------------------------------

#[cfg(test)]
mod recommendation_rules {
    use super::*;

    #[test]
    fn test_strong_buy_checked_before_buy() {
        let advice = classify(3.0, 60.0, 1.0, 10.0);
        assert_eq!(advice.recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_sell_checked_before_volatility_hold() {
        let advice = classify(-2.5, 50.0, -1.0, 40.0);
        assert_eq!(advice.recommendation, Recommendation::Sell);
    }
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[cfg(test)]
mod end_to_end {
    use super::*;

    const SCENARIO: [f64; 10] = [100.0, 102.0, 104.0, 103.0, 105.0, 107.0, 109.0, 108.0, 110.0, 112.0];

    #[test]
    fn test_ten_points_take_the_full_model() {
        let result = predict(&monthly_series(&SCENARIO));
        assert_eq!(result.model, PredictionModel::Ensemble);
    }

    #[test]
    fn test_nine_points_take_the_basic_model() {
        let result = predict(&monthly_series(&SCENARIO[..9]));
        assert_eq!(result.model, PredictionModel::Basic);
        // 110 + (110 - 108)
        assert_eq!(result.predicted_value, 112.0);
        assert_eq!(result.confidence, BASIC_CONFIDENCE);
        assert_eq!(result.recommendation, Recommendation::Buy);
    }

    #[test]
    fn test_scenario_matches_formulas() {
        let result = predict(&monthly_series(&SCENARIO));
        let last = 112.0;

        let blended = 0.4 * polynomial_regression_forecast(&SCENARIO)
            + 0.3 * wma_forecast(&SCENARIO, 10)
            + 0.2 * ema_forecast(&SCENARIO, 12)
            + 0.1 * linear_regression_forecast(&SCENARIO);
        assert!((result.predicted_value - blended).abs() < 1e-9);

        // n = 10 is short of both the 14-point momentum and 15-point RSI windows
        let stats = result.supporting_stats;
        assert_eq!(stats.momentum, momentum(&SCENARIO, 14));
        assert_eq!(stats.momentum, 0.0);
        assert_eq!(stats.rsi, 50.0);
        assert!((stats.volatility - 3.633_180_424_9).abs() < 1e-6);

        assert!((result.percent_change - percent_change(blended, last)).abs() < 1e-9);
        assert_eq!(
            result.confidence,
            confidence_score(stats.momentum, stats.volatility, last, SCENARIO.len())
        );
    }

    #[test]
    fn test_scenario_concrete_values() {
        let result = predict(&monthly_series(&SCENARIO));

        // quadratic term is zero for this series, so the fit collapses onto the line
        let forecasts = result.component_forecasts.unwrap();
        assert!((forecasts.linear - 112.8).abs() < 1e-9);
        assert!((forecasts.polynomial - 112.8).abs() < 1e-6);
        assert!((forecasts.wma - 110.854_545_454_5).abs() < 1e-6);
        assert!((forecasts.ema - 106.502_738_928_7).abs() < 1e-6);

        assert!((result.predicted_value - 110.956_911_422).abs() < 1e-6);
        assert!((result.percent_change - (-0.931_329_087)).abs() < 1e-6);

        // raw score 42 is lifted to the floor
        assert_eq!(result.confidence, 65);

        // -0.93% misses every buy/sell rule and the small-move hold
        assert_eq!(result.recommendation, Recommendation::Hold);
        assert_eq!(result.icon, "💼");
    }

    #[test]
    fn test_linear_trend_on_scenario() {
        let result = predict_with(&monthly_series(&SCENARIO), ForecastMethod::LinearTrend);
        assert_eq!(result.model, PredictionModel::LinearTrend);
        assert!((result.predicted_value - 112.8).abs() < 1e-9);
        // slope 1.236 > 0.5
        assert_eq!(result.recommendation, Recommendation::StrongBuy);
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn nav_values(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..500.0, min_len..max_len)
}

proptest! {
    #[test]
    fn prop_prediction_is_deterministic(values in nav_values(1, 80)) {
        let series = monthly_series(&values);
        let first = predict(&series);
        let second = predict(&series);

        prop_assert_eq!(first.predicted_value.to_bits(), second.predicted_value.to_bits());
        prop_assert_eq!(first.percent_change.to_bits(), second.percent_change.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_full_model_confidence_is_bounded(values in nav_values(10, 80)) {
        let result = predict(&monthly_series(&values));
        prop_assert!(result.confidence >= 65 && result.confidence <= 95);
        prop_assert!(result.predicted_value.is_finite());
    }

    #[test]
    fn prop_basic_model_confidence_is_fixed(values in nav_values(1, 10)) {
        let result = predict(&monthly_series(&values));
        prop_assert_eq!(result.model, PredictionModel::Basic);
        prop_assert_eq!(result.confidence, 70);
    }

    #[test]
    fn prop_rsi_is_bounded(values in nav_values(1, 60)) {
        let value = rsi(&values, 14);
        prop_assert!((0.0..=100.0).contains(&value));
    }
}
