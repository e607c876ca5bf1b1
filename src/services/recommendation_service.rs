use crate::models::Advice;

/// Classify a full-model prediction.
///
/// Rules are checked in order and the first match wins; the conditions
/// overlap, so the order matters.
pub fn classify(percent_change: f64, rsi: f64, momentum: f64, volatility: f64) -> Advice {
    if percent_change > 2.0 && rsi < 70.0 && momentum > 0.0 {
        return Advice::STRONG_BUY;
    }

    if percent_change > 0.5 && rsi < 65.0 {
        return Advice::BUY;
    }

    if percent_change < -2.0 || (rsi > 75.0 && momentum < 0.0) {
        return Advice::SELL;
    }

    if volatility > 30.0 || percent_change.abs() < 0.5 {
        return Advice::HOLD_CAUTION;
    }

    Advice::HOLD_STABLE
}

/// Slope thresholds used by the linear-trend forecast method.
pub fn classify_slope(slope: f64) -> Advice {
    if slope > 0.5 {
        Advice::STRONG_BUY
    } else if slope > 0.2 {
        Advice::BUY
    } else if slope < -0.5 {
        Advice::SELL
    } else {
        Advice::HOLD_STABLE
    }
}

/// Advice for the one-step fallback: buy on an up-step, hold otherwise.
pub fn classify_step(step: f64) -> Advice {
    if step > 0.0 {
        Advice::POSITIVE_MOMENTUM
    } else {
        Advice::NEUTRAL_POSITION
    }
}
