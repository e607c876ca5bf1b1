use rayon::prelude::*;
use tracing::{debug, info};

use crate::models::{ForecastMethod, Fund, FundReport, TimeRange};
use crate::services::prediction_service::predict_with;
use crate::services::range_filter::filter_by_range;

/// Build the prediction panel for one fund.
///
/// The prediction runs on the same windowed series that is charted, so a
/// short range (e.g. `1m`) deliberately lands on the basic fallback.
pub fn build_fund_report(fund: &Fund, range: TimeRange, method: ForecastMethod) -> FundReport {
    let window = filter_by_range(&fund.history, range);
    let prediction = predict_with(&window, method);

    debug!(
        fund_id = %fund.id,
        range = %range,
        window_points = window.len(),
        "Built fund report"
    );

    FundReport {
        fund_id: fund.id.clone(),
        name: fund.name.clone(),
        start_date: fund.start_date,
        current_value: fund.current_value,
        risk_label: fund.risk_label.clone(),
        annual_return: fund.annual_return(),
        range,
        method,
        chart: window.into_points(),
        prediction,
    }
}

/// Build reports for many funds in parallel. Output order matches input order.
pub fn predict_funds(funds: &[Fund], range: TimeRange, method: ForecastMethod) -> Vec<FundReport> {
    info!(
        "Predicting {} funds (range {}, method {:?})",
        funds.len(),
        range,
        method
    );

    funds
        .par_iter()
        .map(|fund| build_fund_report(fund, range, method))
        .collect()
}
