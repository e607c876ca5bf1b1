use anyhow::Context;

use fund_predictor::config::{AppConfig, InputSource};
use fund_predictor::logging::{init_logging, LoggingConfig};
use fund_predictor::services::{fund_report_service, nav_import_service, prediction_service};
use fund_predictor::services::range_filter::filter_by_range;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env()).context("Failed to initialize logging")?;

    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        "📊 Range {} with {} forecasting",
        config.range,
        config.method.description()
    );

    let output = match &config.input {
        InputSource::NavCsv(path) => {
            let series = nav_import_service::load_nav_csv(path)?;
            let window = filter_by_range(&series, config.range);
            let prediction = prediction_service::predict_with(&window, config.method);

            tracing::info!(
                "🚀 Predicted NAV {:.2} ({:+.2}%), confidence {}%, {}",
                prediction.predicted_value,
                prediction.percent_change,
                prediction.confidence,
                prediction.recommendation
            );

            serde_json::to_string_pretty(&prediction)?
        }
        InputSource::FundCatalog(path) => {
            let funds = nav_import_service::load_fund_catalog(path)?;
            let reports = fund_report_service::predict_funds(&funds, config.range, config.method);

            for report in &reports {
                tracing::info!(
                    "🚀 {} ({}): {:.2} -> {:.2}, {}",
                    report.name,
                    report.fund_id,
                    report.current_value,
                    report.prediction.predicted_value,
                    report.prediction.recommendation
                );
            }

            serde_json::to_string_pretty(&reports)?
        }
    };

    println!("{}", output);

    Ok(())
}
