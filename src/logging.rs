use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub service_name: String,
    pub environment: String,
    pub log_level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "fund-predictor".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.log_level.trim().is_empty() {
            return Err(AppError::Config("RUST_LOG is set but empty".to_string()));
        }
        if self.service_name.trim().is_empty() {
            return Err(AppError::Config("SERVICE_NAME is set but empty".to_string()));
        }
        Ok(())
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for JSON output.
pub fn init_logging(config: LoggingConfig) -> Result<(), AppError> {
    config.validate()?;

    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .map_err(|e| AppError::Config(format!("Invalid RUST_LOG filter '{}': {}", config.log_level, e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::Config(format!("Logging already initialized: {}", e)))?;

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        "📊 Console logging initialized"
    );

    Ok(())
}
