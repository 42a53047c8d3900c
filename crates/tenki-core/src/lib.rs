pub mod config;
pub mod error;

pub use config::{Config, JmaConfig, LoggingConfig, UiConfig, ValidationResult};
pub use error::{AppError, ConfigError, ForecastError, NetworkError, ReqwestErrorExt};

use anyhow::Result;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("Tenki core initialized");
    Ok(())
}
