use anyhow::Result;
use tenki_core::{AppError, Config};

fn main() -> Result<()> {
    // Logging is not up yet, so config failures go to stderr.
    let (config, validation) = Config::load_validated().map_err(|e| {
        let err = AppError::from(e);
        eprintln!("{}", err.user_message());
        err
    })?;

    tenki_core::init(&config.logging)?;

    for warning in &validation.warnings {
        tracing::warn!("Config {}: {}", warning.field, warning.message);
    }
    if let Some(path) = Config::config_path() {
        tracing::debug!("Config path: {}", path.display());
    }

    tracing::info!("Tenki starting");
    tenki_ui::run(config)?;
    tracing::info!("Tenki closed");

    Ok(())
}
