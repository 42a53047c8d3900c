//! Forecast backend: fetch one region's report and align it into cards.
//! Network work runs on the executor; the result comes back as a message
//! tagged with the generation of the selection that asked for it.

use std::sync::Arc;

use tenki_core::{NetworkError, ReqwestErrorExt};
use tenki_jma::{align_forecast, Alignment, JmaClient, JmaError, ReportHeader};

/// Error type for forecast operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    Http { status: u16, body: String },
    Network(String),
    Timeout,
    InvalidRegion(String),
    Parse(String),
    Misaligned(String),
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::Http { status, .. } => write!(f, "Forecast error: HTTP {}", status),
            ForecastError::Network(s) => write!(f, "Forecast error: {}", s),
            ForecastError::Timeout => write!(f, "Forecast request timed out"),
            ForecastError::InvalidRegion(s) => write!(f, "Invalid region code: {}", s),
            ForecastError::Parse(s) => write!(f, "Forecast data is malformed: {}", s),
            ForecastError::Misaligned(s) => write!(f, "Forecast data is inconsistent: {}", s),
        }
    }
}

impl std::error::Error for ForecastError {}

impl From<JmaError> for ForecastError {
    fn from(e: JmaError) -> Self {
        match e {
            JmaError::Fetch { status, body } => ForecastError::Http { status, body },
            JmaError::Network(e) => match e.into_network_error() {
                NetworkError::Timeout => ForecastError::Timeout,
                other => ForecastError::Network(other.to_string()),
            },
            JmaError::InvalidRegionCode(s) => ForecastError::InvalidRegion(s),
            JmaError::Parse(s) => ForecastError::Parse(s),
            JmaError::Align(e) => ForecastError::Misaligned(e.to_string()),
        }
    }
}

/// An aligned report ready to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedForecast {
    pub header: ReportHeader,
    pub alignment: Alignment,
}

/// Messages sent from async operations back to the UI
#[derive(Debug, Clone)]
pub enum ForecastServiceMessage {
    /// Result of fetching and aligning one region's forecast
    FetchDone {
        generation: u64,
        region_code: String,
        result: Result<LoadedForecast, ForecastError>,
    },
}

/// Fetch and align the forecast for `region_code`.
/// Resolves to `FetchDone` carrying `generation` back unchanged.
pub async fn request_fetch(
    client: Arc<JmaClient>,
    generation: u64,
    region_code: String,
) -> ForecastServiceMessage {
    let result = load(&client, &region_code).await.map_err(|e| {
        tracing::error!("Failed to load forecast for {}: {}", region_code, e);
        ForecastError::from(e)
    });

    ForecastServiceMessage::FetchDone {
        generation,
        region_code,
        result,
    }
}

async fn load(client: &JmaClient, region_code: &str) -> Result<LoadedForecast, JmaError> {
    let document = client.fetch_forecast(region_code).await?;
    let alignment = align_forecast(&document)?;
    Ok(LoadedForecast {
        header: document.header(),
        alignment,
    })
}
