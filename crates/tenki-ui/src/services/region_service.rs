//! Region backend: loads the area catalog once at startup.
//! Network work runs on the executor; the result comes back as a message.

use std::sync::Arc;

use tenki_core::{NetworkError, ReqwestErrorExt};
use tenki_jma::{JmaClient, JmaError, Region};

/// Error type for catalog loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    Http { status: u16, body: String },
    Network(String),
    Timeout,
    Parse(String),
}

impl std::fmt::Display for RegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionError::Http { status, .. } => write!(f, "Region catalog error: HTTP {}", status),
            RegionError::Network(s) => write!(f, "Region catalog error: {}", s),
            RegionError::Timeout => write!(f, "Region catalog request timed out"),
            RegionError::Parse(s) => write!(f, "Region catalog is malformed: {}", s),
        }
    }
}

impl std::error::Error for RegionError {}

impl From<JmaError> for RegionError {
    fn from(e: JmaError) -> Self {
        match e {
            JmaError::Fetch { status, body } => RegionError::Http { status, body },
            JmaError::Network(e) => match e.into_network_error() {
                NetworkError::Timeout => RegionError::Timeout,
                other => RegionError::Network(other.to_string()),
            },
            // the catalog request takes no region code
            JmaError::InvalidRegionCode(s) => RegionError::Parse(s),
            JmaError::Parse(s) => RegionError::Parse(s),
            JmaError::Align(e) => RegionError::Parse(e.to_string()),
        }
    }
}

/// Messages sent from async operations back to the UI
#[derive(Debug, Clone)]
pub enum RegionServiceMessage {
    /// Result of fetching the area catalog
    FetchDone(Result<Vec<Region>, RegionError>),
}

/// Fetch the area catalog.
/// Resolves to `FetchDone`; failures are logged here and carried in the message.
pub async fn request_fetch(client: Arc<JmaClient>) -> RegionServiceMessage {
    let result = client.fetch_regions().await.map_err(|e| {
        tracing::error!("Failed to fetch region catalog: {}", e);
        RegionError::from(e)
    });
    RegionServiceMessage::FetchDone(result)
}
