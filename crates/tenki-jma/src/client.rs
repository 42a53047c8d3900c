//! JMA bosai API client.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::instrument;

use crate::catalog::parse_regions;
use crate::document::ForecastDocument;
use crate::types::{JmaError, Region};

pub const AREA_URL: &str = "https://www.jma.go.jp/bosai/common/const/area.json";
pub const FORECAST_URL_TEMPLATE: &str =
    "https://www.jma.go.jp/bosai/forecast/data/forecast/{area_code}.json";
/// Replaced with the region code in the forecast URL template
pub const AREA_CODE_PLACEHOLDER: &str = "{area_code}";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("Tenki/", env!("CARGO_PKG_VERSION"));

/// Where the catalog and forecasts are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub area_url: String,
    /// Must contain `{area_code}`
    pub forecast_url_template: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            area_url: AREA_URL.to_string(),
            forecast_url_template: FORECAST_URL_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JmaClient {
    client: Client,
    endpoints: Endpoints,
}

impl JmaClient {
    pub fn new(options: ClientOptions) -> Result<Self, JmaError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoints: options.endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the area catalog and list its named offices in document order.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, JmaError> {
        let response = self.client.get(&self.endpoints.area_url).send().await?;
        let body = Self::read_body(response).await?;

        let regions = parse_regions(&body)?;
        tracing::info!("Fetched {} regions", regions.len());
        Ok(regions)
    }

    /// Fetch the forecast report for one region code.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(&self, region_code: &str) -> Result<ForecastDocument, JmaError> {
        let url = self.forecast_url(region_code)?;
        tracing::debug!("Fetching forecast from {}", url);

        let response = self.client.get(&url).send().await?;
        let body = Self::read_body(response).await?;

        let document = ForecastDocument::from_json(&body)?;
        tracing::info!(
            "Fetched forecast for {} with {} time series",
            region_code,
            document.time_series.len()
        );
        Ok(document)
    }

    /// Substitute a region code into the forecast URL template.
    ///
    /// Codes are digit strings; anything else is rejected so a code can never
    /// rewrite the path.
    pub fn forecast_url(&self, region_code: &str) -> Result<String, JmaError> {
        if region_code.is_empty() || !region_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JmaError::InvalidRegionCode(region_code.to_string()));
        }
        Ok(self
            .endpoints
            .forecast_url_template
            .replace(AREA_CODE_PLACEHOLDER, region_code))
    }

    async fn read_body(response: Response) -> Result<String, JmaError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("JMA request failed: HTTP {} - {}", status.as_u16(), body);
            return Err(JmaError::Fetch {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text().await?)
    }
}
