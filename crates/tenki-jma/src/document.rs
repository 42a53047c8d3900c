//! Forecast report shape returned by the JMA forecast endpoint.
//!
//! The endpoint returns an array of reports (short-range first, weekly
//! second); only the first report is used. Unknown keys such as `winds`,
//! `pops` or `weatherCodes` are ignored.

use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::JmaError;

/// A single forecast report
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDocument {
    #[serde(default)]
    pub publishing_office: Option<String>,
    #[serde(default)]
    pub report_datetime: Option<String>,
    #[serde(default)]
    pub time_series: Vec<TimeSeries>,
}

/// Date stamps shared by a set of per-area arrays
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    #[serde(default)]
    pub time_defines: Vec<String>,
    #[serde(default)]
    pub areas: Vec<AreaSeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AreaSeries {
    #[serde(default)]
    pub area: AreaRef,
    #[serde(default)]
    pub weathers: Vec<String>,
    /// Alternating min, max per date
    #[serde(default, deserialize_with = "lenient_strings")]
    pub temps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AreaRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Who published the report and when
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportHeader {
    pub publishing_office: Option<String>,
    pub report_datetime: Option<DateTime<FixedOffset>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForecastPayload {
    Reports(Vec<ForecastDocument>),
    Single(ForecastDocument),
}

impl ForecastDocument {
    /// Parse a response body: either the report array or a single report.
    /// An empty array is an empty document.
    pub fn from_json(body: &str) -> Result<Self, JmaError> {
        let payload: ForecastPayload = serde_json::from_str(body)
            .map_err(|e| JmaError::Parse(format!("forecast report: {}", e)))?;

        Ok(match payload {
            ForecastPayload::Reports(reports) => reports.into_iter().next().unwrap_or_default(),
            ForecastPayload::Single(report) => report,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.time_series.is_empty()
    }

    pub fn header(&self) -> ReportHeader {
        ReportHeader {
            publishing_office: self.publishing_office.clone(),
            report_datetime: self
                .report_datetime
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok()),
        }
    }
}

/// Temperatures arrive as strings, but accept bare numbers too.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!(
                "expected a temperature string, got {}",
                other
            ))),
        })
        .collect()
}
