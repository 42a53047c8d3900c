use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::align::AlignError;

/// A regional forecast office from the area catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Display name, e.g. "東京都"
    pub name: String,
    /// Identifier used to key the forecast lookup, e.g. "130000"
    pub code: String,
    pub en_name: Option<String>,
    pub office_name: Option<String>,
}

impl Region {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            en_name: None,
            office_name: None,
        }
    }

    /// Case-insensitive match against the Japanese and English names
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .en_name
                .as_deref()
                .is_some_and(|en| en.to_lowercase().contains(&query))
    }
}

/// One area on one date, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastCard {
    pub area_name: String,
    /// Date portion of the time define (YYYY-MM-DD)
    pub date: String,
    pub condition: String,
    /// Temperature string from the report, or "N/A"
    pub max_temp: String,
    /// Temperature string from the report, or "N/A"
    pub min_temp: String,
}

impl ForecastCard {
    /// Day of week, when the date is a calendar date
    pub fn weekday(&self) -> Option<Weekday> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .map(|d| d.weekday())
    }
}

/// The two failure classes surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-success status, transport failure or an unusable request
    FetchFailure,
    /// The response body did not have the expected shape
    ParseFailure,
}

/// JMA client errors
#[derive(Debug, thiserror::Error)]
pub enum JmaError {
    #[error("HTTP {status}: {body}")]
    Fetch { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid region code: {0:?}")]
    InvalidRegionCode(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Alignment error: {0}")]
    Align(#[from] AlignError),
}

impl JmaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch { .. } | Self::Network(_) | Self::InvalidRegionCode(_) => {
                ErrorKind::FetchFailure
            }
            Self::Parse(_) | Self::Align(_) => ErrorKind::ParseFailure,
        }
    }
}
