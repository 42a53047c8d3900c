//! Japan Meteorological Agency forecast client for Tenki
//!
//! Loads the regional office catalog, fetches per-region forecast reports
//! and aligns their parallel arrays into display cards.

pub mod align;
pub mod catalog;
pub mod client;
pub mod document;
pub mod types;

pub use align::{align_forecast, AlignError, Alignment, NOT_AVAILABLE, NO_CONDITION};
pub use catalog::parse_regions;
pub use client::{
    ClientOptions, Endpoints, JmaClient, AREA_CODE_PLACEHOLDER, AREA_URL, FORECAST_URL_TEMPLATE,
    REQUEST_TIMEOUT_SECS, USER_AGENT,
};
pub use document::{AreaRef, AreaSeries, ForecastDocument, ReportHeader, TimeSeries};
pub use types::{ErrorKind, ForecastCard, JmaError, Region};
