pub mod forecast_service;
pub mod region_service;

pub use forecast_service::{
    request_fetch as request_forecast_fetch, ForecastError, ForecastServiceMessage,
    LoadedForecast,
};
pub use region_service::{
    request_fetch as request_region_fetch, RegionError, RegionServiceMessage,
};
