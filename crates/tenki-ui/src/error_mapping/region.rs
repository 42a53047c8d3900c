use crate::services::RegionError;
use tenki_core::{AppError, ForecastError, NetworkError};

impl From<RegionError> for AppError {
    fn from(e: RegionError) -> Self {
        match e {
            RegionError::Http { status, body } => {
                AppError::Network(NetworkError::ServerError { status, message: body })
            }
            RegionError::Network(s) => AppError::Network(NetworkError::ConnectionFailed(s)),
            RegionError::Timeout => AppError::Network(NetworkError::Timeout),
            RegionError::Parse(s) => AppError::Forecast(ForecastError::CatalogUnavailable(s)),
        }
    }
}
