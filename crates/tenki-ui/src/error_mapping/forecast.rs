use crate::services::ForecastError as UiForecastError;
use tenki_core::{AppError, ForecastError, NetworkError};

impl From<UiForecastError> for AppError {
    fn from(e: UiForecastError) -> Self {
        match e {
            UiForecastError::Http { status, body } => {
                AppError::Network(NetworkError::ServerError { status, message: body })
            }
            UiForecastError::Network(s) => AppError::Network(NetworkError::ConnectionFailed(s)),
            UiForecastError::Timeout => AppError::Network(NetworkError::Timeout),
            UiForecastError::InvalidRegion(s) => AppError::Forecast(ForecastError::InvalidRegion(s)),
            UiForecastError::Parse(s) => AppError::Forecast(ForecastError::Malformed(s)),
            UiForecastError::Misaligned(s) => AppError::Forecast(ForecastError::Misaligned(s)),
        }
    }
}
