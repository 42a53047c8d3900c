//! Maps UI service errors to tenki_core::AppError for consistent user-facing messages.

mod forecast;
mod region;

use tenki_core::AppError;

/// User-facing text for a failed service call: the friendly message plus the
/// underlying detail.
pub fn describe(error: impl Into<AppError> + std::fmt::Display) -> String {
    let detail = error.to_string();
    let app_error: AppError = error.into();
    format!("{} ({})", app_error.user_message(), detail)
}
