use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tenki_jma::{
    AREA_CODE_PLACEHOLDER, AREA_URL, FORECAST_URL_TEMPLATE, REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use url::Url;

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// JMA endpoints and HTTP settings
    #[serde(default)]
    pub jma: JmaConfig,

    /// Window preferences
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JmaConfig {
    /// Area catalog (`offices` mapping)
    #[serde(default = "default_area_url")]
    pub area_url: String,

    /// Forecast endpoint; `{area_code}` is replaced with the region code
    #[serde(default = "default_forecast_url_template")]
    pub forecast_url_template: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_area_url() -> String {
    AREA_URL.to_string()
}

fn default_forecast_url_template() -> String {
    FORECAST_URL_TEMPLATE.to_string()
}

fn default_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

impl Default for JmaConfig {
    fn default() -> Self {
        Self {
            area_url: default_area_url(),
            forecast_url_template: default_forecast_url_template(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    #[serde(default)]
    pub dark_mode: bool,

    /// Forecast cards laid out per row
    #[serde(default = "default_cards_per_row")]
    pub cards_per_row: u32,
}

fn default_window_width() -> u32 {
    1200
}

fn default_window_height() -> u32 {
    800
}

fn default_cards_per_row() -> u32 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            dark_mode: false,
            cards_per_row: default_cards_per_row(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "tenki_jma=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory.
    ///
    /// A missing file means defaults; nothing is written back.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings; the caller logs
    /// them once tracing is installed.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        let config = Self::load()?;
        config.check().map(|validation| (config, validation))
    }

    /// Validate, turning errors into `ConfigError::Invalid`
    pub fn check(&self) -> Result<ValidationResult, ConfigError> {
        let validation = self.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }
        Ok(validation)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_url(&self.jma.area_url, "jma.area_url", &mut result);

        let template = &self.jma.forecast_url_template;
        if template.contains(AREA_CODE_PLACEHOLDER) {
            let sample = template.replace(AREA_CODE_PLACEHOLDER, "130000");
            Self::validate_url(&sample, "jma.forecast_url_template", &mut result);
        } else {
            result.add_error(
                "jma.forecast_url_template",
                format!("Template must contain {}", AREA_CODE_PLACEHOLDER),
            );
        }

        if self.jma.timeout_secs == 0 {
            result.add_error("jma.timeout_secs", "Timeout must be greater than 0");
        } else if self.jma.timeout_secs > 300 {
            result.add_warning("jma.timeout_secs", "Timeout is unusually long (>300s)");
        }

        if self.jma.user_agent.trim().is_empty() {
            result.add_warning("jma.user_agent", "Empty user agent; requests may be rejected");
        }

        if self.ui.window_width == 0 {
            result.add_error("ui.window_width", "Window width must be greater than 0");
        } else if self.ui.window_width > 10000 {
            result.add_warning("ui.window_width", "Window width is unusually large (>10000)");
        }

        if self.ui.window_height == 0 {
            result.add_error("ui.window_height", "Window height must be greater than 0");
        } else if self.ui.window_height > 10000 {
            result.add_warning("ui.window_height", "Window height is unusually large (>10000)");
        }

        if self.ui.cards_per_row == 0 {
            result.add_error("ui.cards_per_row", "At least one card per row is required");
        } else if self.ui.cards_per_row > 8 {
            result.add_warning("ui.cards_per_row", "More than 8 cards per row will be cramped");
        }

        if tracing_subscriber::EnvFilter::try_new(&self.logging.level).is_err() {
            result.add_error(
                "logging.level",
                format!("Invalid log filter: {}", self.logging.level),
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tenki").join("config.toml"))
    }
}
