//! Application configuration.
//!
//! The binary takes no flags; everything tunable comes from `BOXFLOW_*`
//! environment variables, falling back to [`AppConfig::default`].

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::layout::{FlowConfig, RowAdvance};
use crate::logging::LogLevel;
use crate::style::BoxStyle;

pub const ENV_LOG_PATH: &str = "BOXFLOW_LOG";
pub const ENV_LOG_LEVEL: &str = "BOXFLOW_LOG_LEVEL";
pub const ENV_LOG_MAX_BYTES: &str = "BOXFLOW_LOG_MAX_BYTES";
pub const ENV_ROW_ADVANCE: &str = "BOXFLOW_ROW_ADVANCE";
pub const ENV_METRICS_INTERVAL_MS: &str = "BOXFLOW_METRICS_INTERVAL_MS";

const DEFAULT_LOG_MAX_BYTES: u64 = 1024 * 1024;
const DEFAULT_METRICS_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: expected one of {expected}, got `{value}`")]
    InvalidChoice {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{key}: expected a non-negative integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub style: BoxStyle,
    pub row_advance: RowAdvance,
    pub log_path: Option<PathBuf>,
    pub log_level: LogLevel,
    pub log_max_bytes: u64,
    pub metrics_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: BoxStyle::default(),
            row_advance: RowAdvance::PreviousBox,
            log_path: None,
            log_level: LogLevel::Info,
            log_max_bytes: DEFAULT_LOG_MAX_BYTES,
            metrics_interval: DEFAULT_METRICS_INTERVAL,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or empty keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(ENV_LOG_PATH) {
            config.log_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = get(ENV_LOG_LEVEL) {
            config.log_level = LogLevel::parse(&raw).ok_or(ConfigError::InvalidChoice {
                key: ENV_LOG_LEVEL,
                value: raw,
                expected: "trace, debug, info, warn, error",
            })?;
        }
        if let Some(raw) = get(ENV_LOG_MAX_BYTES) {
            config.log_max_bytes = parse_number(ENV_LOG_MAX_BYTES, raw)?;
        }
        if let Some(raw) = get(ENV_ROW_ADVANCE) {
            config.row_advance = parse_row_advance(raw)?;
        }
        if let Some(raw) = get(ENV_METRICS_INTERVAL_MS) {
            config.metrics_interval =
                Duration::from_millis(parse_number(ENV_METRICS_INTERVAL_MS, raw)?);
        }

        Ok(config)
    }

    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig::from_style(&self.style).with_row_advance(self.row_advance)
    }
}

fn parse_number(key: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}

fn parse_row_advance(raw: String) -> Result<RowAdvance, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "previous" => Ok(RowAdvance::PreviousBox),
        "tallest" => Ok(RowAdvance::TallestInRow),
        _ => Err(ConfigError::InvalidChoice {
            key: ENV_ROW_ADVANCE,
            value: raw,
            expected: "previous, tallest",
        }),
    }
}
