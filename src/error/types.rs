use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Unified result type for the boxflow crate.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors surfaced by the runtime and its adapters. Layout, hit-testing and
/// content updates are total and never produce one of these.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
