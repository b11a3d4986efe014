// crates/footprint-core/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootprintError {
    /// One or more inputs are not valid numbers. Nothing is computed or
    /// recorded when this fires.
    #[error("{0}")]
    Validation(String),

    /// The advice endpoint could not be reached or answered with an error
    /// status.
    #[error("advice request failed: {0}")]
    AdviceTransport(#[from] reqwest::Error),

    /// The advice endpoint answered, but not with the expected JSON shape.
    #[error("advice response invalid: {0}")]
    AdviceResponse(String),

    /// Report export or advice was requested before any result existed.
    #[error("{0}")]
    Precondition(&'static str),

    #[error("history file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings file invalid: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("report rendering failed: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
