//! Error types for CastKit.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Media path error: {0}")]
    MediaPath(String),

    #[error("Injection error: {0}")]
    Injection(String),

    #[error("Activation error: {0}")]
    Activation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
