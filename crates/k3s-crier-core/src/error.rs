use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrierError {
    #[error("Unable to retrieve release channels: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unable to decode channel response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CrierError>;
