//! Error definitions for the model lister.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Decode error: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    #[error("Missing field `{field}` in model entry {index}")]
    MissingField { index: usize, field: &'static str },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
