use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraktError {
    /// The API rejected the bearer token (401/403).
    #[error("authorization rejected: HTTP {0}")]
    Unauthorized(StatusCode),

    #[error("HTTP {status} - {message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token store: {0}")]
    Io(#[from] std::io::Error),
}

impl TraktError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TraktError::Unauthorized(status) => Some(*status),
            TraktError::Api { status, .. } => Some(*status),
            TraktError::Http(err) => err.status(),
            TraktError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TraktError>;
