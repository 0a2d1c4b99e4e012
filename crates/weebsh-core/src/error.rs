use crate::models::ApiErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the weeb.sh client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("no token configured; set WEEBSH_TOKEN or add `token` to the config file")]
    MissingToken,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Remote {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Build a remote error from a non-success status and the raw body.
    ///
    /// The body is decoded best-effort as the service's error envelope; a
    /// body that is not JSON is kept verbatim unless it is blank.
    pub fn from_remote(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(ApiErrorBody::into_message)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            });

        Error::Remote { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// The service reported that the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Remote { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
