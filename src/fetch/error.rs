// src/fetch/error.rs
use thiserror::Error;

/// Why a fetch attempt failed. All variants end the attempt; there is no
/// retry. A new selection starts a fresh fetch.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Network unreachable, DNS, proxy down, body could not be read.
    #[error("Failed to fetch data")]
    Transport { detail: String },

    /// Non-success HTTP status.
    #[error("Failed to fetch data: {code} {reason}")]
    Status { code: u16, reason: String },

    /// Body was not JSON, or not a JSON array.
    #[error("Failed to parse report data: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn transport(detail: impl Into<String>) -> Self {
        FetchError::Transport { detail: detail.into() }
    }

    /// Underlying cause for logs (the display text stays generic).
    pub fn detail(&self) -> &str {
        match self {
            FetchError::Transport { detail } => detail,
            FetchError::Status { reason, .. } => reason,
            FetchError::Parse(msg) => msg,
        }
    }
}
