// Error types for the Travelog API client

use thiserror::Error;

/// Errors surfaced by every client operation.
///
/// `Http` carries the message extracted from the backend's `{ "error": ... }`
/// body, or an operation-specific fallback when the body is missing or
/// malformed. Its display is the message alone, so callers can show the
/// backend's wording directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network unreachable, timeout, or the response body could not be read.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// HTTP success but the body carried `success: false` (batch upload only).
    #[error("{0}")]
    Rejected(String),

    /// A batch upload mixed photos destined for different locations.
    #[error("batch upload spans multiple locations: expected {expected}, found {found}")]
    MixedUploadLocations { expected: String, found: String },
}

impl ApiError {
    /// The HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
