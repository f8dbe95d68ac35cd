//! Error taxonomy for the REST client layer.
//!
//! ERROR HANDLING
//! ==============
//! Variants map onto how the UI reacts: `Unauthorized` means the session is
//! gone (refresh already failed), `Status` carries the backend's `detail`
//! message for inline display, and `Network`/`Decode` cover transport and
//! schema failures. Display strings are written to be user-surfaceable as-is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A failure from the REST client layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request was rejected with 401 and the token refresh did not
    /// recover the session.
    #[error("not authorized")]
    Unauthorized,
    /// The backend answered with a non-success status.
    #[error("{detail}")]
    Status { code: u16, detail: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Error used by non-browser builds where no HTTP stack exists.
    pub fn unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }
}
