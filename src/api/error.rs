//! Error taxonomy for the remote API.
//!
//! Every failure the API client can produce is normalized into an
//! [`ApiError`] carrying a kind and an optional server-supplied message,
//! so the store layer never touches `reqwest`'s error representation.

use thiserror::Error;

/// Classification of a remote API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or expired credentials.
    Auth,
    /// The server rejected the submitted input.
    Validation,
    /// The referenced entity does not exist.
    NotFound,
    /// Transport failure or an unclassified server error.
    Network,
}

impl ErrorKind {
    /// Short machine-readable label, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Auth => "auth",
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Network => "network",
        }
    }

    /// Map an HTTP status code to an error kind.
    ///
    /// Anything not covered by the explicit cases (including 5xx) is
    /// treated as a network-level failure.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Auth,
            404 => ErrorKind::NotFound,
            400 | 409 | 422 => ErrorKind::Validation,
            _ => ErrorKind::Network,
        }
    }
}

/// A normalized remote API failure.
///
/// `message` is the human-readable text extracted from the server's
/// error payload; it is `None` for transport failures and for responses
/// without a structured body. Callers substitute an action-specific
/// fallback via [`ApiError::message_or`].
#[derive(Debug, Clone, Error)]
pub struct ApiError {
    pub kind: ErrorKind,
    message: Option<String>,
}

impl ApiError {
    /// Failure with a server-supplied message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Failure without a usable message.
    pub fn bare(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// The server message, or `fallback` when none was provided.
    pub fn message_or(&self, fallback: &str) -> String {
        match &self.message {
            Some(msg) if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{} error: {}", self.kind.as_str(), msg),
            None => write!(f, "{} error", self.kind.as_str()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!(error = %err, "transport failure");
        ApiError::bare(ErrorKind::Network)
    }
}
