//! Error taxonomy at the core boundary.
//!
//! DESIGN
//! ======
//! Backend rejections are classified by the operation that observed them:
//! `login` turns client errors into [`ApiError::Authentication`], `register`
//! into [`ApiError::Validation`], everything else stays [`ApiError::Status`].
//! Startup hydration never produces an error value; it reports a
//! `HydrationOutcome` instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the submitted credentials.
    #[error("authentication rejected: {message}")]
    Authentication { status: u16, message: String },

    /// The backend rejected a registration payload (invalid or duplicate fields).
    #[error("validation failed: {message}")]
    Validation { status: u16, message: String },

    /// Any other non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request could not complete (timeout, connectivity).
    #[error("network request failed: {0}")]
    Network(String),

    /// A success response whose body could not be decoded.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// Input rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The token could not be persisted, so no session was established.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Grepable error code and retryable flag.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Authentication { .. } => "E_AUTHENTICATION",
            Self::Validation { .. } => "E_VALIDATION",
            Self::Status { .. } => "E_STATUS",
            Self::Network(_) => "E_NETWORK",
            Self::Decode(_) => "E_DECODE",
            Self::InvalidInput(_) => "E_INVALID_INPUT",
            Self::Storage(_) => "E_STORAGE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a non-success response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status { status, message: backend_message(status, body) }
    }

    /// HTTP status carried by the error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Validation { status, .. } | Self::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Human-readable message suitable for inline display on a screen.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication { message, .. } | Self::Validation { message, .. } | Self::Status { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    /// Reclassify a 4xx rejection as a credential failure.
    #[must_use]
    pub fn into_authentication(self) -> Self {
        match self {
            Self::Status { status: status @ 400..=499, message } => Self::Authentication { status, message },
            other => other,
        }
    }

    /// Reclassify a 4xx rejection as a validation failure.
    #[must_use]
    pub fn into_validation(self) -> Self {
        match self {
            Self::Status { status: status @ 400..=499, message } => Self::Validation { status, message },
            other => other,
        }
    }
}

/// Extract the human-readable message from a backend error payload.
///
/// The backend is inconsistent about the field name; the first non-empty of
/// `msg`, `mensaje`, `message`, `error` or `errors[0].msg` wins.
#[must_use]
pub fn backend_message(status: u16, body: &str) -> String {
    let fallback = || format!("request failed with status {status}");
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    let direct = ["msg", "mensaje", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()));
    let nested = || {
        value
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(|first| first.get("msg"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };

    direct.or_else(nested).map_or_else(fallback, str::to_owned)
}
