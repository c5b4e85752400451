//! Tagged success/error envelope for results crossing an API boundary.

use serde::{Deserialize, Serialize};

/// Response envelope discriminated by its `status` tag.
///
/// The envelope is a wire shape, not an error channel: the error arm
/// carries a caller-facing message and numeric code rather than a
/// [`crate::TroveError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    /// Successful outcome carrying the payload.
    Success {
        /// The payload produced by the operation.
        data: T,
    },
    /// Failed outcome carrying a diagnostic message and code.
    Error {
        /// Human readable description of the failure.
        message: String,
        /// Numeric code in the HTTP status style (e.g. 404).
        code: u16,
    },
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(data: T) -> Self {
        ApiResponse::Success { data }
    }

    /// Builds an error envelope from a message and numeric code.
    pub fn error(message: impl Into<String>, code: u16) -> Self {
        ApiResponse::Error {
            message: message.into(),
            code,
        }
    }

    /// Returns whether the envelope carries the success tag.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Returns whether the envelope carries the error tag.
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error { .. })
    }

    /// Returns the payload if the envelope is a success.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data } => Some(data),
            ApiResponse::Error { .. } => None,
        }
    }

    /// Unwraps the envelope into a `Result`, keeping the error arm's
    /// message and code.
    pub fn into_result(self) -> Result<T, (String, u16)> {
        match self {
            ApiResponse::Success { data } => Ok(data),
            ApiResponse::Error { message, code } => Err((message, code)),
        }
    }
}
