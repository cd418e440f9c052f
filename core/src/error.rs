//! Error types for the calculator API.
//!
//! # Design
//! Every failure mode of a request is enumerated here; there is no
//! "unexpected" bucket. Each variant renders one fixed client-facing message
//! through `Display` and maps to one HTTP status through [`ApiError::status`].
//! Statuses are plain `u16` so the crate does not depend on an HTTP
//! framework.

use std::fmt;

/// Errors produced by request validation or the operation dispatcher.
///
/// All variants are terminal for the request: the server logs them and
/// returns `{"error": "<message>"}` with the matching status. None escalate
/// to a process-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The `Content-Type` header was present, non-empty, and not
    /// `application/json`.
    UnsupportedMediaType,

    /// The body was not syntactically valid JSON.
    MalformedJson,

    /// A recognized field held a non-integer value.
    InvalidFieldType { field: String },

    /// The body contained a field other than `a` or `b`.
    UnknownField,

    /// Any other decode failure: non-object JSON, empty or truncated body.
    InvalidFormat,

    /// Division with a zero divisor.
    DivideByZero,
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::UnsupportedMediaType => 415,
            ApiError::MalformedJson
            | ApiError::InvalidFieldType { .. }
            | ApiError::UnknownField
            | ApiError::InvalidFormat
            | ApiError::DivideByZero => 400,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnsupportedMediaType => {
                write!(f, "Content-Type must be application/json")
            }
            ApiError::MalformedJson => {
                write!(f, "Invalid JSON format: malformed JSON structure")
            }
            ApiError::InvalidFieldType { field } => {
                write!(f, "Invalid field type: field '{field}' must be an integer")
            }
            ApiError::UnknownField => {
                write!(f, "Invalid request format: only 'a' and 'b' fields are allowed")
            }
            ApiError::InvalidFormat => {
                write!(f, "Invalid request format: expected JSON with 'a' and 'b' integer fields")
            }
            ApiError::DivideByZero => write!(f, "Can't divide by 0"),
        }
    }
}

impl std::error::Error for ApiError {}
