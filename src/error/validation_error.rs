use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Categories of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// Input does not match a required structural pattern
    InvalidFormat,
    /// Input contains characters outside the allowed set
    InvalidCharacterSet,
    /// Input is structurally well-formed but fails a check-digit rule
    /// or is a known-degenerate value
    InvalidChecksum,
}

impl ValidationErrorKind {
    /// Returns the string representation of the error kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidFormat => "INVALID_FORMAT",
            ValidationErrorKind::InvalidCharacterSet => "INVALID_CHARACTER_SET",
            ValidationErrorKind::InvalidChecksum => "INVALID_CHECKSUM",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single validation failure raised to the immediate caller.
///
/// Carries the fixed human-readable message of the rule that rejected the
/// input, the failure kind, and, where the rule defines one, a stable
/// machine-readable code (e.g. `invalid_english`). The struct serializes to
/// JSON so a host framework can collect failures and surface them to the
/// end user; message text is locale-specific and treated as opaque.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error without a machine-readable code
    pub fn new<S: Into<String>>(kind: ValidationErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    /// Creates a new validation error with a stable machine-readable code
    pub fn with_code<S: Into<String>>(kind: ValidationErrorKind, message: S, code: S) -> Self {
        Self {
            kind,
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Returns the machine-readable code, if the rule defines one
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
