//! Error types for vector decoding and line configuration.

use std::fmt;
use thiserror::Error;

/// Why a `"<mag>|<dir>"` token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFault {
    /// No `|` in the token.
    MissingSeparator,
    /// More than one `|` in the token.
    ExtraSeparator,
    /// The magnitude field is not an integer literal.
    BadMagnitude,
    /// The direction field is not an integer literal.
    BadDirection,
}

impl fmt::Display for TextFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFault::MissingSeparator => write!(f, "missing '|' separator"),
            TextFault::ExtraSeparator => write!(f, "expected exactly one '|' separator"),
            TextFault::BadMagnitude => write!(f, "magnitude is not an integer"),
            TextFault::BadDirection => write!(f, "direction is not an integer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("malformed vector text '{token}': {reason}")]
    MalformedVectorText { token: String, reason: TextFault },

    #[error("invalid line style: {0}")]
    InvalidStyle(String),

    #[error("invalid point: {0}")]
    InvalidPoint(String),
}

impl VectorError {
    pub fn malformed(token: &str, reason: TextFault) -> Self {
        VectorError::MalformedVectorText {
            token: token.to_string(),
            reason,
        }
    }
}
