//! Error types for the Crosslink core.

use thiserror::Error;

/// Errors produced by the header codec and the transaction hasher.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed field {field}: {reason}")]
    MalformedField { field: String, reason: String },

    #[error("transaction payload has no envelope codec")]
    NotSupportedCodec,

    #[error("invalid amount in {field}: {reason}")]
    InvalidAmount { field: &'static str, reason: String },

    #[error("invalid signature value {component}: {reason}")]
    InvalidSignatureValue {
        component: &'static str,
        reason: String,
    },

    #[error("envelope truncated while reading {0}")]
    TruncatedEnvelope(&'static str),

    #[error("trailing bytes after envelope body")]
    TrailingBytes,

    #[error("envelope route not registered: {0}")]
    UnknownRoute(String),
}

impl CodecError {
    /// Shorthand used by decode paths.
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::MalformedField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
