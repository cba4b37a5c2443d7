//! Error types for the XRPL codec core.

use thiserror::Error;

/// Errors that can occur while encoding or decoding canonical data.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("truncated input: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("length {0} exceeds the variable-length prefix range")]
    LengthOverflow(usize),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown field code: type {type_code}, nth {nth}")]
    UnknownFieldCode { type_code: i32, nth: i32 },

    #[error("duplicate field registration: {0}")]
    DuplicateField(String),

    #[error("field {0} is not serialized")]
    NotSerialized(&'static str),

    #[error("malformed field {field}: {reason}")]
    MalformedField { field: &'static str, reason: String },

    #[error("invalid json for field {field}: {source}")]
    InvalidJson {
        field: String,
        #[source]
        source: Box<CodecError>,
    },

    #[error("precision error: {0}")]
    PrecisionError(String),

    #[error("invalid amount value: {0}")]
    InvalidAmountValue(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,
}

impl CodecError {
    /// Shorthand for a JSON value of the wrong shape.
    pub(crate) fn json(expected: &str, got: &serde_json::Value) -> Self {
        CodecError::MalformedInput(format!("expected {}, got {}", expected, got))
    }

    /// Wrap an error raised while decoding a single JSON field.
    pub(crate) fn in_json_field(self, field: &str) -> Self {
        CodecError::InvalidJson {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
