//! Error types for seeds, keys and signing.

use thiserror::Error;
use xrpl_codec_core::CodecError;

/// Errors that can occur while deriving keys or signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The seed's key type cannot produce a key pair here.
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(&'static str),

    /// Key material has the wrong shape.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A signature failed to verify or could not be decoded.
    #[error("invalid signature")]
    InvalidSignature,

    /// The transaction is missing a field signing needs.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Encoding or decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type for signing operations.
pub type Result<T> = std::result::Result<T, SigningError>;
