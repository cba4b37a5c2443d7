//! Error types for the ShaMap module.

use thiserror::Error;
use xrpl_codec_core::CodecError;

/// Errors that can occur during trie operations.
#[derive(Debug, Error)]
pub enum ShaMapError {
    /// Two keys could not be separated within 64 nibbles.
    #[error("tree depth exceeded at depth {0}")]
    TreeDepthExceeded(usize),

    /// An item is missing the field that supplies its key or payload.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Item serialization failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type for ShaMap operations.
pub type Result<T> = std::result::Result<T, ShaMapError>;
