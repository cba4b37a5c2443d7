//! Error types for the codec facade.

use thiserror::Error;
use xrpl_codec_core::CodecError;
use xrpl_codec_shamap::ShaMapError;
use xrpl_codec_signing::SigningError;

/// Errors that can occur during facade operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding or decoding error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Ledger tree error.
    #[error("shamap error: {0}")]
    ShaMap(#[from] ShaMapError),

    /// Key derivation or signing error.
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
