//! # XRPL Codec Signing
//!
//! Family seeds, Ed25519 and secp256k1 key derivation and single-signature
//! transaction signing on top of the canonical codec.
//!
//! ## Key Types
//!
//! - [`Seed`] - 16 bytes of entropy with its base58 `s...` encoding
//! - [`KeyPair`] - Either scheme, chosen by the seed's type
//! - [`Ed25519KeyPair`] - Keys derived from an `sEd...` seed
//! - [`K256KeyPair`] - Account 0 of a secp256k1 `s...` seed
//! - [`Signer`] - The seam signing code is written against
//! - [`SignedTransaction`] - Blob, ID and JSON of a signed transaction
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use xrpl_codec_signing::sign_with_secret;
//!
//! let tx = json!({
//!     "TransactionType": "Payment",
//!     "Account": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
//!     "Destination": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
//!     "Amount": "1000",
//!     "Fee": "10",
//!     "Sequence": 1,
//! });
//! let signed = sign_with_secret(&tx, "sEd7rBGm5kxzauRTAV2hbsNz7N45X91").unwrap();
//! assert_eq!(signed.hash.len(), 64);
//! ```
//!
//! secp256k1 signatures are DER-encoded with low S; Ed25519 public keys
//! carry a leading `0xED`.

pub mod error;
pub mod keypair;
pub mod secp256k1;
pub mod seed;
pub mod signer;

pub use error::{Result, SigningError};
pub use keypair::{
    account_id_for, verify_ed25519, verify_signature, Ed25519KeyPair, KeyPair, Signer,
};
pub use secp256k1::{verify_secp256k1, K256KeyPair};
pub use seed::{KeyType, Seed};
pub use signer::{
    sign_transaction, sign_with_secret, transaction_id, verify_transaction, SignedTransaction,
};
