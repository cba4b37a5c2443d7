//! # XRPL Codec
//!
//! The unified API for the XRP ledger's canonical binary format: encoding,
//! decoding, signing and ledger trees.
//!
//! ## Overview
//!
//! The codec provides a pure, in-memory library for:
//!
//! - **Encoding**: JSON transactions and ledger objects to canonical hex
//! - **Decoding**: canonical hex back to JSON
//! - **Signing**: Ed25519 and secp256k1 single signatures and transaction IDs
//! - **Ledger trees**: account-state and transaction ShaMaps with root hashes
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use xrpl_codec::{Codec, CodecConfig};
//!
//! let codec = Codec::new(CodecConfig::default());
//! let tx = json!({
//!     "TransactionType": "Payment",
//!     "Account": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
//!     "Destination": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
//!     "Amount": "1000",
//!     "Fee": "10",
//!     "Sequence": 1,
//! });
//!
//! let hex = codec.encode(&tx).unwrap();
//! assert_eq!(codec.decode(&hex).unwrap(), tx);
//!
//! let signed = codec.sign(&tx, "sEd7rBGm5kxzauRTAV2hbsNz7N45X91").unwrap();
//! assert_eq!(codec.transaction_id(&signed.tx_json).unwrap(), signed.hash);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `xrpl_codec::core` - Fields, values, parser and serializer
//! - `xrpl_codec::shamap` - The Merkle trie and ledger items
//! - `xrpl_codec::signing` - Seeds, key pairs and signing

pub mod codec;
pub mod config;
pub mod error;

// Re-export component crates
pub use xrpl_codec_core as core;
pub use xrpl_codec_shamap as shamap;
pub use xrpl_codec_signing as signing;

// Re-export main types for convenience
pub use codec::Codec;
pub use config::CodecConfig;
pub use error::{Error, Result};

// Re-export commonly used component types
pub use xrpl_codec_core::{
    fields, AccountId, Amount, CodecError, Field, Hash256, SerializedValue, StArray, StObject,
    UnknownFieldPolicy,
};
pub use xrpl_codec_shamap::{AccountState, LedgerEntry, ShaMap, TransactionResult, TransactionTree};
pub use xrpl_codec_signing::{
    Ed25519KeyPair, K256KeyPair, KeyPair, KeyType, Seed, SignedTransaction, Signer,
};
