//! # XRPL Codec Testkit
//!
//! Testing utilities for the XRPL codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known encodings and a signed Payment for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up accounts, payments, and ledger entries
//!
//! ## Golden Vectors
//!
//! ```rust
//! use xrpl_codec_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     println!("{}: {} {}", name, matches, hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use xrpl_codec_testkit::generators::{tx_json_from_params, TxParams};
//!
//! proptest! {
//!     #[test]
//!     fn encoding_is_deterministic(params: TxParams) {
//!         let codec = xrpl_codec::Codec::default();
//!         let json = tx_json_from_params(&params);
//!         prop_assert_eq!(codec.encode(&json).unwrap(), codec.encode(&json).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use xrpl_codec_testkit::fixtures::TestFixture;
//!
//! let alice = TestFixture::new();
//! let bob = TestFixture::new();
//! let signed = alice.signed_payment(&bob.account(), 1_000_000, 1);
//! assert_eq!(signed.hash.len(), 64);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{tx_json_from_params, AmountParams, TxParams};
pub use vectors::{all_vectors, signing_vector, verify_all_vectors, GoldenVector, SigningVector};
