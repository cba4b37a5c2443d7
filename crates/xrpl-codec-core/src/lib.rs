//! # XRPL Codec Core
//!
//! Pure primitives for the XRP ledger's canonical binary format: the field
//! registry, the binary parser and serializer, typed values, and the
//! structured object that ties them together.
//!
//! This crate contains no I/O. It is pure computation over byte buffers and
//! JSON values.
//!
//! ## Key Types
//!
//! - [`Field`] / [`FieldRegistry`] - Named, typed field descriptors
//! - [`BinaryParser`] / [`BinarySerializer`] - The wire grammar
//! - [`StObject`] / [`StArray`] - Canonically ordered composites
//! - [`Amount`] / [`AmountValue`] - Native and issued amounts
//! - [`SerializedValue`] - The closed set of field values
//!
//! ## Usage
//!
//! ```rust
//! use xrpl_codec_core::{fields, StObject};
//!
//! let mut tx = StObject::new();
//! tx.insert(fields::SEQUENCE, 1u32).unwrap();
//! assert_eq!(tx.to_hex().unwrap(), "2400000001");
//! ```

pub mod address;
pub mod amount;
pub mod binary;
pub mod currency;
pub mod enums;
pub mod error;
pub mod field;
pub mod fields;
pub mod hash;
pub mod object;
pub mod path;
pub mod types;
pub mod value;

pub use address::AccountId;
pub use amount::{Amount, AmountValue};
pub use binary::{encode_vl, BinaryParser, BinarySerializer, BytesSink};
pub use currency::Currency;
pub use enums::{EngineResult, LedgerEntryType, TransactionType};
pub use error::{CodecError, Result};
pub use field::{Field, FieldRegistry, FieldType};
pub use hash::{prefixed_half, sha512_half, HashPrefix, Sha512Half};
pub use object::{StArray, StObject, UnknownFieldPolicy};
pub use path::{Hop, Path, PathSet};
pub use types::{Hash128, Hash160, Hash256};
pub use value::SerializedValue;
