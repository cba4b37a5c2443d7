//! Field descriptors and the process-wide field registry.
//!
//! A [`Field`] is identified by its [`FieldType`] and its ordinal within that
//! type (`nth`). Canonical object order is ascending `(type, nth)`, which is
//! exactly the order of [`Field::sort_key`].
//!
//! The registry maps names and numeric codes to fields and holds the value
//! codec for every field type, with per-field overrides for the fields whose
//! values are enumerations (`TransactionType`, `LedgerEntryType`,
//! `TransactionResult`).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;

use crate::binary::BinaryParser;
use crate::error::{CodecError, Result};
use crate::fields;
use crate::object::UnknownFieldPolicy;
use crate::value::{self, SerializedValue};

/// Wire type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Unknown,
    Done,
    NotPresent,
    Uint16,
    Uint32,
    Uint64,
    Hash128,
    Hash256,
    Amount,
    Blob,
    AccountId,
    StObject,
    StArray,
    Uint8,
    Hash160,
    PathSet,
    Vector256,
}

impl FieldType {
    /// Numeric type code used in field headers.
    pub const fn code(self) -> i32 {
        match self {
            FieldType::Unknown => -2,
            FieldType::Done => -1,
            FieldType::NotPresent => 0,
            FieldType::Uint16 => 1,
            FieldType::Uint32 => 2,
            FieldType::Uint64 => 3,
            FieldType::Hash128 => 4,
            FieldType::Hash256 => 5,
            FieldType::Amount => 6,
            FieldType::Blob => 7,
            FieldType::AccountId => 8,
            FieldType::StObject => 14,
            FieldType::StArray => 15,
            FieldType::Uint8 => 16,
            FieldType::Hash160 => 17,
            FieldType::PathSet => 18,
            FieldType::Vector256 => 19,
        }
    }

    /// Inverse of [`FieldType::code`].
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -2 => FieldType::Unknown,
            -1 => FieldType::Done,
            0 => FieldType::NotPresent,
            1 => FieldType::Uint16,
            2 => FieldType::Uint32,
            3 => FieldType::Uint64,
            4 => FieldType::Hash128,
            5 => FieldType::Hash256,
            6 => FieldType::Amount,
            7 => FieldType::Blob,
            8 => FieldType::AccountId,
            14 => FieldType::StObject,
            15 => FieldType::StArray,
            16 => FieldType::Uint8,
            17 => FieldType::Hash160,
            18 => FieldType::PathSet,
            19 => FieldType::Vector256,
            _ => return None,
        })
    }

    /// Whether values of this type carry a variable-length prefix.
    pub const fn is_vl_encoded(self) -> bool {
        matches!(
            self,
            FieldType::Blob | FieldType::AccountId | FieldType::Vector256
        )
    }
}

/// An immutable field descriptor.
///
/// Equality, ordering and hashing only look at `(type, nth)`.
#[derive(Clone, Copy)]
pub struct Field {
    name: &'static str,
    nth: i32,
    field_type: FieldType,
    signing: bool,
    serialized: bool,
}

impl Field {
    /// A serialized, signing-eligible field.
    pub const fn new(name: &'static str, nth: i32, field_type: FieldType) -> Self {
        Self {
            name,
            nth,
            field_type,
            signing: true,
            serialized: true,
        }
    }

    /// Exclude this field from signing payloads.
    pub const fn not_signing(mut self) -> Self {
        self.signing = false;
        self
    }

    /// Exclude this field from the binary form entirely.
    pub const fn not_serialized(mut self) -> Self {
        self.serialized = false;
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn nth(&self) -> i32 {
        self.nth
    }

    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Packed `type << 16 | nth` key; ascending order is canonical order.
    pub const fn sort_key(&self) -> i64 {
        ((self.field_type.code() as i64) << 16) | (self.nth as i64 & 0xFFFF)
    }

    /// Whether the field appears on the wire.
    ///
    /// Auxiliary fields (`hash`, `index`, ...) have an ordinal of 256 or more
    /// and are never written.
    pub fn is_serialized(&self) -> bool {
        let type_code = self.field_type.code();
        self.serialized && (1..256).contains(&self.nth) && (1..256).contains(&type_code)
    }

    /// Whether the field is part of signing payloads.
    pub fn is_signing(&self) -> bool {
        self.signing && self.is_serialized()
    }

    pub const fn is_vl_encoded(&self) -> bool {
        self.field_type.is_vl_encoded()
    }

    /// Encode the 1 to 3 byte field header.
    pub fn header(&self) -> Vec<u8> {
        let type_code = self.field_type.code() as u8;
        let nth = self.nth as u8;
        match (type_code < 16, nth < 16) {
            (true, true) => vec![(type_code << 4) | nth],
            (true, false) => vec![type_code << 4, nth],
            (false, true) => vec![nth, type_code],
            (false, false) => vec![0, type_code, nth],
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Field {}

impl PartialOrd for Field {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Field {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({}, {:?}/{})", self.name, self.field_type, self.nth)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Decoder pair for one field type (or one overridden field).
#[derive(Clone, Copy)]
pub struct ValueCodec {
    /// Decode from the wire. The hint is the byte budget of a
    /// length-prefixed value.
    pub from_parser: fn(&mut BinaryParser<'_>, Option<usize>) -> Result<SerializedValue>,
    /// Decode from the JSON interchange form.
    pub from_json: fn(&serde_json::Value, UnknownFieldPolicy) -> Result<SerializedValue>,
}

/// Name and code lookup over a set of fields.
pub struct FieldRegistry {
    by_name: HashMap<&'static str, Field>,
    by_code: HashMap<(i32, i32), Field>,
    codecs: HashMap<FieldType, ValueCodec>,
    overrides: HashMap<&'static str, ValueCodec>,
}

static GLOBAL: Lazy<FieldRegistry> = Lazy::new(|| {
    let registry = FieldRegistry::standard();
    tracing::debug!("field registry initialised with {} fields", registry.len());
    registry
});

impl FieldRegistry {
    /// An empty registry with the standard type codecs but no fields.
    pub fn new() -> Self {
        let mut codecs = HashMap::new();
        codecs.insert(FieldType::Uint8, value::codec::UINT8);
        codecs.insert(FieldType::Uint16, value::codec::UINT16);
        codecs.insert(FieldType::Uint32, value::codec::UINT32);
        codecs.insert(FieldType::Uint64, value::codec::UINT64);
        codecs.insert(FieldType::Hash128, value::codec::HASH128);
        codecs.insert(FieldType::Hash160, value::codec::HASH160);
        codecs.insert(FieldType::Hash256, value::codec::HASH256);
        codecs.insert(FieldType::Amount, value::codec::AMOUNT);
        codecs.insert(FieldType::Blob, value::codec::BLOB);
        codecs.insert(FieldType::AccountId, value::codec::ACCOUNT_ID);
        codecs.insert(FieldType::StObject, value::codec::OBJECT);
        codecs.insert(FieldType::StArray, value::codec::ARRAY);
        codecs.insert(FieldType::PathSet, value::codec::PATH_SET);
        codecs.insert(FieldType::Vector256, value::codec::VECTOR256);

        let mut overrides = HashMap::new();
        overrides.insert(
            fields::TRANSACTION_TYPE.name(),
            value::codec::TRANSACTION_TYPE,
        );
        overrides.insert(
            fields::LEDGER_ENTRY_TYPE.name(),
            value::codec::LEDGER_ENTRY_TYPE,
        );
        overrides.insert(
            fields::TRANSACTION_RESULT.name(),
            value::codec::TRANSACTION_RESULT,
        );

        Self {
            by_name: HashMap::new(),
            by_code: HashMap::new(),
            codecs,
            overrides,
        }
    }

    /// The built-in catalog of ledger fields.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for field in fields::ALL {
            // The catalog is fixed and has no duplicates.
            if let Err(e) = registry.register(*field) {
                tracing::warn!("skipping catalog field: {}", e);
            }
        }
        registry
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static FieldRegistry {
        &GLOBAL
    }

    /// Add a field. Names and `(type, nth)` pairs must be unique.
    pub fn register(&mut self, field: Field) -> Result<()> {
        let code = (field.field_type.code(), field.nth);
        if self.by_name.contains_key(field.name) || self.by_code.contains_key(&code) {
            return Err(CodecError::DuplicateField(field.name.to_string()));
        }
        self.by_name.insert(field.name, field);
        self.by_code.insert(code, field);
        Ok(())
    }

    /// Look a field up by its JSON name.
    pub fn by_name(&self, name: &str) -> Result<Field> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CodecError::UnknownField(name.to_string()))
    }

    /// Look a field up by its header code.
    pub fn by_code(&self, type_code: i32, nth: i32) -> Result<Field> {
        self.by_code
            .get(&(type_code, nth))
            .copied()
            .ok_or(CodecError::UnknownFieldCode { type_code, nth })
    }

    /// The value codec used for `field`.
    pub fn codec(&self, field: &Field) -> Result<ValueCodec> {
        if let Some(codec) = self.overrides.get(field.name) {
            return Ok(*codec);
        }
        self.codecs
            .get(&field.field_type)
            .copied()
            .ok_or_else(|| CodecError::UnknownField(field.name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All registered fields in canonical order.
    pub fn fields(&self) -> Vec<Field> {
        let mut all: Vec<Field> = self.by_name.values().copied().collect();
        all.sort();
        all
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_encoding_cases() {
        // type < 16, nth < 16
        assert_eq!(fields::TRANSACTION_TYPE.header(), vec![0x12]);
        // type < 16, nth >= 16
        assert_eq!(fields::HIGH_QUALITY_IN.header(), vec![0x20, 16]);
        // type >= 16, nth < 16
        assert_eq!(fields::CLOSE_RESOLUTION.header(), vec![0x01, 0x10]);
        // both >= 16 (synthetic)
        let field = Field::new("Synthetic", 20, FieldType::Hash160);
        assert_eq!(field.header(), vec![0x00, 17, 20]);
    }

    #[test]
    fn test_canonical_ordering() {
        assert!(fields::TRANSACTION_TYPE < fields::FLAGS);
        assert!(fields::FLAGS < fields::SEQUENCE);
        assert!(fields::AMOUNT < fields::SIGNING_PUB_KEY);
        assert!(fields::SIGNING_PUB_KEY < fields::ACCOUNT);
    }

    #[test]
    fn test_lookup_by_name_and_code() {
        let registry = FieldRegistry::global();
        let account = registry.by_name("Account").unwrap();
        assert_eq!(account, fields::ACCOUNT);
        let same = registry.by_code(8, 1).unwrap();
        assert_eq!(same.name(), "Account");
    }

    #[test]
    fn test_unknown_lookups_fail() {
        let registry = FieldRegistry::global();
        assert!(matches!(
            registry.by_name("NoSuchField"),
            Err(CodecError::UnknownField(_))
        ));
        assert!(matches!(
            registry.by_code(2, 200),
            Err(CodecError::UnknownFieldCode { .. })
        ));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = FieldRegistry::new();
        registry.register(fields::ACCOUNT).unwrap();
        let clash = Field::new("Other", 1, FieldType::AccountId);
        assert!(matches!(
            registry.register(clash),
            Err(CodecError::DuplicateField(_))
        ));
        let same_name = Field::new("Account", 9, FieldType::AccountId);
        assert!(registry.register(same_name).is_err());
    }

    #[test]
    fn test_auxiliary_fields_not_serialized() {
        assert!(!fields::HASH.is_serialized());
        assert!(!fields::INDEX.is_serialized());
        assert!(!fields::TAKER_GETS_FUNDED.is_signing());
        assert!(FieldRegistry::global().by_name("hash").is_ok());
    }

    #[test]
    fn test_signing_flags() {
        assert!(!fields::TXN_SIGNATURE.is_signing());
        assert!(fields::TXN_SIGNATURE.is_serialized());
        assert!(!fields::SIGNERS.is_signing());
        assert!(fields::SIGNING_PUB_KEY.is_signing());
    }

    #[test]
    fn test_vl_encoded_types() {
        assert!(FieldType::Blob.is_vl_encoded());
        assert!(FieldType::AccountId.is_vl_encoded());
        assert!(FieldType::Vector256.is_vl_encoded());
        assert!(!FieldType::Amount.is_vl_encoded());
        assert!(!FieldType::StObject.is_vl_encoded());
    }

    #[test]
    fn test_type_code_roundtrip() {
        for code in [-2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 14, 15, 16, 17, 18, 19] {
            let ty = FieldType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
        }
        assert!(FieldType::from_code(9).is_none());
    }

    #[test]
    fn test_every_serialized_field_has_codec() {
        let registry = FieldRegistry::global();
        for field in registry.fields() {
            if field.is_serialized() {
                assert!(registry.codec(&field).is_ok(), "{}", field);
            }
        }
    }
}
