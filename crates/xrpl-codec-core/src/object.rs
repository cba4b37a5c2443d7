//! Structured objects and arrays.
//!
//! An [`StObject`] is a map from [`Field`] to [`SerializedValue`] kept in
//! canonical `(type, nth)` order, so serialization is independent of how the
//! object was built. An [`StArray`] is a list of single-field wrapper objects,
//! e.g. `[{"Memo": {...}}]`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::binary::{BinaryParser, BinarySerializer, BytesSink};
use crate::error::{CodecError, Result};
use crate::field::{Field, FieldRegistry, FieldType};
use crate::fields;
use crate::hash::HashPrefix;
use crate::types::Hash256;
use crate::value::SerializedValue;

/// What to do with JSON keys that name no registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Drop them.
    #[default]
    Ignore,
    /// Fail with [`CodecError::UnknownField`].
    Reject,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StObject {
    fields: BTreeMap<Field, SerializedValue>,
}

impl StObject {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Binary
    // ─────────────────────────────────────────────────────────────────────────

    /// Read fields until an object end marker, the end of the buffer, or the
    /// absolute offset `limit`.
    pub fn from_parser(parser: &mut BinaryParser<'_>, limit: Option<usize>) -> Result<Self> {
        Self::read_fields(parser, limit, false)
    }

    /// Read an embedded object, which must be closed by an end marker.
    pub(crate) fn read_nested(parser: &mut BinaryParser<'_>) -> Result<Self> {
        Self::read_fields(parser, None, true)
    }

    fn read_fields(
        parser: &mut BinaryParser<'_>,
        limit: Option<usize>,
        nested: bool,
    ) -> Result<Self> {
        let mut object = Self::new();
        loop {
            if parser.end(limit) {
                if nested {
                    return Err(CodecError::TruncatedInput {
                        offset: parser.pos(),
                        needed: 1,
                        available: 0,
                    });
                }
                break;
            }
            let field = parser.read_field()?;
            if field == fields::OBJECT_END_MARKER {
                break;
            }
            let value = read_value(parser, &field)?;
            object.fields.insert(field, value);
        }
        Ok(object)
    }

    /// Decode a complete object; trailing bytes are an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut parser = BinaryParser::new(bytes);
        let object = Self::from_parser(&mut parser, None)?;
        if !parser.end(None) {
            return Err(CodecError::MalformedInput(format!(
                "{} trailing bytes after object",
                parser.remaining()
            )));
        }
        Ok(object)
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(hex)?)
    }

    /// Stream the fields accepted by `filter` into `sink`.
    ///
    /// Fields that are never serialized are skipped regardless of `filter`.
    pub fn to_bytes_sink<S, F>(&self, sink: &mut S, filter: F) -> Result<()>
    where
        S: BytesSink + ?Sized,
        F: Fn(&Field) -> bool,
    {
        let mut serializer = BinarySerializer::new(sink);
        for (field, value) in &self.fields {
            if field.is_serialized() && filter(field) {
                serializer.add(field, value)?;
            }
        }
        Ok(())
    }

    /// Canonical bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.to_bytes_sink(&mut out, |_| true)?;
        Ok(out)
    }

    /// Canonical bytes as upper-case hex.
    pub fn to_hex(&self) -> Result<String> {
        Ok(hex::encode_upper(self.to_bytes()?))
    }

    /// The single-signature payload: `STX\0` followed by the signing fields.
    pub fn signing_data(&self) -> Result<Vec<u8>> {
        let mut out = HashPrefix::TxSign.to_bytes().to_vec();
        self.to_bytes_sink(&mut out, Field::is_signing)?;
        Ok(out)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // JSON
    // ─────────────────────────────────────────────────────────────────────────

    /// Build from JSON, ignoring keys that name no field.
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::from_json_with(value, UnknownFieldPolicy::Ignore)
    }

    /// Build from JSON, rejecting keys that name no field.
    pub fn from_json_strict(value: &Value) -> Result<Self> {
        Self::from_json_with(value, UnknownFieldPolicy::Reject)
    }

    pub fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| CodecError::json("object", value))?;
        let registry = FieldRegistry::global();
        let mut object = Self::new();
        for (key, json) in map {
            let field = match registry.by_name(key) {
                Ok(field) if field.field_type() != FieldType::Unknown => field,
                Ok(_) | Err(_) => match policy {
                    UnknownFieldPolicy::Ignore => {
                        tracing::trace!("ignoring unknown json key {:?}", key);
                        continue;
                    }
                    UnknownFieldPolicy::Reject => {
                        return Err(CodecError::UnknownField(key.clone()));
                    }
                },
            };
            let codec = registry.codec(&field)?;
            let value = (codec.from_json)(json, policy).map_err(|e| e.in_json_field(key))?;
            object.fields.insert(field, value);
        }
        Ok(object)
    }

    /// JSON object keyed by field name.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (field, value) in &self.fields {
            map.insert(field.name().to_string(), value.to_json());
        }
        Value::Object(map)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field access
    // ─────────────────────────────────────────────────────────────────────────

    /// Assign a field, returning the previous value.
    pub fn insert(
        &mut self,
        field: Field,
        value: impl Into<SerializedValue>,
    ) -> Result<Option<SerializedValue>> {
        let value = value.into();
        if value.field_type() != field.field_type() {
            return Err(CodecError::MalformedField {
                field: field.name(),
                reason: format!(
                    "expected {:?} value, got {:?}",
                    field.field_type(),
                    value.field_type()
                ),
            });
        }
        Ok(self.fields.insert(field, value))
    }

    pub fn get(&self, field: &Field) -> Option<&SerializedValue> {
        self.fields.get(field)
    }

    pub fn get_hash256(&self, field: &Field) -> Option<Hash256> {
        self.get(field).and_then(SerializedValue::as_hash256)
    }

    pub fn contains(&self, field: &Field) -> bool {
        self.fields.contains_key(field)
    }

    pub fn remove(&mut self, field: &Field) -> Option<SerializedValue> {
        self.fields.remove(field)
    }

    /// Fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &SerializedValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decode one field's value, consuming its length prefix when it has one.
fn read_value(parser: &mut BinaryParser<'_>, field: &Field) -> Result<SerializedValue> {
    let codec = FieldRegistry::global().codec(field)?;
    let hint = if field.is_vl_encoded() {
        Some(parser.read_vl_length()?)
    } else {
        None
    };
    let start = parser.pos();
    let value = (codec.from_parser)(parser, hint).map_err(|e| match e {
        CodecError::TruncatedInput { .. }
        | CodecError::MalformedField { .. }
        | CodecError::UnknownFieldCode { .. } => e,
        other => CodecError::MalformedField {
            field: field.name(),
            reason: other.to_string(),
        },
    })?;
    if let Some(len) = hint {
        let consumed = parser.pos() - start;
        if consumed != len {
            return Err(CodecError::MalformedField {
                field: field.name(),
                reason: format!("length prefix {} but value used {} bytes", len, consumed),
            });
        }
    }
    Ok(value)
}

/// A list of single-field wrapper objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StArray(pub Vec<StObject>);

impl StArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `inner` wrapped under `field`.
    pub fn push(&mut self, field: Field, inner: StObject) -> Result<()> {
        let mut wrapper = StObject::new();
        wrapper.insert(field, inner)?;
        self.0.push(wrapper);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StObject> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read elements until the array end marker.
    pub fn from_parser(parser: &mut BinaryParser<'_>) -> Result<Self> {
        let mut array = Self::new();
        loop {
            let field = parser.read_field()?;
            if field == fields::ARRAY_END_MARKER {
                break;
            }
            if field.field_type() != FieldType::StObject {
                return Err(CodecError::MalformedField {
                    field: field.name(),
                    reason: "array elements must be objects".to_string(),
                });
            }
            let inner = StObject::read_nested(parser)?;
            array.push(field, inner)?;
        }
        Ok(array)
    }

    pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for element in &self.0 {
            element.to_bytes_sink(sink, |_| true)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.0.iter().map(StObject::to_json).collect())
    }

    pub fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::json("array", value))?;
        let registry = FieldRegistry::global();
        let mut array = Self::new();
        for item in items {
            let wrapper = item
                .as_object()
                .filter(|m| m.len() == 1)
                .ok_or_else(|| CodecError::json("single-key wrapper object", item))?;
            for (key, inner) in wrapper {
                let field = match registry.by_name(key) {
                    Ok(field) if field.field_type() != FieldType::Unknown => field,
                    Ok(_) | Err(_) => match policy {
                        UnknownFieldPolicy::Ignore => {
                            tracing::trace!("ignoring unknown array wrapper {:?}", key);
                            continue;
                        }
                        UnknownFieldPolicy::Reject => {
                            return Err(CodecError::UnknownField(key.clone()));
                        }
                    },
                };
                if field.field_type() != FieldType::StObject {
                    return Err(CodecError::json("object field wrapper", item));
                }
                let inner =
                    StObject::from_json_with(inner, policy).map_err(|e| e.in_json_field(key))?;
                array.push(field, inner)?;
            }
        }
        Ok(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAYMENT_HEX: &str = "120000228000000024000000016140000000000003E868400000000000000A7321EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7438E021D8114C0A5ABEF242802EFED4B041E8F2D4A8CC86AE3D18314B5F762798A53D543A014CAF8B297CFF8F2F937E8";

    fn payment_json() -> Value {
        json!({
            "Account": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
            "Amount": "1000",
            "Destination": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Fee": "10",
            "Flags": 2147483648u32,
            "Sequence": 1,
            "SigningPubKey": "EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7438E021D",
            "TransactionType": "Payment"
        })
    }

    #[test]
    fn test_payment_encodes() {
        let object = StObject::from_json(&payment_json()).unwrap();
        assert_eq!(object.to_hex().unwrap(), PAYMENT_HEX);
    }

    #[test]
    fn test_payment_decodes() {
        let object = StObject::from_hex(PAYMENT_HEX).unwrap();
        assert_eq!(object.to_json(), payment_json());
    }

    #[test]
    fn test_signing_data_prefix_and_filter() {
        let mut object = StObject::from_json(&payment_json()).unwrap();
        object
            .insert(fields::TXN_SIGNATURE, bytes::Bytes::from_static(&[1, 2, 3]))
            .unwrap();
        let data = object.signing_data().unwrap();
        assert_eq!(&data[..4], b"STX\0");
        assert_eq!(hex::encode_upper(&data[4..]), PAYMENT_HEX);
    }

    #[test]
    fn test_auxiliary_fields_kept_but_not_written() {
        let mut json = payment_json();
        json["hash"] = json!("00".repeat(32));
        let object = StObject::from_json(&json).unwrap();
        assert!(object.contains(&fields::HASH));
        assert_eq!(object.to_hex().unwrap(), PAYMENT_HEX);
    }

    #[test]
    fn test_unknown_keys() {
        let mut json = payment_json();
        json["NotAField"] = json!(1);
        assert!(StObject::from_json(&json).is_ok());
        assert!(matches!(
            StObject::from_json_strict(&json),
            Err(CodecError::UnknownField(_))
        ));
    }

    #[test]
    fn test_bad_value_names_field() {
        let mut json = payment_json();
        json["Fee"] = json!("1.5");
        match StObject::from_json(&json) {
            Err(CodecError::InvalidJson { field, .. }) => assert_eq!(field, "Fee"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_nested_array_roundtrip() {
        let json = json!({
            "TransactionType": "Payment",
            "Memos": [
                {"Memo": {"MemoType": "0A", "MemoData": "DEADBEEF"}},
                {"Memo": {"MemoData": "00"}}
            ]
        });
        let object = StObject::from_json(&json).unwrap();
        let bytes = object.to_bytes().unwrap();
        // Memos header, Memo header, ..., object end, ..., array end.
        assert_eq!(bytes[3], 0xF9);
        assert_eq!(bytes[4], 0xEA);
        assert_eq!(*bytes.last().unwrap(), 0xF1);
        let decoded = StObject::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, object);
        assert_eq!(decoded.to_json(), json);
    }

    #[test]
    fn test_unknown_array_wrapper_follows_policy() {
        let json = json!({
            "TransactionType": "Payment",
            "Memos": [
                {"NotAField": {}},
                {"Memo": {"MemoData": "00"}}
            ]
        });

        let object = StObject::from_json(&json).unwrap();
        let memos = match object.get(&fields::MEMOS) {
            Some(SerializedValue::Array(memos)) => memos,
            other => panic!("expected memos array, got {:?}", other),
        };
        assert_eq!(memos.len(), 1);

        let err = StObject::from_json_strict(&json).unwrap_err();
        match err {
            CodecError::InvalidJson { field, source } => {
                assert_eq!(field, "Memos");
                assert!(matches!(*source, CodecError::UnknownField(ref k) if k == "NotAField"));
            }
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_input() {
        let bytes = hex::decode(PAYMENT_HEX).unwrap();
        let err = StObject::from_bytes(&bytes[..bytes.len() - 3]).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput { .. }));
    }

    #[test]
    fn test_account_length_mismatch_is_malformed_field() {
        // Account with a 19 byte length prefix.
        let mut bytes = vec![0x81, 19];
        bytes.extend_from_slice(&[0u8; 19]);
        match StObject::from_bytes(&bytes) {
            Err(CodecError::MalformedField { field, .. }) => assert_eq!(field, "Account"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_transaction_type_code() {
        let bytes = [0x12, 0x00, 0x63];
        assert!(matches!(
            StObject::from_bytes(&bytes),
            Err(CodecError::MalformedField { field: "TransactionType", .. })
        ));
    }

    #[test]
    fn test_insert_checks_type() {
        let mut object = StObject::new();
        assert!(object.insert(fields::SEQUENCE, 5u32).is_ok());
        assert!(object.insert(fields::SEQUENCE, 5u16).is_err());
        assert_eq!(object.get(&fields::SEQUENCE), Some(&SerializedValue::Uint32(5)));
    }

    #[test]
    fn test_construction_order_does_not_matter() {
        let mut a = StObject::new();
        a.insert(fields::SEQUENCE, 1u32).unwrap();
        a.insert(fields::FLAGS, 0u32).unwrap();
        let mut b = StObject::new();
        b.insert(fields::FLAGS, 0u32).unwrap();
        b.insert(fields::SEQUENCE, 1u32).unwrap();
        assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = hex::decode(PAYMENT_HEX).unwrap();
        bytes.extend_from_slice(&[0xE1, 0x24, 0, 0, 0, 1]);
        assert!(StObject::from_bytes(&bytes).is_err());
    }
}
