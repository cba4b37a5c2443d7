//! Typed field values.

use bytes::Bytes;
use serde_json::Value;

use crate::address::AccountId;
use crate::amount::Amount;
use crate::binary::BytesSink;
use crate::enums::{EngineResult, LedgerEntryType, TransactionType};
use crate::error::Result;
use crate::field::FieldType;
use crate::object::{StArray, StObject};
use crate::path::PathSet;
use crate::types::{Hash128, Hash160, Hash256};

/// Every value a field can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializedValue {
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Hash128(Hash128),
    Hash160(Hash160),
    Hash256(Hash256),
    AccountId(AccountId),
    Amount(Amount),
    Blob(Bytes),
    PathSet(PathSet),
    Vector256(Vec<Hash256>),
    Object(StObject),
    Array(StArray),
    TransactionType(TransactionType),
    LedgerEntryType(LedgerEntryType),
    TransactionResult(EngineResult),
}

impl SerializedValue {
    /// The field type this value serializes as.
    pub fn field_type(&self) -> FieldType {
        match self {
            SerializedValue::Uint8(_) | SerializedValue::TransactionResult(_) => FieldType::Uint8,
            SerializedValue::Uint16(_)
            | SerializedValue::TransactionType(_)
            | SerializedValue::LedgerEntryType(_) => FieldType::Uint16,
            SerializedValue::Uint32(_) => FieldType::Uint32,
            SerializedValue::Uint64(_) => FieldType::Uint64,
            SerializedValue::Hash128(_) => FieldType::Hash128,
            SerializedValue::Hash160(_) => FieldType::Hash160,
            SerializedValue::Hash256(_) => FieldType::Hash256,
            SerializedValue::AccountId(_) => FieldType::AccountId,
            SerializedValue::Amount(_) => FieldType::Amount,
            SerializedValue::Blob(_) => FieldType::Blob,
            SerializedValue::PathSet(_) => FieldType::PathSet,
            SerializedValue::Vector256(_) => FieldType::Vector256,
            SerializedValue::Object(_) => FieldType::StObject,
            SerializedValue::Array(_) => FieldType::StArray,
        }
    }

    /// Write the value's payload, without header, length prefix or end
    /// marker.
    pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        match self {
            SerializedValue::Uint8(v) => sink.put_u8(*v),
            SerializedValue::Uint16(v) => sink.put(&v.to_be_bytes()),
            SerializedValue::Uint32(v) => sink.put(&v.to_be_bytes()),
            SerializedValue::Uint64(v) => sink.put(&v.to_be_bytes()),
            SerializedValue::Hash128(h) => h.to_bytes_sink(sink),
            SerializedValue::Hash160(h) => h.to_bytes_sink(sink),
            SerializedValue::Hash256(h) => h.to_bytes_sink(sink),
            SerializedValue::AccountId(a) => a.to_bytes_sink(sink),
            SerializedValue::Amount(a) => a.to_bytes_sink(sink),
            SerializedValue::Blob(b) => sink.put(b),
            SerializedValue::PathSet(p) => p.to_bytes_sink(sink),
            SerializedValue::Vector256(hashes) => {
                for h in hashes {
                    h.to_bytes_sink(sink);
                }
            }
            SerializedValue::Object(o) => o.to_bytes_sink(sink, |_| true)?,
            SerializedValue::Array(a) => a.to_bytes_sink(sink)?,
            SerializedValue::TransactionType(t) => sink.put(&t.code().to_be_bytes()),
            SerializedValue::LedgerEntryType(t) => sink.put(&t.code().to_be_bytes()),
            SerializedValue::TransactionResult(r) => sink.put_u8(r.code()),
        }
        Ok(())
    }

    /// Payload bytes as a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.to_bytes_sink(&mut out)?;
        Ok(out)
    }

    pub fn to_json(&self) -> Value {
        match self {
            SerializedValue::Uint8(v) => Value::from(*v),
            SerializedValue::Uint16(v) => Value::from(*v),
            SerializedValue::Uint32(v) => Value::from(*v),
            SerializedValue::Uint64(v) => Value::String(format!("{:016X}", v)),
            SerializedValue::Hash128(h) => h.to_json(),
            SerializedValue::Hash160(h) => h.to_json(),
            SerializedValue::Hash256(h) => h.to_json(),
            SerializedValue::AccountId(a) => a.to_json(),
            SerializedValue::Amount(a) => a.to_json(),
            SerializedValue::Blob(b) => Value::String(hex::encode_upper(b)),
            SerializedValue::PathSet(p) => p.to_json(),
            SerializedValue::Vector256(hashes) => {
                Value::Array(hashes.iter().map(Hash256::to_json).collect())
            }
            SerializedValue::Object(o) => o.to_json(),
            SerializedValue::Array(a) => a.to_json(),
            SerializedValue::TransactionType(t) => t.to_json(),
            SerializedValue::LedgerEntryType(t) => t.to_json(),
            SerializedValue::TransactionResult(r) => r.to_json(),
        }
    }

    pub fn as_hash256(&self) -> Option<Hash256> {
        match self {
            SerializedValue::Hash256(h) => Some(*h),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&Bytes> {
        match self {
            SerializedValue::Blob(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&StObject> {
        match self {
            SerializedValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_account_id(&self) -> Option<AccountId> {
        match self {
            SerializedValue::AccountId(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_amount(&self) -> Option<&Amount> {
        match self {
            SerializedValue::Amount(a) => Some(a),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident,)+) => {
        $(
            impl From<$ty> for SerializedValue {
                fn from(v: $ty) -> Self {
                    SerializedValue::$variant(v)
                }
            }
        )+
    };
}

impl_from! {
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    Hash128 => Hash128,
    Hash160 => Hash160,
    Hash256 => Hash256,
    AccountId => AccountId,
    Amount => Amount,
    Bytes => Blob,
    PathSet => PathSet,
    StObject => Object,
    StArray => Array,
    TransactionType => TransactionType,
    LedgerEntryType => LedgerEntryType,
    EngineResult => TransactionResult,
}

/// Per-type decoders registered in the field registry.
pub(crate) mod codec {
    use bytes::Bytes;
    use serde_json::Value;

    use super::SerializedValue;
    use crate::address::AccountId;
    use crate::amount::Amount;
    use crate::binary::BinaryParser;
    use crate::enums::{EngineResult, LedgerEntryType, TransactionType};
    use crate::error::{CodecError, Result};
    use crate::field::ValueCodec;
    use crate::object::{StArray, StObject, UnknownFieldPolicy};
    use crate::path::PathSet;
    use crate::types::{Hash128, Hash160, Hash256};

    pub const UINT8: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Uint8(p.read_u8()?)),
        from_json: |v, _| Ok(SerializedValue::Uint8(uint_from_json(v)?)),
    };

    pub const UINT16: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Uint16(u16::from_be_bytes(p.read_array()?))),
        from_json: |v, _| Ok(SerializedValue::Uint16(uint_from_json(v)?)),
    };

    pub const UINT32: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Uint32(u32::from_be_bytes(p.read_array()?))),
        from_json: |v, _| Ok(SerializedValue::Uint32(uint_from_json(v)?)),
    };

    pub const UINT64: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Uint64(u64::from_be_bytes(p.read_array()?))),
        from_json: |v, _| Ok(SerializedValue::Uint64(uint64_from_json(v)?)),
    };

    pub const HASH128: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Hash128(Hash128::from_parser(p)?)),
        from_json: |v, _| Ok(SerializedValue::Hash128(Hash128::from_json(v)?)),
    };

    pub const HASH160: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Hash160(Hash160::from_parser(p)?)),
        from_json: |v, _| Ok(SerializedValue::Hash160(Hash160::from_json(v)?)),
    };

    pub const HASH256: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Hash256(Hash256::from_parser(p)?)),
        from_json: |v, _| Ok(SerializedValue::Hash256(Hash256::from_json(v)?)),
    };

    pub const AMOUNT: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Amount(Amount::from_parser(p)?)),
        from_json: |v, _| Ok(SerializedValue::Amount(Amount::from_json(v)?)),
    };

    pub const BLOB: ValueCodec = ValueCodec {
        from_parser: blob_from_parser,
        from_json: |v, _| Ok(SerializedValue::Blob(blob_from_json(v)?)),
    };

    pub const ACCOUNT_ID: ValueCodec = ValueCodec {
        from_parser: account_from_parser,
        from_json: |v, _| Ok(SerializedValue::AccountId(AccountId::from_json(v)?)),
    };

    pub const OBJECT: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Object(StObject::read_nested(p)?)),
        from_json: |v, policy| Ok(SerializedValue::Object(StObject::from_json_with(v, policy)?)),
    };

    pub const ARRAY: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::Array(StArray::from_parser(p)?)),
        from_json: |v, policy| Ok(SerializedValue::Array(StArray::from_json_with(v, policy)?)),
    };

    pub const PATH_SET: ValueCodec = ValueCodec {
        from_parser: |p, _| Ok(SerializedValue::PathSet(PathSet::from_parser(p)?)),
        from_json: |v, _| Ok(SerializedValue::PathSet(PathSet::from_json(v)?)),
    };

    pub const VECTOR256: ValueCodec = ValueCodec {
        from_parser: vector256_from_parser,
        from_json: vector256_from_json,
    };

    pub const TRANSACTION_TYPE: ValueCodec = ValueCodec {
        from_parser: |p, _| {
            let code = u16::from_be_bytes(p.read_array()?);
            TransactionType::from_code(code)
                .map(SerializedValue::TransactionType)
                .ok_or_else(|| unknown_code("transaction type", code as u32))
        },
        from_json: |v, _| Ok(SerializedValue::TransactionType(TransactionType::from_json(v)?)),
    };

    pub const LEDGER_ENTRY_TYPE: ValueCodec = ValueCodec {
        from_parser: |p, _| {
            let code = u16::from_be_bytes(p.read_array()?);
            LedgerEntryType::from_code(code)
                .map(SerializedValue::LedgerEntryType)
                .ok_or_else(|| unknown_code("ledger entry type", code as u32))
        },
        from_json: |v, _| Ok(SerializedValue::LedgerEntryType(LedgerEntryType::from_json(v)?)),
    };

    pub const TRANSACTION_RESULT: ValueCodec = ValueCodec {
        from_parser: |p, _| {
            let code = p.read_u8()?;
            EngineResult::from_code(code)
                .map(SerializedValue::TransactionResult)
                .ok_or_else(|| unknown_code("engine result", code as u32))
        },
        from_json: |v, _| Ok(SerializedValue::TransactionResult(EngineResult::from_json(v)?)),
    };

    fn unknown_code(what: &str, code: u32) -> CodecError {
        CodecError::MalformedInput(format!("unknown {} code {}", what, code))
    }

    fn require_hint(hint: Option<usize>) -> Result<usize> {
        hint.ok_or_else(|| CodecError::MalformedInput("missing length prefix".to_string()))
    }

    fn blob_from_parser(parser: &mut BinaryParser<'_>, hint: Option<usize>) -> Result<SerializedValue> {
        let len = require_hint(hint)?;
        Ok(SerializedValue::Blob(Bytes::copy_from_slice(parser.read(len)?)))
    }

    fn account_from_parser(
        parser: &mut BinaryParser<'_>,
        hint: Option<usize>,
    ) -> Result<SerializedValue> {
        match hint {
            Some(20) | None => Ok(SerializedValue::AccountId(AccountId::from_parser(parser)?)),
            Some(n) => Err(CodecError::MalformedInput(format!(
                "account id length prefix {} is not 20",
                n
            ))),
        }
    }

    fn vector256_from_parser(
        parser: &mut BinaryParser<'_>,
        hint: Option<usize>,
    ) -> Result<SerializedValue> {
        let len = require_hint(hint)?;
        if len % 32 != 0 {
            return Err(CodecError::MalformedInput(format!(
                "vector256 length {} is not a multiple of 32",
                len
            )));
        }
        let hashes = (0..len / 32)
            .map(|_| Hash256::from_parser(parser))
            .collect::<Result<Vec<_>>>()?;
        Ok(SerializedValue::Vector256(hashes))
    }

    fn vector256_from_json(value: &Value, _: UnknownFieldPolicy) -> Result<SerializedValue> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::json("array of hashes", value))?;
        let hashes = items
            .iter()
            .map(Hash256::from_json)
            .collect::<Result<Vec<_>>>()?;
        Ok(SerializedValue::Vector256(hashes))
    }

    fn blob_from_json(value: &Value) -> Result<Bytes> {
        match value.as_str() {
            Some(s) => Ok(Bytes::from(hex::decode(s)?)),
            None => Err(CodecError::json("hex string", value)),
        }
    }

    fn uint_from_json<T: TryFrom<u64>>(value: &Value) -> Result<T> {
        let n = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse::<u64>().ok(),
            _ => None,
        };
        n.and_then(|n| T::try_from(n).ok())
            .ok_or_else(|| CodecError::json("unsigned integer in range", value))
    }

    fn uint64_from_json(value: &Value) -> Result<u64> {
        match value {
            Value::String(s) => u64::from_str_radix(s, 16)
                .map_err(|_| CodecError::json("hex encoded uint64", value)),
            Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| CodecError::json("unsigned integer", value)),
            _ => Err(CodecError::json("hex encoded uint64", value)),
        }
    }
}
