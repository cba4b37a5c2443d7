//! Fixed-width hash newtypes.
//!
//! All hashes render as upper-case hex in JSON and are written raw on the
//! wire.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::binary::{BinaryParser, BytesSink};
use crate::error::{CodecError, Result};

macro_rules! fixed_hash {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width in bytes.
            pub const LEN: usize = $len;

            /// All-zero value.
            pub const ZERO: Self = Self([0u8; $len]);

            /// Create from raw bytes.
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Get the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Upper-case hex.
            pub fn to_hex(&self) -> String {
                hex::encode_upper(self.0)
            }

            /// Parse from hex of exactly the right width.
            pub fn from_hex(s: &str) -> Result<Self> {
                let bytes = hex::decode(s)?;
                Self::from_slice(&bytes)
            }

            /// Copy from a slice of exactly the right width.
            pub fn from_slice(bytes: &[u8]) -> Result<Self> {
                let arr: [u8; $len] = bytes.try_into().map_err(|_| {
                    CodecError::MalformedInput(format!(
                        "{} needs {} bytes, got {}",
                        stringify!($name),
                        $len,
                        bytes.len()
                    ))
                })?;
                Ok(Self(arr))
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            pub fn from_parser(parser: &mut BinaryParser<'_>) -> Result<Self> {
                Ok(Self(parser.read_array::<$len>()?))
            }

            pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) {
                sink.put(&self.0);
            }

            pub fn to_json(&self) -> serde_json::Value {
                serde_json::Value::String(self.to_hex())
            }

            pub fn from_json(value: &serde_json::Value) -> Result<Self> {
                match value.as_str() {
                    Some(s) => Self::from_hex(s),
                    None => Err(CodecError::json("hex string", value)),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = CodecError;

            fn try_from(slice: &[u8]) -> Result<Self> {
                Self::from_slice(slice)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(de::Error::custom)
            }
        }
    };
}

fixed_hash!(
    /// A 128-bit hash (e.g. `EmailHash`).
    Hash128,
    16
);

fixed_hash!(
    /// A 160-bit hash. Account IDs and currency codes share this width.
    Hash160,
    20
);

fixed_hash!(
    /// A 256-bit hash: transaction IDs, ledger indexes, trie keys.
    Hash256,
    32
);

impl Hash256 {
    /// The nibble consumed at trie depth `depth` (0..64), high nibble first.
    pub fn nibble(&self, depth: usize) -> usize {
        let byte = self.0[depth / 2];
        if depth % 2 == 0 {
            (byte >> 4) as usize
        } else {
            (byte & 0x0F) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip() {
        let h = Hash256::from_bytes([0xab; 32]);
        let hex = h.to_hex();
        assert_eq!(hex, "AB".repeat(32));
        assert_eq!(Hash256::from_hex(&hex).unwrap(), h);
        assert_eq!(Hash256::from_hex(&hex.to_lowercase()).unwrap(), h);
    }

    #[test]
    fn test_wrong_width_rejected() {
        assert!(matches!(
            Hash160::from_hex("00"),
            Err(CodecError::MalformedInput(_))
        ));
        assert!(Hash128::from_slice(&[0u8; 17]).is_err());
    }

    #[test]
    fn test_nibbles() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xA5;
        bytes[31] = 0x3C;
        let h = Hash256::from_bytes(bytes);
        assert_eq!(h.nibble(0), 0xA);
        assert_eq!(h.nibble(1), 0x5);
        assert_eq!(h.nibble(62), 0x3);
        assert_eq!(h.nibble(63), 0xC);
    }

    #[test]
    fn test_serde_as_hex() {
        let h = Hash256::from_bytes([0x01; 32]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        assert_eq!(serde_json::from_str::<Hash256>(&json).unwrap(), h);
        assert!(serde_json::from_str::<Hash160>(&json).is_err());
    }

    #[test]
    fn test_json_requires_string() {
        assert!(Hash256::from_json(&serde_json::json!(5)).is_err());
        let zero = Hash256::from_json(&serde_json::json!("0".repeat(64))).unwrap();
        assert!(zero.is_zero());
    }
}
