//! 160-bit currency codes.
//!
//! The all-zero code is the native asset. A code whose only non-zero bytes
//! are 12..15 is a three-letter ISO-style code; anything else is opaque and
//! rendered as hex.

use std::fmt;

use crate::binary::{BinaryParser, BytesSink};
use crate::error::{CodecError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(pub [u8; 20]);

impl Currency {
    /// The native asset.
    pub const XRP: Self = Self([0u8; 20]);

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_native(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Build a standard code from three ASCII characters.
    pub fn from_iso(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_graphic()) {
            return Err(CodecError::MalformedInput(format!(
                "currency code {:?} is not three ASCII characters",
                code
            )));
        }
        let mut out = [0u8; 20];
        out[12..15].copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// The three-letter code, if this is a standard currency.
    pub fn iso_code(&self) -> Option<String> {
        if self.is_native() {
            return Some("XRP".to_string());
        }
        let outside_zero = self
            .0
            .iter()
            .enumerate()
            .all(|(i, b)| (12..15).contains(&i) || *b == 0);
        let code = &self.0[12..15];
        if outside_zero && code.iter().all(|b| b.is_ascii_graphic()) {
            Some(code.iter().map(|b| *b as char).collect())
        } else {
            None
        }
    }

    /// Parse `"XRP"`, a three-letter code, or 40 hex characters.
    pub fn parse(s: &str) -> Result<Self> {
        match s.len() {
            3 if s == "XRP" => Ok(Self::XRP),
            3 => Self::from_iso(s),
            40 => {
                let mut out = [0u8; 20];
                hex::decode_to_slice(s, &mut out)?;
                Ok(Self(out))
            }
            _ => Err(CodecError::MalformedInput(format!(
                "unrecognised currency {:?}",
                s
            ))),
        }
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> Result<Self> {
        Ok(Self(parser.read_array::<20>()?))
    }

    pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.0);
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.to_string())
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value.as_str() {
            Some(s) => Self::parse(s),
            None => Err(CodecError::json("currency string", value)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iso_code() {
            // A non-native code spelling "XRP" would be ambiguous.
            Some(code) if code != "XRP" || self.is_native() => f.write_str(&code),
            _ => f.write_str(&hex::encode_upper(self.0)),
        }
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_layout() {
        let usd = Currency::parse("USD").unwrap();
        assert_eq!(
            hex::encode_upper(usd.0),
            "0000000000000000000000005553440000000000"
        );
        assert_eq!(usd.to_string(), "USD");
        assert!(!usd.is_native());
    }

    #[test]
    fn test_native() {
        let xrp = Currency::parse("XRP").unwrap();
        assert!(xrp.is_native());
        assert_eq!(xrp.to_string(), "XRP");
    }

    #[test]
    fn test_non_standard_renders_hex() {
        let hex = "015841551A748AD2C1F76FF6ECB0CCCD00000000";
        let c = Currency::parse(hex).unwrap();
        assert_eq!(c.iso_code(), None);
        assert_eq!(c.to_string(), hex);
    }

    #[test]
    fn test_fake_xrp_renders_hex() {
        let mut bytes = [0u8; 20];
        bytes[12..15].copy_from_slice(b"XRP");
        let c = Currency::from_bytes(bytes);
        assert!(!c.is_native());
        assert_eq!(c.to_string(), hex::encode_upper(bytes));
    }

    #[test]
    fn test_bad_lengths() {
        assert!(Currency::parse("US").is_err());
        assert!(Currency::parse("USDX").is_err());
    }
}
