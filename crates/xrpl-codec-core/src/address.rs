//! Base58Check addresses with the ledger alphabet.
//!
//! A checked string is `base58(version || payload || checksum)` where the
//! checksum is the first four bytes of `sha256(sha256(version || payload))`.

use std::fmt;
use std::str::FromStr;

use crate::binary::{BinaryParser, BytesSink};
use crate::error::{CodecError, Result};
use crate::hash::double_sha256;

const ALPHABET: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Version bytes for account IDs.
pub const ACCOUNT_ID_VERSION: &[u8] = &[0x00];
/// Version bytes for secp256k1 family seeds.
pub const K256_SEED_VERSION: &[u8] = &[0x21];
/// Version bytes for Ed25519 seeds.
pub const ED25519_SEED_VERSION: &[u8] = &[0x01, 0xE1, 0x4B];

/// Plain base58 encoding.
pub fn encode_base58(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|b| **b == 0).count();
    // Little-endian base-58 digits.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    out.extend(digits.iter().rev().map(|d| ALPHABET[*d as usize] as char));
    out
}

/// Plain base58 decoding.
pub fn decode_base58(input: &str) -> Result<Vec<u8>> {
    let zeros = input.bytes().take_while(|c| *c == ALPHABET[0]).count();
    // Little-endian base-256 bytes.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for c in input.bytes().skip(zeros) {
        let value = ALPHABET
            .iter()
            .position(|a| *a == c)
            .ok_or_else(|| CodecError::InvalidAddress(format!("bad character {:?}", c as char)))?;
        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }
    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

/// Encode `payload` under `version` with a checksum.
pub fn encode_checked(version: &[u8], payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(version.len() + payload.len() + 4);
    buf.extend_from_slice(version);
    buf.extend_from_slice(payload);
    let check = double_sha256(&buf);
    buf.extend_from_slice(&check[..4]);
    encode_base58(&buf)
}

/// Decode a checked string, verifying version, payload length and checksum.
pub fn decode_checked(version: &[u8], expected_len: usize, input: &str) -> Result<Vec<u8>> {
    // Decoding is quadratic; bound it by the longest encoding of a valid payload.
    let max_chars = max_encoded_len(version.len() + expected_len + 4);
    if input.len() > max_chars {
        return Err(CodecError::InvalidAddress(format!(
            "{} characters exceeds {}",
            input.len(),
            max_chars
        )));
    }
    let raw = decode_base58(input)?;
    if raw.len() != version.len() + expected_len + 4 {
        return Err(CodecError::InvalidAddress(format!(
            "{} decodes to {} bytes",
            input,
            raw.len()
        )));
    }
    let (body, check) = raw.split_at(raw.len() - 4);
    if &double_sha256(body)[..4] != check {
        return Err(CodecError::ChecksumMismatch);
    }
    if &body[..version.len()] != version {
        return Err(CodecError::InvalidAddress(format!(
            "{} has the wrong version",
            input
        )));
    }
    Ok(body[version.len()..].to_vec())
}

/// Upper bound on the base58 length of `n` bytes.
fn max_encoded_len(n: usize) -> usize {
    n * 138 / 100 + 1
}

/// A 20-byte account identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    /// All zeros: `rrrrrrrrrrrrrrrrrrrrrhoLvTp`.
    pub const ZERO: Self = Self([0u8; 20]);

    /// `...01`: the placeholder issuer, `rrrrrrrrrrrrrrrrrrrrBZbvji`.
    pub const NEUTRAL: Self = Self([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse a base58 address.
    pub fn from_address(address: &str) -> Result<Self> {
        let payload = decode_checked(ACCOUNT_ID_VERSION, 20, address)?;
        let mut out = [0u8; 20];
        out.copy_from_slice(&payload);
        Ok(Self(out))
    }

    /// Render as a base58 address.
    pub fn to_address(&self) -> String {
        encode_checked(ACCOUNT_ID_VERSION, &self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse either a base58 address or 40 hex characters.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() == 40 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            let mut out = [0u8; 20];
            hex::decode_to_slice(s, &mut out)?;
            return Ok(Self(out));
        }
        Self::from_address(s)
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> Result<Self> {
        Ok(Self(parser.read_array::<20>()?))
    }

    pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.0);
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.to_address())
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value.as_str() {
            Some(s) => Self::parse(s),
            None => Err(CodecError::json("address string", value)),
        }
    }
}

impl FromStr for AccountId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_address())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_address())
    }
}

impl From<[u8; 20]> for AccountId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const GENESIS_HEX: &str = "B5F762798A53D543A014CAF8B297CFF8F2F937E8";

    #[test]
    fn test_known_address() {
        let id = AccountId::from_address(GENESIS).unwrap();
        assert_eq!(id.to_hex(), GENESIS_HEX);
        assert_eq!(id.to_address(), GENESIS);
    }

    #[test]
    fn test_sentinel_addresses() {
        assert_eq!(AccountId::ZERO.to_address(), "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
        assert_eq!(AccountId::NEUTRAL.to_address(), "rrrrrrrrrrrrrrrrrrrrBZbvji");
    }

    #[test]
    fn test_parse_hex_or_address() {
        let a = AccountId::parse(GENESIS).unwrap();
        let b = AccountId::parse(GENESIS_HEX).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bad_checksum() {
        // Last character changed.
        let bad = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTj";
        assert!(AccountId::from_address(bad).is_err());
    }

    #[test]
    fn test_bad_character() {
        // '0' is not in the alphabet.
        assert!(matches!(
            AccountId::from_address("r0b9CJAWyB4rj91VRWn96DkukG4bwdtyTh"),
            Err(CodecError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_oversized_checked_input_rejected() {
        let long = format!("{}{}", GENESIS, "z".repeat(10_000));
        assert!(matches!(
            AccountId::from_address(&long),
            Err(CodecError::InvalidAddress(ref msg)) if msg.contains("exceeds")
        ));
        assert!(max_encoded_len(25) >= GENESIS.len());
        assert!(encode_checked(ACCOUNT_ID_VERSION, &[0xFF; 20]).len() <= max_encoded_len(25));
    }

    #[test]
    fn test_base58_leading_zeros_roundtrip() {
        let data = [0u8, 0, 1, 2, 3, 255];
        let encoded = encode_base58(&data);
        assert!(encoded.starts_with("rr"));
        assert_eq!(decode_base58(&encoded).unwrap(), data);
    }

    #[test]
    fn test_seed_version_prefix() {
        // Ed25519 seeds always start with "sEd".
        let encoded = encode_checked(ED25519_SEED_VERSION, &[0x42; 16]);
        assert!(encoded.starts_with("sEd"));
        let decoded = decode_checked(ED25519_SEED_VERSION, 16, &encoded).unwrap();
        assert_eq!(decoded, vec![0x42; 16]);
    }
}
