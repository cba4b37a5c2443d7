//! Hash primitives: SHA-512 half with domain-separation prefixes.
//!
//! Every ledger hash is the first 256 bits of SHA-512 over a 4-byte
//! big-endian [`HashPrefix`] followed by the payload. [`Sha512Half`] is also a
//! [`BytesSink`], so serializers can stream straight into the hasher.

use sha2::{Digest, Sha256, Sha512};

use crate::binary::BytesSink;
use crate::types::Hash256;

/// Domain-separation prefixes, each three ASCII letters and a zero byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HashPrefix {
    /// `TXN\0`: transaction ID.
    TransactionId = 0x5458_4E00,
    /// `SND\0`: transaction plus metadata leaf.
    TxNode = 0x534E_4400,
    /// `MLN\0`: account-state leaf.
    LeafNode = 0x4D4C_4E00,
    /// `MIN\0`: inner trie node.
    InnerNode = 0x4D49_4E00,
    /// `STX\0`: single-signature signing payload.
    TxSign = 0x5354_5800,
    /// `SMT\0`: multi-signature signing payload.
    TxMultiSign = 0x534D_5400,
    /// `LWR\0`: ledger header.
    LedgerMaster = 0x4C57_5200,
    /// `VAL\0`: validation.
    Validation = 0x5641_4C00,
    /// `PRP\0`: proposal.
    Proposal = 0x5052_5000,
}

impl HashPrefix {
    /// The prefix as it appears on the wire.
    pub const fn to_bytes(self) -> [u8; 4] {
        (self as u32).to_be_bytes()
    }
}

/// Incremental SHA-512 half hasher.
#[derive(Clone, Default)]
pub struct Sha512Half(Sha512);

impl Sha512Half {
    /// Create an empty hasher.
    pub fn new() -> Self {
        Self(Sha512::new())
    }

    /// Create a hasher that has already absorbed `prefix`.
    pub fn with_prefix(prefix: HashPrefix) -> Self {
        let mut hasher = Self::new();
        hasher.update(&prefix.to_bytes());
        hasher
    }

    /// Absorb more bytes.
    pub fn update(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    /// Finish and keep the first 32 bytes of the digest.
    pub fn finish(self) -> Hash256 {
        let digest = self.0.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest[..32]);
        Hash256::from_bytes(out)
    }
}

impl BytesSink for Sha512Half {
    fn put(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// SHA-512 half of `data`, no prefix.
pub fn sha512_half(data: &[u8]) -> Hash256 {
    let mut hasher = Sha512Half::new();
    hasher.update(data);
    hasher.finish()
}

/// SHA-512 half of `prefix || data`.
pub fn prefixed_half(prefix: HashPrefix, data: &[u8]) -> Hash256 {
    let mut hasher = Sha512Half::with_prefix(prefix);
    hasher.update(data);
    hasher.finish()
}

/// Full SHA-512 digest.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let digest = Sha512::digest(data);
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

/// SHA-256 applied twice, used for base58 checksums.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bytes() {
        assert_eq!(HashPrefix::TxSign.to_bytes(), *b"STX\0");
        assert_eq!(HashPrefix::TransactionId.to_bytes(), *b"TXN\0");
        assert_eq!(HashPrefix::InnerNode.to_bytes(), *b"MIN\0");
        assert_eq!(HashPrefix::LeafNode.to_bytes(), *b"MLN\0");
        assert_eq!(HashPrefix::TxNode.to_bytes(), *b"SND\0");
    }

    #[test]
    fn test_sha512_half_is_prefix_of_sha512() {
        let full = sha512(b"hello");
        let half = sha512_half(b"hello");
        assert_eq!(&full[..32], half.as_bytes());
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let mut hasher = Sha512Half::with_prefix(HashPrefix::TxSign);
        hasher.put(b"abc");
        hasher.put_u8(b'd');
        assert_eq!(hasher.finish(), prefixed_half(HashPrefix::TxSign, b"abcd"));
    }

    #[test]
    fn test_double_sha256_known_value() {
        // sha256(sha256("")) is a well-known constant.
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}
