//! Family seeds.

use std::fmt;

use rand::RngCore;
use xrpl_codec_core::address::{
    decode_checked, encode_checked, ED25519_SEED_VERSION, K256_SEED_VERSION,
};
use xrpl_codec_core::hash::sha512;

use crate::error::{Result, SigningError};
use crate::keypair::KeyPair;

/// Signature scheme a seed derives keys for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Secp256k1,
    Ed25519,
}

impl KeyType {
    pub fn name(self) -> &'static str {
        match self {
            KeyType::Secp256k1 => "secp256k1",
            KeyType::Ed25519 => "ed25519",
        }
    }

    fn version(self) -> &'static [u8] {
        match self {
            KeyType::Secp256k1 => K256_SEED_VERSION,
            KeyType::Ed25519 => ED25519_SEED_VERSION,
        }
    }
}

/// 16 bytes of seed entropy tagged with the scheme it is meant for.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed {
    bytes: [u8; 16],
    key_type: KeyType,
}

impl Seed {
    pub const fn new(bytes: [u8; 16], key_type: KeyType) -> Self {
        Self { bytes, key_type }
    }

    /// Fresh random seed.
    pub fn random(key_type: KeyType) -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::new(bytes, key_type)
    }

    /// First 16 bytes of SHA-512 over the passphrase. Tagged secp256k1; use
    /// [`Seed::with_key_type`] to retarget.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = sha512(passphrase.as_bytes());
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self::new(bytes, KeyType::Secp256k1)
    }

    /// Decode an `s...` secret. The version prefix decides the key type.
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let (payload, key_type) = match decode_checked(ED25519_SEED_VERSION, 16, encoded) {
            Ok(payload) => (payload, KeyType::Ed25519),
            Err(_) => (
                decode_checked(K256_SEED_VERSION, 16, encoded)?,
                KeyType::Secp256k1,
            ),
        };
        let bytes: [u8; 16] = payload
            .as_slice()
            .try_into()
            .map_err(|_| SigningError::InvalidKey("seed must be 16 bytes".into()))?;
        Ok(Self::new(bytes, key_type))
    }

    pub fn to_base58(&self) -> String {
        encode_checked(self.key_type.version(), &self.bytes)
    }

    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = key_type;
        self
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Derive the signing key pair for this seed's scheme.
    pub fn key_pair(&self) -> Result<KeyPair> {
        KeyPair::from_seed(self)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.key_type.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passphrase_seeds() {
        assert_eq!(
            Seed::from_passphrase("masterpassphrase").to_base58(),
            "snoPBrXtMeMyMHUVTgbuqAfg1SUTb"
        );
        assert_eq!(
            Seed::from_passphrase("niq")
                .with_key_type(KeyType::Ed25519)
                .to_base58(),
            "sEd7rBGm5kxzauRTAV2hbsNz7N45X91"
        );
    }

    #[test]
    fn test_from_base58_detects_type() {
        let ed = Seed::from_base58("sEd7rBGm5kxzauRTAV2hbsNz7N45X91").unwrap();
        assert_eq!(ed.key_type(), KeyType::Ed25519);
        assert_eq!(ed, Seed::from_passphrase("niq").with_key_type(KeyType::Ed25519));

        let k = Seed::from_base58("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap();
        assert_eq!(k.key_type(), KeyType::Secp256k1);
    }

    #[test]
    fn test_from_base58_rejects_garbage() {
        assert!(Seed::from_base58("sEd7rBGm5kxzauRTAV2hbsNz7N45X92").is_err());
        assert!(Seed::from_base58("0OIl").is_err());
        assert!(Seed::from_base58("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh").is_err());
    }

    #[test]
    fn test_random_roundtrips() {
        let seed = Seed::random(KeyType::Ed25519);
        assert_eq!(Seed::from_base58(&seed.to_base58()).unwrap(), seed);
    }

    #[test]
    fn test_debug_hides_entropy() {
        let seed = Seed::from_passphrase("niq");
        assert_eq!(format!("{:?}", seed), "Seed(secp256k1)");
    }
}
