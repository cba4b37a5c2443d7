//! Key pairs and the signing seam.

use std::fmt;

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use xrpl_codec_core::{sha512_half, AccountId};

use crate::error::{Result, SigningError};
use crate::secp256k1::{verify_secp256k1, K256KeyPair};
use crate::seed::{KeyType, Seed};

/// Leading byte that marks a canonical Ed25519 public key.
pub const ED25519_KEY_PREFIX: u8 = 0xED;

/// Anything that can sign transaction payloads.
pub trait Signer {
    /// Canonical public key as stored in `SigningPubKey`.
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Sign the full signing payload, prefix included.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Check `signature` over `message` against this signer's key.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()>;

    /// Account that this key controls by default.
    fn account_id(&self) -> AccountId {
        account_id_for(&self.public_key_bytes())
    }
}

/// `RIPEMD-160(SHA-256(public key))`.
pub fn account_id_for(public_key: &[u8]) -> AccountId {
    let sha = Sha256::digest(public_key);
    let digest = Ripemd160::digest(sha);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest);
    AccountId::from_bytes(bytes)
}

/// An Ed25519 key pair derived from a family seed.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// The secret key is the SHA-512 half of the seed entropy.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        if seed.key_type() != KeyType::Ed25519 {
            return Err(SigningError::UnsupportedKeyType(seed.key_type().name()));
        }
        let secret = sha512_half(seed.as_bytes());
        Ok(Self {
            signing_key: SigningKey::from_bytes(secret.as_bytes()),
        })
    }

    /// Derive from an `sEd...` secret.
    pub fn from_secret(secret: &str) -> Result<Self> {
        Self::from_seed(&Seed::from_base58(secret)?)
    }

    /// Upper-case hex of the canonical public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key_bytes())
    }
}

impl Signer for Ed25519KeyPair {
    fn public_key_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(33);
        out.push(ED25519_KEY_PREFIX);
        out.extend_from_slice(self.signing_key.verifying_key().as_bytes());
        out
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.signing_key.sign(message).to_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        verify_ed25519(&self.public_key_bytes(), message, signature)
    }
}

impl fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519KeyPair({})", self.public_key_hex())
    }
}

/// A key pair of either scheme, as derived from a seed.
#[derive(Debug, Clone)]
pub enum KeyPair {
    Ed25519(Ed25519KeyPair),
    Secp256k1(K256KeyPair),
}

impl KeyPair {
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        match seed.key_type() {
            KeyType::Ed25519 => Ed25519KeyPair::from_seed(seed).map(KeyPair::Ed25519),
            KeyType::Secp256k1 => K256KeyPair::from_seed(seed).map(KeyPair::Secp256k1),
        }
    }

    /// Derive from an `s...` or `sEd...` secret.
    pub fn from_secret(secret: &str) -> Result<Self> {
        Self::from_seed(&Seed::from_base58(secret)?)
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            KeyPair::Ed25519(_) => KeyType::Ed25519,
            KeyPair::Secp256k1(_) => KeyType::Secp256k1,
        }
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key_bytes())
    }

    fn inner(&self) -> &dyn Signer {
        match self {
            KeyPair::Ed25519(pair) => pair,
            KeyPair::Secp256k1(pair) => pair,
        }
    }
}

impl Signer for KeyPair {
    fn public_key_bytes(&self) -> Vec<u8> {
        self.inner().public_key_bytes()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.inner().sign(message)
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        self.inner().verify(message, signature)
    }
}

/// Verify against a canonical public key of either scheme. `0xED` marks
/// Ed25519, `0x02`/`0x03` a compressed secp256k1 point.
pub fn verify_signature(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
    match public_key.first() {
        Some(&ED25519_KEY_PREFIX) => verify_ed25519(public_key, message, signature),
        Some(0x02) | Some(0x03) => verify_secp256k1(public_key, message, signature),
        _ => Err(SigningError::InvalidKey(format!(
            "unrecognised public key {}",
            hex::encode_upper(public_key)
        ))),
    }
}

/// Verify against a canonical (`0xED`-prefixed) Ed25519 public key.
pub fn verify_ed25519(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
    let raw = match public_key {
        [ED25519_KEY_PREFIX, rest @ ..] if rest.len() == 32 => rest,
        [ED25519_KEY_PREFIX, ..] => {
            return Err(SigningError::InvalidKey(format!(
                "ed25519 key must be 33 bytes, got {}",
                public_key.len()
            )))
        }
        _ => return Err(SigningError::UnsupportedKeyType(KeyType::Secp256k1.name())),
    };
    let mut key = [0u8; 32];
    key.copy_from_slice(raw);
    let verifying_key =
        VerifyingKey::from_bytes(&key).map_err(|e| SigningError::InvalidKey(e.to_string()))?;

    let signature =
        Signature::from_slice(signature).map_err(|_| SigningError::InvalidSignature)?;

    verifying_key
        .verify(message, &signature)
        .map_err(|_| SigningError::InvalidSignature)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIQ: &str = "sEd7rBGm5kxzauRTAV2hbsNz7N45X91";

    #[test]
    fn test_niq_public_key() {
        let pair = Ed25519KeyPair::from_secret(NIQ).unwrap();
        assert_eq!(
            pair.public_key_hex(),
            "EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7438E021D"
        );
    }

    #[test]
    fn test_niq_account_id() {
        let pair = Ed25519KeyPair::from_secret(NIQ).unwrap();
        assert_eq!(
            pair.account_id().to_address(),
            "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN"
        );
    }

    #[test]
    fn test_secp256k1_seed_unsupported() {
        let seed = Seed::from_passphrase("masterpassphrase");
        assert!(matches!(
            Ed25519KeyPair::from_seed(&seed),
            Err(SigningError::UnsupportedKeyType("secp256k1"))
        ));
    }

    #[test]
    fn test_sign_verify() {
        let pair = Seed::random(KeyType::Ed25519).key_pair().unwrap();
        let message = b"STX\0payload";
        let signature = pair.sign(message).unwrap();
        assert_eq!(signature.len(), 64);

        pair.verify(message, &signature)
            .expect("valid signature should verify");
        assert!(pair.verify(b"STX\0payloaD", &signature).is_err());
        assert!(pair.verify(message, &signature[..63]).is_err());
    }

    #[test]
    fn test_verify_rejects_secp256k1_key() {
        let mut key = vec![0x02];
        key.extend_from_slice(&[1u8; 32]);
        assert!(matches!(
            verify_ed25519(&key, b"m", &[0u8; 64]),
            Err(SigningError::UnsupportedKeyType(_))
        ));
    }

    #[test]
    fn test_key_pair_dispatches_on_seed_type() {
        let ed = KeyPair::from_secret(NIQ).unwrap();
        assert_eq!(ed.key_type(), KeyType::Ed25519);
        assert!(ed.public_key_hex().starts_with("ED"));

        let k = KeyPair::from_secret("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap();
        assert_eq!(k.key_type(), KeyType::Secp256k1);
        assert_eq!(
            k.account_id().to_address(),
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
        );
    }

    #[test]
    fn test_verify_signature_by_key_prefix() {
        let message = b"STX\0payload";
        for pair in [
            KeyPair::from_secret(NIQ).unwrap(),
            KeyPair::from_secret("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap(),
        ] {
            let signature = pair.sign(message).unwrap();
            verify_signature(&pair.public_key_bytes(), message, &signature).unwrap();
            assert!(verify_signature(&pair.public_key_bytes(), b"other", &signature).is_err());
        }
        assert!(matches!(
            verify_signature(&[0x04; 33], message, &[0u8; 64]),
            Err(SigningError::InvalidKey(_))
        ));
    }

    proptest::proptest! {
        #[test]
        fn signatures_verify_only_their_message(
            entropy in proptest::prelude::any::<[u8; 16]>(),
            message in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..256),
        ) {
            let pair = Seed::new(entropy, KeyType::Ed25519).key_pair().unwrap();
            let signature = pair.sign(&message).unwrap();
            proptest::prop_assert!(pair.verify(&message, &signature).is_ok());

            let mut other = message.clone();
            other.push(0);
            proptest::prop_assert!(pair.verify(&other, &signature).is_err());
        }
    }
}
