//! secp256k1 family keys.
//!
//! A seed yields a root (generator) key; account keys are the generator
//! plus a scalar derived from the generator's public point and the account
//! number. Only account 0 is used for signing.

use std::fmt;

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, NonZeroScalar, SecretKey};
use xrpl_codec_core::{sha512_half, Sha512Half};

use crate::error::{Result, SigningError};
use crate::keypair::Signer;
use crate::seed::{KeyType, Seed};

/// A secp256k1 key pair for account 0 of a family seed.
#[derive(Clone)]
pub struct K256KeyPair {
    signing_key: SigningKey,
    public_key: Vec<u8>,
}

impl K256KeyPair {
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        if seed.key_type() != KeyType::Secp256k1 {
            return Err(SigningError::UnsupportedKeyType(seed.key_type().name()));
        }
        let root = derive_scalar(seed.as_bytes(), None)?;
        let generator = compressed(&root);

        let tweak = derive_scalar(&generator, Some(0))?;
        let sum = *root.to_nonzero_scalar() + *tweak.to_nonzero_scalar();
        let secret = Option::<NonZeroScalar>::from(NonZeroScalar::new(sum))
            .ok_or_else(|| SigningError::InvalidKey("account key is zero".into()))?;
        let secret = SecretKey::from(secret);

        Ok(Self {
            signing_key: SigningKey::from(&secret),
            public_key: compressed(&secret),
        })
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(&self.public_key)
    }
}

impl Signer for K256KeyPair {
    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.clone()
    }

    /// DER-encoded, low-S ECDSA over the SHA-512 half of `message`.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let digest = sha512_half(message);
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest.as_bytes())
            .map_err(|_| SigningError::InvalidSignature)?;
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        verify_secp256k1(&self.public_key, message, signature)
    }
}

impl fmt::Debug for K256KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "K256KeyPair({})", self.public_key_hex())
    }
}

/// Verify a DER signature against a compressed SEC1 public key.
pub fn verify_secp256k1(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
    let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
        .map_err(|e| SigningError::InvalidKey(e.to_string()))?;
    let signature = Signature::from_der(signature).map_err(|_| SigningError::InvalidSignature)?;
    let digest = sha512_half(message);
    verifying_key
        .verify_prehash(digest.as_bytes(), &signature)
        .map_err(|_| SigningError::InvalidSignature)
}

/// First `sha512half(bytes ++ [discriminator] ++ counter)` that is a valid
/// secret scalar.
fn derive_scalar(bytes: &[u8], discriminator: Option<u32>) -> Result<SecretKey> {
    for counter in 0..=u32::MAX {
        let mut hasher = Sha512Half::new();
        hasher.update(bytes);
        if let Some(discriminator) = discriminator {
            hasher.update(&discriminator.to_be_bytes());
        }
        hasher.update(&counter.to_be_bytes());
        let candidate = hasher.finish();
        if let Ok(key) = SecretKey::from_bytes(FieldBytes::from_slice(candidate.as_bytes())) {
            return Ok(key);
        }
    }
    Err(SigningError::InvalidKey("no secp256k1 scalar for seed".into()))
}

fn compressed(secret: &SecretKey) -> Vec<u8> {
    secret
        .public_key()
        .to_encoded_point(true)
        .as_bytes()
        .to_vec()
}
