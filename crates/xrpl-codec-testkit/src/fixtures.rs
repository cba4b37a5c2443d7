//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use serde_json::{json, Value};
use xrpl_codec::{Codec, CodecConfig};
use xrpl_codec_core::AccountId;
use xrpl_codec_shamap::LedgerEntry;
use xrpl_codec_signing::{KeyPair, KeyType, Seed, SignedTransaction, Signer};

/// A test fixture with an Ed25519 account and a codec.
pub struct TestFixture {
    pub seed: Seed,
    pub key_pair: KeyPair,
    pub codec: Codec,
}

impl TestFixture {
    /// Create a new test fixture with a random seed.
    pub fn new() -> Self {
        Self::from_seed(Seed::random(KeyType::Ed25519))
    }

    /// Create with a deterministic seed from a passphrase.
    pub fn with_passphrase(passphrase: &str) -> Self {
        Self::from_seed(Seed::from_passphrase(passphrase).with_key_type(KeyType::Ed25519))
    }

    fn from_seed(seed: Seed) -> Self {
        let key_pair = seed.key_pair().expect("ed25519 seed derives a key pair");
        Self {
            seed,
            key_pair,
            codec: Codec::new(CodecConfig::strict()),
        }
    }

    /// The fixture's account.
    pub fn account(&self) -> AccountId {
        self.key_pair.account_id()
    }

    /// The seed as an `sEd...` secret.
    pub fn secret(&self) -> String {
        self.seed.to_base58()
    }

    /// An unsigned XRP payment from this account.
    pub fn payment(&self, destination: &AccountId, drops: u64, sequence: u32) -> Value {
        json!({
            "TransactionType": "Payment",
            "Account": self.account().to_address(),
            "Destination": destination.to_address(),
            "Amount": drops.to_string(),
            "Fee": "10",
            "Flags": 0,
            "Sequence": sequence,
        })
    }

    /// A payment signed with this fixture's key.
    pub fn signed_payment(
        &self,
        destination: &AccountId,
        drops: u64,
        sequence: u32,
    ) -> SignedTransaction {
        let tx = self.payment(destination, drops, sequence);
        self.codec
            .sign(&tx, &self.secret())
            .expect("fixture payment signs")
    }

    /// This account's root entry, stored under `index`.
    pub fn account_root(&self, index: [u8; 32], drops: u64, sequence: u32) -> LedgerEntry {
        let json = json!({
            "LedgerEntryType": "AccountRoot",
            "Account": self.account().to_address(),
            "Balance": drops.to_string(),
            "Flags": 0,
            "OwnerCount": 0,
            "Sequence": sequence,
            "index": hex::encode_upper(index),
        });
        LedgerEntry::from_json(&json).expect("fixture ledger entry builds")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| TestFixture::with_passphrase(&format!("party-{}", i)))
        .collect()
}
