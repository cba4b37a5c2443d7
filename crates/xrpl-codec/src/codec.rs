//! The codec facade.

use serde_json::Value;
use xrpl_codec_core::StObject;
use xrpl_codec_shamap::{AccountState, LedgerEntry, TransactionResult, TransactionTree};
use xrpl_codec_signing::{sign_transaction, transaction_id, KeyPair, SignedTransaction};

use crate::config::CodecConfig;
use crate::error::Result;

/// JSON in, canonical hex out, and back.
///
/// Provides a unified API for:
/// - Encoding and decoding transactions and ledger objects
/// - Computing signing payloads and transaction IDs
/// - Signing with Ed25519 secrets
/// - Building account-state and transaction trees
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Parse JSON into a structured object under this codec's policy.
    pub fn object_from_json(&self, json: &Value) -> Result<StObject> {
        Ok(StObject::from_json_with(json, self.config.unknown_fields)?)
    }

    /// Canonical bytes as upper-case hex.
    pub fn encode(&self, json: &Value) -> Result<String> {
        Ok(self.object_from_json(json)?.to_hex()?)
    }

    /// `STX\0` followed by the signing fields, as upper-case hex.
    pub fn encode_for_signing(&self, json: &Value) -> Result<String> {
        let data = self.object_from_json(json)?.signing_data()?;
        Ok(hex::encode_upper(data))
    }

    /// Decode canonical hex back to JSON.
    pub fn decode(&self, hex: &str) -> Result<Value> {
        Ok(StObject::from_hex(hex)?.to_json())
    }

    /// Transaction ID of a (normally signed) transaction.
    pub fn transaction_id(&self, json: &Value) -> Result<String> {
        let blob = self.object_from_json(json)?.to_bytes()?;
        Ok(transaction_id(&blob).to_hex())
    }

    /// Sign with an `s...` (secp256k1) or `sEd...` (Ed25519) secret.
    pub fn sign(&self, json: &Value, secret: &str) -> Result<SignedTransaction> {
        let pair = KeyPair::from_secret(secret)?;
        // Parse first so the codec's policy applies to the input.
        self.object_from_json(json)?;
        Ok(sign_transaction(json, &pair)?)
    }

    /// Build an account-state tree from ledger entries carrying `index`.
    pub fn account_state(&self, entries: &[Value]) -> Result<AccountState> {
        let mut state = AccountState::new();
        for json in entries {
            let entry = LedgerEntry::new(self.object_from_json(json)?)?;
            let index = entry.index();
            if !state.add(entry)? {
                tracing::warn!("duplicate ledger entry skipped: {}", index);
            }
        }
        tracing::debug!("account state built: {} entries", state.len());
        Ok(state)
    }

    /// Build a transaction tree from transactions carrying `metaData`.
    pub fn transaction_tree(&self, txs: &[Value]) -> Result<TransactionTree> {
        let mut tree = TransactionTree::new();
        for json in txs {
            let result = TransactionResult::from_json_with(json, self.config.unknown_fields)?;
            let hash = result.hash();
            if !tree.add(result)? {
                tracing::warn!("duplicate transaction skipped: {}", hash);
            }
        }
        tracing::debug!("transaction tree built: {} transactions", tree.len());
        Ok(tree)
    }
}
