//! Ledger items stored in trie leaves.

use bytes::Bytes;
use serde_json::Value;
use xrpl_codec_core::{
    encode_vl, fields, prefixed_half, BytesSink, Hash256, HashPrefix, StObject, UnknownFieldPolicy,
};

use crate::error::{Result, ShaMapError};
use crate::node::ShaMapItem;

/// An account-state entry, keyed by its `index` field.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    object: StObject,
    index: Hash256,
    bytes: Bytes,
}

impl LedgerEntry {
    /// Wrap an entry. The object must carry an `index`.
    pub fn new(object: StObject) -> Result<Self> {
        let index = object
            .get_hash256(&fields::INDEX)
            .ok_or(ShaMapError::MissingField("index"))?;
        let bytes = Bytes::from(object.to_bytes()?);
        Ok(Self {
            object,
            index,
            bytes,
        })
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        Self::new(StObject::from_json(value)?)
    }

    pub fn index(&self) -> Hash256 {
        self.index
    }

    pub fn object(&self) -> &StObject {
        &self.object
    }

    /// Canonical bytes of the entry.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ShaMapItem for LedgerEntry {
    fn prefix(&self) -> HashPrefix {
        HashPrefix::LeafNode
    }

    fn to_bytes_sink(&self, sink: &mut dyn BytesSink) {
        sink.put(&self.bytes);
    }
}

/// A transaction with its metadata, keyed by the transaction ID.
#[derive(Debug, Clone)]
pub struct TransactionResult {
    tx: StObject,
    meta: StObject,
    hash: Hash256,
    bytes: Bytes,
}

impl TransactionResult {
    /// Pair a transaction with its metadata.
    ///
    /// The key is the transaction's `hash` field when present, otherwise the
    /// transaction ID computed from its canonical bytes.
    pub fn new(tx: StObject, meta: StObject) -> Result<Self> {
        let tx_bytes = tx.to_bytes()?;
        let meta_bytes = meta.to_bytes()?;
        let hash = match tx.get_hash256(&fields::HASH) {
            Some(hash) => hash,
            None => prefixed_half(HashPrefix::TransactionId, &tx_bytes),
        };

        let mut bytes = encode_vl(tx_bytes.len())?;
        bytes.extend_from_slice(&tx_bytes);
        bytes.extend_from_slice(&encode_vl(meta_bytes.len())?);
        bytes.extend_from_slice(&meta_bytes);

        Ok(Self {
            tx,
            meta,
            hash,
            bytes: Bytes::from(bytes),
        })
    }

    /// Build from a transaction JSON object carrying its metadata under
    /// `metaData`.
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::from_json_with(value, UnknownFieldPolicy::Ignore)
    }

    /// As [`TransactionResult::from_json`], applying `policy` to unknown keys
    /// of both the transaction and its metadata.
    pub fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self> {
        let mut tx = value.clone();
        let meta = tx
            .as_object_mut()
            .and_then(|map| map.remove("metaData"))
            .ok_or(ShaMapError::MissingField("metaData"))?;
        Self::new(
            StObject::from_json_with(&tx, policy)?,
            StObject::from_json_with(&meta, policy)?,
        )
    }

    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    pub fn tx(&self) -> &StObject {
        &self.tx
    }

    pub fn meta(&self) -> &StObject {
        &self.meta
    }

    /// Length-prefixed transaction followed by length-prefixed metadata.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ShaMapItem for TransactionResult {
    fn prefix(&self) -> HashPrefix {
        HashPrefix::TxNode
    }

    fn to_bytes_sink(&self, sink: &mut dyn BytesSink) {
        sink.put(&self.bytes);
    }
}
