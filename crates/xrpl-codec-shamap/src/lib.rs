//! # XRPL Codec ShaMap
//!
//! A persistent, copy-on-write Merkle radix trie keyed by 256-bit indices,
//! as used for the XRP ledger's account-state and transaction trees.
//!
//! ## Overview
//!
//! Keys are consumed one nibble per level, so every inner node has 16 child
//! slots. Node hashes are SHA-512 half with a domain prefix and are cached
//! until a write touches the node. Snapshots are O(1) and share structure
//! with the map they were taken from.
//!
//! ## Key Types
//!
//! - [`ShaMap`] - The generic trie
//! - [`ShaMapItem`] - What a leaf holds
//! - [`LedgerEntry`] / [`TransactionResult`] - Ledger leaf items
//! - [`AccountState`] / [`TransactionTree`] - Typed trees over those items
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use xrpl_codec_shamap::{AccountState, LedgerEntry};
//!
//! let mut state = AccountState::new();
//! let entry = LedgerEntry::from_json(&json!({
//!     "LedgerEntryType": "AccountRoot",
//!     "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
//!     "Balance": "1000",
//!     "index": "AB".repeat(32),
//! }))
//! .unwrap();
//! assert!(state.add(entry).unwrap());
//! assert!(!state.root_hash().is_zero());
//! ```
//!
//! ## Design Notes
//!
//! - **Canonical shape**: removal folds inner nodes left with a single leaf,
//!   so the root hash depends only on the key set, not on history
//! - **Version stamps**: a writer copies any inner node stamped with another
//!   version before touching it
//! - **Shared nodes**: nodes are `Arc`s, so a snapshot stays valid for as long
//!   as it is held

pub mod error;
pub mod item;
mod node;
pub mod shamap;
pub mod trees;

pub use error::{Result, ShaMapError};
pub use item::{LedgerEntry, TransactionResult};
pub use node::ShaMapItem;
pub use shamap::{Iter, ShaMap};
pub use trees::{AccountState, TransactionTree};
