//! Typed ledger trees.

use std::sync::Arc;

use xrpl_codec_core::Hash256;

use crate::error::Result;
use crate::item::{LedgerEntry, TransactionResult};
use crate::shamap::{Iter, ShaMap};

macro_rules! ledger_tree {
    ($(#[$meta:meta])* $name:ident, $item:ty, $key:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            map: ShaMap<$item>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Insert under the item's own key. `false` if the key exists.
            pub fn add(&mut self, item: $item) -> Result<bool> {
                self.map.add_item(item.$key(), item)
            }

            /// Replace the item under its own key. `false` if absent.
            pub fn update(&mut self, item: $item) -> bool {
                self.map.update_item(item.$key(), item)
            }

            pub fn remove(&mut self, key: &Hash256) -> bool {
                self.map.remove_item(key)
            }

            pub fn get(&self, key: &Hash256) -> Option<Arc<$item>> {
                self.map.get_item(key)
            }

            pub fn has(&self, key: &Hash256) -> bool {
                self.map.has_leaf(key)
            }

            pub fn root_hash(&self) -> Hash256 {
                self.map.root_hash()
            }

            /// Fork an independent copy sharing this tree's nodes.
            pub fn snapshot(&mut self) -> Self {
                Self {
                    map: self.map.snapshot(),
                }
            }

            pub fn len(&self) -> usize {
                self.map.len()
            }

            pub fn is_empty(&self) -> bool {
                self.map.is_empty()
            }

            pub fn iter(&self) -> Iter<'_, $item> {
                self.map.iter()
            }

            /// The underlying map.
            pub fn as_map(&self) -> &ShaMap<$item> {
                &self.map
            }
        }
    };
}

ledger_tree!(
    /// Account-state tree of [`LedgerEntry`] leaves.
    AccountState,
    LedgerEntry,
    index
);

ledger_tree!(
    /// Transaction tree of [`TransactionResult`] leaves.
    TransactionTree,
    TransactionResult,
    hash
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(index_byte: &str, balance: &str) -> LedgerEntry {
        LedgerEntry::from_json(&json!({
            "LedgerEntryType": "AccountRoot",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Balance": balance,
            "Sequence": 1,
            "index": index_byte.repeat(32),
        }))
        .unwrap()
    }

    #[test]
    fn test_account_state_add_update() {
        let mut state = AccountState::new();
        assert_eq!(state.root_hash(), Hash256::ZERO);

        assert!(state.add(entry("11", "10")).unwrap());
        assert!(state.add(entry("22", "20")).unwrap());
        assert!(!state.add(entry("11", "99")).unwrap());
        let before = state.root_hash();

        assert!(state.update(entry("11", "99")));
        assert_ne!(state.root_hash(), before);
        assert!(!state.update(entry("33", "1")));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_account_state_snapshot() {
        let mut state = AccountState::new();
        state.add(entry("11", "10")).unwrap();
        let frozen_hash = state.root_hash();
        let frozen = state.snapshot();

        state.add(entry("22", "20")).unwrap();
        assert_eq!(frozen.root_hash(), frozen_hash);
        assert_eq!(frozen.len(), 1);
    }

    #[test]
    fn test_transaction_tree() {
        let mut tree = TransactionTree::new();
        let tx = TransactionResult::from_json(&json!({
            "TransactionType": "Payment",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Destination": "rrrrrrrrrrrrrrrrrrrrBZbvji",
            "Amount": "1",
            "Fee": "10",
            "Sequence": 7,
            "metaData": {"TransactionIndex": 0, "TransactionResult": "tesSUCCESS"}
        }))
        .unwrap();
        let hash = tx.hash();
        assert!(tree.add(tx).unwrap());
        assert!(tree.has(&hash));
        assert_eq!(tree.iter().count(), 1);
        assert!(tree.remove(&hash));
        assert!(tree.is_empty());
    }
}
