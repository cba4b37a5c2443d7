//! The persistent trie.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use xrpl_codec_core::Hash256;

use crate::error::{Result, ShaMapError};
use crate::node::{writable, InnerNode, LeafNode, Node, ShaMapItem};

/// Deepest depth an inner node may sit at. A node at depth `d` branches on
/// nibble `d` of the key.
const MAX_DEPTH: usize = 63;

/// A copy-on-write Merkle radix trie keyed by 256-bit indices.
///
/// Every map belongs to a version. [`ShaMap::snapshot`] hands out a new map
/// that shares all nodes with this one; after that each side copies a node
/// the first time it writes through it, so neither can observe the other's
/// changes.
#[derive(Debug)]
pub struct ShaMap<I> {
    root: Arc<InnerNode<I>>,
    version: u32,
    counter: Arc<AtomicU32>,
    len: usize,
}

impl<I: ShaMapItem> ShaMap<I> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            root: Arc::new(InnerNode::new(0, 0)),
            version: 0,
            counter: Arc::new(AtomicU32::new(0)),
            len: 0,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current version stamp.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Fork an independent map sharing this one's structure.
    pub fn snapshot(&mut self) -> Self {
        let snapshot_version = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let own_version = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(
            "shamap snapshot: version {} -> {}, snapshot {}",
            self.version,
            own_version,
            snapshot_version
        );
        self.version = own_version;
        Self {
            root: Arc::clone(&self.root),
            version: snapshot_version,
            counter: Arc::clone(&self.counter),
            len: self.len,
        }
    }

    /// Hash of the root node; zero for an empty map.
    pub fn root_hash(&self) -> Hash256 {
        self.root.hash()
    }

    /// Look up the item stored under `index`.
    pub fn get_item(&self, index: &Hash256) -> Option<Arc<I>> {
        self.find_leaf(index).map(|leaf| Arc::clone(&leaf.item))
    }

    /// The stored key and item under `index`.
    pub fn get_leaf(&self, index: &Hash256) -> Option<(&Hash256, &I)> {
        self.find_leaf(index).map(|leaf| (&leaf.index, &*leaf.item))
    }

    /// Whether an item is stored under `index`.
    pub fn has_leaf(&self, index: &Hash256) -> bool {
        self.find_leaf(index).is_some()
    }

    /// Insert `item` under `index`. Returns `false` and leaves the map
    /// untouched when the index is already present.
    pub fn add_item(&mut self, index: Hash256, item: I) -> Result<bool> {
        if self.has_leaf(&index) {
            return Ok(false);
        }
        let leaf = Arc::new(LeafNode::new(index, Arc::new(item)));
        insert(&mut self.root, leaf, self.version)?;
        self.len += 1;
        Ok(true)
    }

    /// Replace the item stored under `index`. Returns `false` if absent.
    pub fn update_item(&mut self, index: Hash256, item: I) -> bool {
        if !self.has_leaf(&index) {
            return false;
        }
        let leaf = Arc::new(LeafNode::new(index, Arc::new(item)));
        replace(&mut self.root, leaf, self.version)
    }

    /// Remove the item stored under `index`. Returns `false` if absent.
    pub fn remove_item(&mut self, index: &Hash256) -> bool {
        if !self.has_leaf(index) {
            return false;
        }
        let removed = remove(&mut self.root, index, self.version);
        if removed {
            self.len -= 1;
            tracing::trace!("shamap removed {}", index);
        }
        removed
    }

    /// Items in ascending key order.
    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            stack: vec![self.root.children.iter()],
        }
    }

    /// Visit every leaf in ascending key order.
    pub fn for_each_leaf<F: FnMut(&Hash256, &I)>(&self, mut f: F) {
        for (index, item) in self.iter() {
            f(index, item);
        }
    }

    fn find_leaf(&self, index: &Hash256) -> Option<&LeafNode<I>> {
        let mut node: &InnerNode<I> = &self.root;
        loop {
            match node.children[index.nibble(node.depth)].as_ref()? {
                Node::Leaf(leaf) => return (leaf.index == *index).then_some(&**leaf),
                Node::Inner(inner) => node = inner,
            }
        }
    }
}

impl<I: ShaMapItem> Default for ShaMap<I> {
    fn default() -> Self {
        Self::new()
    }
}

fn insert<I: ShaMapItem>(
    slot: &mut Arc<InnerNode<I>>,
    leaf: Arc<LeafNode<I>>,
    version: u32,
) -> Result<()> {
    let node = writable(slot, version);
    let branch = leaf.index.nibble(node.depth);
    match node.children[branch].take() {
        None => node.children[branch] = Some(Node::Leaf(leaf)),
        Some(Node::Leaf(existing)) => {
            let depth = node.depth + 1;
            if depth > MAX_DEPTH {
                node.children[branch] = Some(Node::Leaf(existing));
                return Err(ShaMapError::TreeDepthExceeded(depth));
            }
            let mut child = Arc::new(InnerNode::new(depth, version));
            let split = insert(&mut child, Arc::clone(&existing), version)
                .and_then(|()| insert(&mut child, leaf, version));
            match split {
                Ok(()) => node.children[branch] = Some(Node::Inner(child)),
                Err(e) => {
                    node.children[branch] = Some(Node::Leaf(existing));
                    return Err(e);
                }
            }
        }
        Some(Node::Inner(mut child)) => {
            let result = insert(&mut child, leaf, version);
            node.children[branch] = Some(Node::Inner(child));
            result?;
        }
    }
    Ok(())
}

fn replace<I>(slot: &mut Arc<InnerNode<I>>, leaf: Arc<LeafNode<I>>, version: u32) -> bool {
    let node = writable(slot, version);
    let branch = leaf.index.nibble(node.depth);
    match &mut node.children[branch] {
        Some(Node::Leaf(existing)) if existing.index == leaf.index => {
            *existing = leaf;
            true
        }
        Some(Node::Inner(child)) => replace(child, leaf, version),
        _ => false,
    }
}

fn remove<I>(slot: &mut Arc<InnerNode<I>>, index: &Hash256, version: u32) -> bool {
    let node = writable(slot, version);
    let branch = index.nibble(node.depth);
    match node.children[branch].take() {
        Some(Node::Leaf(leaf)) if leaf.index == *index => true,
        Some(Node::Inner(mut child)) => {
            let removed = remove(&mut child, index, version);
            // An inner node left holding a single leaf is folded into its parent.
            node.children[branch] = if child.is_empty() {
                None
            } else if let Some(only) = child.only_leaf() {
                Some(Node::Leaf(only))
            } else {
                Some(Node::Inner(child))
            };
            removed
        }
        other => {
            node.children[branch] = other;
            false
        }
    }
}

/// In-order iterator over `(index, item)` pairs.
pub struct Iter<'a, I> {
    stack: Vec<std::slice::Iter<'a, Option<Node<I>>>>,
}

impl<'a, I> Iterator for Iter<'a, I> {
    type Item = (&'a Hash256, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(None) => {}
                Some(Some(Node::Leaf(leaf))) => return Some((&leaf.index, &*leaf.item)),
                Some(Some(Node::Inner(inner))) => self.stack.push(inner.children.iter()),
            }
        }
    }
}
