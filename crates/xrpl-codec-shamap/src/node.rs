//! Trie nodes.
//!
//! Inner nodes have 16 nibble-indexed child slots; leaves hold one keyed
//! item. Nodes are reference counted and shared between map versions. Each
//! inner node records the version that created it, and a writer only mutates
//! inner nodes stamped with its own version. Leaves are immutable.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use xrpl_codec_core::{BytesSink, Hash256, HashPrefix, Sha512Half};

/// Something that can live in a trie leaf.
pub trait ShaMapItem: Send + Sync {
    /// Domain prefix mixed into the leaf hash.
    fn prefix(&self) -> HashPrefix;

    /// The leaf payload.
    fn to_bytes_sink(&self, sink: &mut dyn BytesSink);
}

#[derive(Debug)]
pub(crate) enum Node<I> {
    Inner(Arc<InnerNode<I>>),
    Leaf(Arc<LeafNode<I>>),
}

impl<I> Clone for Node<I> {
    fn clone(&self) -> Self {
        match self {
            Node::Inner(inner) => Node::Inner(Arc::clone(inner)),
            Node::Leaf(leaf) => Node::Leaf(Arc::clone(leaf)),
        }
    }
}

impl<I: ShaMapItem> Node<I> {
    pub(crate) fn hash(&self) -> Hash256 {
        match self {
            Node::Inner(inner) => inner.hash(),
            Node::Leaf(leaf) => leaf.hash(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct InnerNode<I> {
    pub(crate) depth: usize,
    pub(crate) version: u32,
    pub(crate) children: [Option<Node<I>>; 16],
    hash: OnceCell<Hash256>,
}

impl<I> Clone for InnerNode<I> {
    fn clone(&self) -> Self {
        Self {
            depth: self.depth,
            version: self.version,
            children: self.children.clone(),
            hash: self.hash.clone(),
        }
    }
}

impl<I> InnerNode<I> {
    pub(crate) fn new(depth: usize, version: u32) -> Self {
        Self {
            depth,
            version,
            children: Default::default(),
            hash: OnceCell::new(),
        }
    }

    /// Shallow copy stamped with `version`.
    pub(crate) fn copy_with_version(&self, version: u32) -> Self {
        let mut copy = self.clone();
        copy.version = version;
        copy
    }

    pub(crate) fn invalidate(&mut self) {
        self.hash = OnceCell::new();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// The sole child, when there is exactly one and it is a leaf.
    pub(crate) fn only_leaf(&self) -> Option<Arc<LeafNode<I>>> {
        let mut present = self.children.iter().flatten();
        match (present.next(), present.next()) {
            (Some(Node::Leaf(leaf)), None) => Some(Arc::clone(leaf)),
            _ => None,
        }
    }
}

impl<I: ShaMapItem> InnerNode<I> {
    /// `sha512half(MIN\0 || 16 child hashes)`, zero when empty.
    pub(crate) fn hash(&self) -> Hash256 {
        *self.hash.get_or_init(|| {
            if self.is_empty() {
                return Hash256::ZERO;
            }
            let mut hasher = Sha512Half::with_prefix(HashPrefix::InnerNode);
            for child in &self.children {
                let h = child.as_ref().map_or(Hash256::ZERO, Node::hash);
                hasher.update(h.as_bytes());
            }
            hasher.finish()
        })
    }
}

#[derive(Debug)]
pub(crate) struct LeafNode<I> {
    pub(crate) index: Hash256,
    pub(crate) item: Arc<I>,
    hash: OnceCell<Hash256>,
}

impl<I> LeafNode<I> {
    pub(crate) fn new(index: Hash256, item: Arc<I>) -> Self {
        Self {
            index,
            item,
            hash: OnceCell::new(),
        }
    }
}

impl<I: ShaMapItem> LeafNode<I> {
    /// `sha512half(prefix || item bytes || index)`.
    pub(crate) fn hash(&self) -> Hash256 {
        *self.hash.get_or_init(|| {
            let mut hasher = Sha512Half::with_prefix(self.item.prefix());
            self.item.to_bytes_sink(&mut hasher);
            hasher.update(self.index.as_bytes());
            hasher.finish()
        })
    }
}

/// Make `slot` safe to mutate under `version`, copying it first when it
/// belongs to another version or is still shared. Drops the cached hash.
pub(crate) fn writable<I>(slot: &mut Arc<InnerNode<I>>, version: u32) -> &mut InnerNode<I> {
    if slot.version != version {
        *slot = Arc::new(slot.copy_with_version(version));
    }
    let node = Arc::make_mut(slot);
    node.invalidate();
    node
}
