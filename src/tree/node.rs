//! Tree nodes and the copy-on-write loader.

use super::ReferenceCounter;
use super::rank::OwnerTag;

/// A shared handle to a node.
pub(crate) type NodeRef<T> = ReferenceCounter<Node<T>>;

/// An optional child (or root) link.
pub(crate) type Link<T> = Option<NodeRef<T>>;

/// Internal node structure for the zip tree.
///
/// `item` and `rank` are fixed for the lifetime of the node, except that the
/// item is overwritten when an equal item replaces it. Only the child links
/// are relinked by the zip and unzip engine.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) rank: u32,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) owner: OwnerTag,
}

impl<T> Node<T> {
    /// Creates a childless node owned by `owner`.
    pub(crate) const fn new(item: T, rank: u32, owner: OwnerTag) -> Self {
        Self {
            item,
            rank,
            left: None,
            right: None,
            owner,
        }
    }

    /// Creates a copy of this node owned by `owner`.
    ///
    /// Children are shared by reference, not copied.
    fn detach(&self, owner: OwnerTag) -> Self
    where
        T: Clone,
    {
        Self {
            item: self.item.clone(),
            rank: self.rank,
            left: self.left.clone(),
            right: self.right.clone(),
            owner,
        }
    }
}

/// Loads the node behind `link` for mutation by the snapshot `owner`.
///
/// A node stamped with another snapshot's tag is cloned and the clone is
/// stored back into `link`, so the parent now points at a node `owner` may
/// mutate freely. A node already stamped with `owner` is returned as is.
///
/// Every mutating descent loads its nodes through this function.
pub(crate) fn load_mut<T: Clone>(link: &mut NodeRef<T>, owner: OwnerTag) -> &mut Node<T> {
    if link.owner != owner {
        tracing::trace!("cloning node shared with another snapshot");
        *link = ReferenceCounter::new(link.detach(owner));
    }
    ReferenceCounter::make_mut(link)
}

/// Moves the item out of a node that has been unlinked from the tree.
pub(crate) fn into_item<T: Clone>(node: NodeRef<T>) -> T {
    ReferenceCounter::try_unwrap(node).map_or_else(|shared| shared.item.clone(), |node| node.item)
}
