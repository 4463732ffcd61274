//! The zip and unzip primitives and the insert and delete descents built on them.
//!
//! All functions take subtrees by value and return subtrees by value. Every
//! node whose links change is first loaded through [`load_mut`], so a
//! snapshot never writes to a node it shares with another snapshot.
//!
//! # Shape
//!
//! A node's parent has a strictly greater rank, or the same rank and a smaller
//! item. Given the `(item, rank)` pairs, exactly one tree satisfies this
//! together with the search-tree order, whatever the insertion order was.

use std::cmp::Ordering;

use super::ReferenceCounter;
use super::compare::Comparator;
use super::node::{Link, Node, NodeRef, into_item, load_mut};
use super::rank::OwnerTag;

/// Merges `left` and `right` into one subtree.
///
/// Every item in `left` must compare less than every item in `right`. The
/// root of the result is the root with the higher rank; on a tie, the root of
/// `left` stays on top.
pub(crate) fn zip<T: Clone>(left: Link<T>, right: Link<T>, owner: OwnerTag) -> Link<T> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut left), Some(mut right)) => {
            if left.rank < right.rank {
                let node = load_mut(&mut right, owner);
                node.left = zip(Some(left), node.left.take(), owner);
                Some(right)
            } else {
                let node = load_mut(&mut left, owner);
                node.right = zip(node.right.take(), Some(right), owner);
                Some(left)
            }
        }
    }
}

/// Splits `subtree` around `key`.
///
/// Returns the items less than `key` and the items greater than `key`. A node
/// equal to `key` is dropped from both halves.
pub(crate) fn unzip<T, C>(
    subtree: Link<T>,
    key: &T,
    comparator: &C,
    owner: OwnerTag,
) -> (Link<T>, Link<T>)
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(mut root) = subtree else {
        return (None, None);
    };
    let node = load_mut(&mut root, owner);
    match comparator.compare(&node.item, key) {
        Ordering::Less => {
            let (less, greater) = unzip(node.right.take(), key, comparator, owner);
            node.right = less;
            (Some(root), greater)
        }
        Ordering::Greater => {
            let (less, greater) = unzip(node.left.take(), key, comparator, owner);
            node.left = greater;
            (less, Some(root))
        }
        Ordering::Equal => (node.left.take(), node.right.take()),
    }
}

/// Inserts `fresh`, whose item must not already be present, into `subtree`.
pub(crate) fn insert<T, C>(
    subtree: Link<T>,
    mut fresh: Node<T>,
    comparator: &C,
    owner: OwnerTag,
) -> NodeRef<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(mut root) = subtree else {
        return ReferenceCounter::new(fresh);
    };
    let order = comparator.compare(&fresh.item, &root.item);
    let goes_below = fresh.rank < root.rank || (fresh.rank == root.rank && order.is_gt());
    if goes_below {
        let node = load_mut(&mut root, owner);
        if order.is_lt() {
            node.left = Some(insert(node.left.take(), fresh, comparator, owner));
        } else {
            node.right = Some(insert(node.right.take(), fresh, comparator, owner));
        }
        root
    } else {
        let (less, greater) = unzip(Some(root), &fresh.item, comparator, owner);
        fresh.left = less;
        fresh.right = greater;
        ReferenceCounter::new(fresh)
    }
}

/// Removes the item equal to `key` from `subtree`.
///
/// Returns the new subtree and the removed item. The removed node is replaced
/// by the zip of its two children.
pub(crate) fn remove<T, C>(
    subtree: Link<T>,
    key: &T,
    comparator: &C,
    owner: OwnerTag,
) -> (Link<T>, Option<T>)
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(mut root) = subtree else {
        return (None, None);
    };
    let node = load_mut(&mut root, owner);
    match comparator.compare(key, &node.item) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key, comparator, owner);
            node.left = left;
            (Some(root), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key, comparator, owner);
            node.right = right;
            (Some(root), removed)
        }
        Ordering::Equal => {
            let merged = zip(node.left.take(), node.right.take(), owner);
            (merged, Some(into_item(root)))
        }
    }
}

/// Overwrites the item equal to `item` in place.
///
/// Returns the previous item, or gives `item` back when no equal item exists.
pub(crate) fn replace<T, C>(
    link: &mut Link<T>,
    item: T,
    comparator: &C,
    owner: OwnerTag,
) -> Result<T, T>
where
    T: Clone,
    C: Comparator<T>,
{
    let Some(root) = link.as_mut() else {
        return Err(item);
    };
    let node = load_mut(root, owner);
    match comparator.compare(&item, &node.item) {
        Ordering::Less => replace(&mut node.left, item, comparator, owner),
        Ordering::Greater => replace(&mut node.right, item, comparator, owner),
        Ordering::Equal => Ok(std::mem::replace(&mut node.item, item)),
    }
}
