//! The zip tree controller.
//!
//! [`ZipTree`] owns one snapshot: a root link, an item count, a comparator, an
//! owner tag, a rank generator and a frozen flag. Reads never copy nodes;
//! mutations descend through the copy-on-write loader and reshape the tree
//! only through zip and unzip.

use std::fmt;
use std::ops::ControlFlow;

use super::compare::{Comparator, NaturalOrder};
use super::node::{Link, Node};
use super::rank::{OwnerTag, RankGenerator};
use super::traversal::{self, Iter};
use super::zip;
use crate::error::ZipTreeError;
use crate::options::ZipOptions;

/// A randomized balanced search tree with copy-on-write snapshots.
///
/// Items are kept in the order given by the comparator `C`; two items that
/// compare equal are the same key. Each node receives a random rank when it is
/// inserted, and the shape of the tree depends only on the items and their
/// ranks, giving expected O(log N) height.
///
/// [`copy`](Self::copy) produces an independent snapshot in O(1) that shares
/// every node with its source. Whichever side mutates afterwards clones just
/// the nodes on the path it changes.
///
/// A `ZipTree` takes no locks: reads borrow `&self` and mutations borrow
/// `&mut self`. Use [`ConcurrentZipTree`](super::ConcurrentZipTree) to share one
/// tree between threads.
///
/// # Time Complexity
///
/// | Operation               | Complexity (expected) |
/// |-------------------------|-----------------------|
/// | `get` / `contains`      | O(log N)              |
/// | `insert`                | O(log N)              |
/// | `remove`                | O(log N)              |
/// | `min` / `max`           | O(log N)              |
/// | `pop_min` / `pop_max`   | O(log N)              |
/// | `ascend` / `descend`    | O(log N + k)          |
/// | `copy` / `clear`        | O(1)                  |
/// | `len`                   | O(1)                  |
///
/// # Examples
///
/// ```rust
/// use ziptree::ZipTree;
///
/// let mut tree = ZipTree::new();
/// for item in [5, 3, 7, 1, 9] {
///     tree.insert(item).unwrap();
/// }
///
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.min(), Some(&1));
/// assert_eq!(tree.max(), Some(&9));
///
/// let mut snapshot = tree.copy();
/// tree.remove(&3).unwrap();
///
/// assert!(!tree.contains(&3));
/// assert!(snapshot.contains(&3)); // The snapshot is unaffected
/// snapshot.insert(11).unwrap();
/// assert!(!tree.contains(&11));
/// ```
pub struct ZipTree<T, C = NaturalOrder> {
    root: Link<T>,
    length: usize,
    comparator: C,
    owner: OwnerTag,
    ranks: RankGenerator,
    frozen: bool,
}

impl<T: Ord> ZipTree<T> {
    /// Creates an empty tree ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ZipTree;
    ///
    /// let tree: ZipTree<i32> = ZipTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ZipOptions::default())
    }

    /// Creates an empty tree in natural order with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::{ZipOptions, ZipTree};
    ///
    /// let tree: ZipTree<i32> = ZipTree::with_options(ZipOptions::new().read_only(true));
    /// assert!(tree.is_frozen());
    /// ```
    #[must_use]
    pub fn with_options(options: ZipOptions) -> Self {
        Self::with_comparator_and_options(NaturalOrder, options)
    }
}

impl<T, C: Comparator<T>> ZipTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_options(comparator, ZipOptions::default())
    }

    /// Creates an empty tree ordered by `comparator` with the given options.
    #[must_use]
    pub fn with_comparator_and_options(comparator: C, options: ZipOptions) -> Self {
        Self {
            root: None,
            length: 0,
            comparator,
            owner: OwnerTag::fresh(),
            ranks: RankGenerator::new(options.seed),
            frozen: options.read_only,
        }
    }

    /// Compares two items with this tree's comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use ziptree::ZipTree;
    ///
    /// let tree: ZipTree<i32> = ZipTree::new();
    /// assert_eq!(tree.compare(&1, &2), Ordering::Less);
    /// ```
    pub fn compare(&self, left: &T, right: &T) -> std::cmp::Ordering {
        self.comparator.compare(left, right)
    }

    /// Returns the item equal to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ZipTree;
    ///
    /// let mut tree = ZipTree::new();
    /// tree.insert(42).unwrap();
    /// assert_eq!(tree.get(&42), Some(&42));
    /// assert_eq!(tree.get(&7), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &T) -> Option<&T> {
        traversal::search(&self.root, key, &self.comparator)
    }

    /// Returns `true` if the tree holds an item equal to `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns the smallest item.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        traversal::leftmost(&self.root)
    }

    /// Returns the largest item.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        traversal::rightmost(&self.root)
    }

    /// Visits every item in ascending order until `visit` breaks.
    ///
    /// Returns the `Break` value, or `Continue` when every item was visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use ziptree::ZipTree;
    ///
    /// let tree: ZipTree<i32> = (1..=10).collect();
    /// let mut seen = Vec::new();
    /// let outcome = tree.scan(|item| {
    ///     if *item > 3 {
    ///         return ControlFlow::Break(*item);
    ///     }
    ///     seen.push(*item);
    ///     ControlFlow::Continue(())
    /// });
    ///
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// assert_eq!(outcome, ControlFlow::Break(4));
    /// ```
    pub fn scan<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        traversal::scan(&self.root, &mut visit)
    }

    /// Visits the items greater than or equal to `pivot` in ascending order
    /// until `visit` breaks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use ziptree::ZipTree;
    ///
    /// let tree: ZipTree<i32> = (1..=9).collect();
    /// let mut seen = Vec::new();
    /// let _ = tree.ascend::<(), _>(&4, |item| {
    ///     seen.push(*item);
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(seen, vec![4, 5, 6, 7, 8, 9]);
    /// ```
    pub fn ascend<B, F>(&self, pivot: &T, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        traversal::ascend(&self.root, pivot, &self.comparator, &mut visit)
    }

    /// Visits the items less than or equal to `pivot` in descending order
    /// until `visit` breaks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use ziptree::ZipTree;
    ///
    /// let tree: ZipTree<i32> = (1..=9).collect();
    /// let mut seen = Vec::new();
    /// let _ = tree.descend::<(), _>(&6, |item| {
    ///     seen.push(*item);
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(seen, vec![6, 5, 4, 3, 2, 1]);
    /// ```
    pub fn descend<B, F>(&self, pivot: &T, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        traversal::descend(&self.root, pivot, &self.comparator, &mut visit)
    }
}

impl<T: Clone, C: Comparator<T>> ZipTree<T, C> {
    /// Inserts `item`, replacing an equal item if one exists.
    ///
    /// Returns the replaced item, or `None` when `item` is new.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ZipTree;
    ///
    /// let mut tree = ZipTree::with_comparator(|left: &(i32, char), right: &(i32, char)| {
    ///     left.0.cmp(&right.0)
    /// });
    /// assert_eq!(tree.insert((1, 'a')), Ok(None));
    /// assert_eq!(tree.insert((1, 'b')), Ok(Some((1, 'a'))));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<Option<T>, ZipTreeError> {
        self.ensure_mutable("insert")?;
        let item = if self.contains(&item) {
            match zip::replace(&mut self.root, item, &self.comparator, self.owner) {
                Ok(previous) => return Ok(Some(previous)),
                Err(item) => item,
            }
        } else {
            item
        };
        let fresh = Node::new(item, self.ranks.next_rank(), self.owner);
        self.root = Some(zip::insert(
            self.root.take(),
            fresh,
            &self.comparator,
            self.owner,
        ));
        self.length += 1;
        Ok(None)
    }

    /// Removes and returns the item equal to `key`.
    ///
    /// Nothing is copied when `key` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ZipTree;
    ///
    /// let mut tree: ZipTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.remove(&2), Ok(Some(2)));
    /// assert_eq!(tree.remove(&2), Ok(None));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<Option<T>, ZipTreeError> {
        self.ensure_mutable("remove")?;
        Ok(self.remove_present(key))
    }

    /// Removes and returns the smallest item.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn pop_min(&mut self) -> Result<Option<T>, ZipTreeError> {
        self.ensure_mutable("pop_min")?;
        let Some(key) = self.min().cloned() else {
            return Ok(None);
        };
        Ok(self.remove_present(&key))
    }

    /// Removes and returns the largest item.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn pop_max(&mut self) -> Result<Option<T>, ZipTreeError> {
        self.ensure_mutable("pop_max")?;
        let Some(key) = self.max().cloned() else {
            return Ok(None);
        };
        Ok(self.remove_present(&key))
    }

    /// Inserts every item of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] before inserting anything if the tree
    /// is frozen.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), ZipTreeError>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_mutable("extend")?;
        for item in items {
            self.insert(item)?;
        }
        Ok(())
    }

    fn remove_present(&mut self, key: &T) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        let (root, removed) = zip::remove(self.root.take(), key, &self.comparator, self.owner);
        self.root = root;
        if removed.is_some() {
            self.length -= 1;
        }
        removed
    }
}

impl<T, C> ZipTree<T, C> {
    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` once [`freeze`](Self::freeze) has been called.
    #[inline]
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Makes the tree permanently read-only.
    ///
    /// Every later mutation returns [`ZipTreeError::Frozen`] and leaves the
    /// tree untouched. Snapshots taken with [`copy`](Self::copy) afterwards
    /// are frozen as well; snapshots taken before are not.
    pub fn freeze(&mut self) {
        if !self.frozen {
            tracing::debug!(length = self.length, "freezing zip tree");
        }
        self.frozen = true;
    }

    /// Removes every item.
    ///
    /// The nodes are released by this tree only; snapshots that still share
    /// them are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn clear(&mut self) -> Result<(), ZipTreeError> {
        self.ensure_mutable("clear")?;
        tracing::debug!(length = self.length, "clearing zip tree");
        self.root = None;
        self.length = 0;
        self.owner = OwnerTag::fresh();
        Ok(())
    }

    /// Creates a snapshot of this tree in O(1).
    ///
    /// The snapshot shares every node with this tree. Both trees take fresh
    /// owner tags, so a later mutation on either side clones the nodes it
    /// touches instead of writing through to the other. The snapshot's rank
    /// generator is derived from this tree's, and it inherits the frozen flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ZipTree;
    ///
    /// let mut tree: ZipTree<i32> = [1, 3, 5, 7].into_iter().collect();
    /// let snapshot = tree.copy();
    ///
    /// tree.insert(9).unwrap();
    /// assert_eq!(tree.len(), 5);
    /// assert_eq!(snapshot.len(), 4);
    /// ```
    #[must_use]
    pub fn copy(&mut self) -> Self
    where
        C: Clone,
    {
        self.owner = OwnerTag::fresh();
        let snapshot = Self {
            root: self.root.clone(),
            length: self.length,
            comparator: self.comparator.clone(),
            owner: OwnerTag::fresh(),
            ranks: self.ranks.fork(),
            frozen: self.frozen,
        };
        tracing::debug!(length = self.length, "copied zip tree");
        snapshot
    }

    /// Returns an iterator over the items in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ZipTree;
    ///
    /// let tree: ZipTree<i32> = [3, 1, 2].into_iter().collect();
    /// let items: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(items, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.length)
    }

    fn ensure_mutable(&self, operation: &'static str) -> Result<(), ZipTreeError> {
        if self.frozen {
            tracing::debug!(operation = operation, "rejected mutation of frozen zip tree");
            return Err(ZipTreeError::Frozen { operation });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) const fn root(&self) -> &Link<T> {
        &self.root
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Ord> Default for ZipTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for ZipTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for item in iter {
            // A new tree is never frozen.
            let _ = tree.insert(item);
        }
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a ZipTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ZipTree<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for ZipTree<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            sequence.serialize_element(item)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct ZipTreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ZipTreeVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = ZipTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = ZipTree::new();
        while let Some(item) = access.next_element()? {
            tree.insert(item).map_err(serde::de::Error::custom)?;
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ZipTree<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ZipTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ReferenceCounter;
    use rstest::rstest;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> ZipTree<i32> {
        ZipTree::with_options(ZipOptions::new().seed(seed))
    }

    fn items(tree: &ZipTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    fn shape(link: &Link<i32>) -> String {
        link.as_ref().map_or_else(String::new, |node| {
            format!("({} {} {})", shape(&node.left), node.item, shape(&node.right))
        })
    }

    #[rstest]
    fn test_scenario_insert_remove_clear() {
        let mut tree = seeded(1);
        for item in [5, 3, 7, 1, 9] {
            assert_eq!(tree.insert(item), Ok(None));
        }
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&9));
        assert_eq!(tree.remove(&3), Ok(Some(3)));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(&3), None);
        assert_eq!(tree.clear(), Ok(()));
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.get(&5), None);
    }

    #[rstest]
    fn test_same_seed_same_shape() {
        let mut first = seeded(77);
        let mut second = seeded(77);
        for item in 0..200 {
            first.insert(item).unwrap();
            second.insert(item).unwrap();
        }
        assert_eq!(shape(first.root()), shape(second.root()));
    }

    #[rstest]
    fn test_replace_keeps_node_and_count() {
        let mut tree = ZipTree::with_comparator(|left: &(i32, i32), right: &(i32, i32)| {
            left.0.cmp(&right.0)
        });
        for key in 0..50 {
            tree.insert((key, 0)).unwrap();
        }
        assert_eq!(tree.insert((25, 1)), Ok(Some((25, 0))));
        assert_eq!(tree.len(), 50);
        assert_eq!(tree.get(&(25, -1)), Some(&(25, 1)));
    }

    #[rstest]
    fn test_replace_after_copy_does_not_leak_into_snapshot() {
        let mut tree = ZipTree::with_comparator(|left: &(i32, i32), right: &(i32, i32)| {
            left.0.cmp(&right.0)
        });
        for key in 0..20 {
            tree.insert((key, 0)).unwrap();
        }
        let snapshot = tree.copy();
        tree.insert((10, 1)).unwrap();

        assert_eq!(tree.get(&(10, 0)), Some(&(10, 1)));
        assert_eq!(snapshot.get(&(10, 0)), Some(&(10, 0)));
    }

    #[rstest]
    fn test_copy_clones_only_the_mutated_path() {
        let mut tree = seeded(3);
        for item in 0..1000 {
            tree.insert(item).unwrap();
        }
        let snapshot = tree.copy();
        tree.insert(1000).unwrap();

        let mut snapshot_nodes = HashSet::new();
        collect_nodes(snapshot.root(), &mut snapshot_nodes);
        let mut tree_nodes = HashSet::new();
        collect_nodes(tree.root(), &mut tree_nodes);

        let shared = tree_nodes.intersection(&snapshot_nodes).count();
        // Everything off the path from the root to the new item is still shared.
        assert!(shared > 900, "shared = {shared}");
        assert_eq!(tree_nodes.len(), 1001);
        assert_eq!(items(&snapshot), (0..1000).collect::<Vec<_>>());
    }

    fn collect_nodes(link: &Link<i32>, nodes: &mut HashSet<*const Node<i32>>) {
        if let Some(node) = link {
            nodes.insert(ReferenceCounter::as_ptr(node));
            collect_nodes(&node.left, nodes);
            collect_nodes(&node.right, nodes);
        }
    }

    #[rstest]
    fn test_mutated_path_is_restamped_with_tree_owner() {
        let mut tree = seeded(4);
        for item in 0..100 {
            tree.insert(item).unwrap();
        }
        let snapshot = tree.copy();
        tree.insert(100).unwrap();

        let (Some(root), Some(snapshot_root)) = (tree.root().as_ref(), snapshot.root().as_ref())
        else {
            panic!("tree unexpectedly empty");
        };
        assert_eq!(root.owner, tree.owner);
        assert_ne!(root.owner, snapshot_root.owner);
    }

    #[rstest]
    fn test_frozen_tree_rejects_every_mutation() {
        let mut tree: ZipTree<i32> = [1, 2, 3].into_iter().collect();
        tree.freeze();

        assert_eq!(tree.insert(4), Err(ZipTreeError::Frozen { operation: "insert" }));
        assert_eq!(tree.remove(&1), Err(ZipTreeError::Frozen { operation: "remove" }));
        assert_eq!(tree.pop_min(), Err(ZipTreeError::Frozen { operation: "pop_min" }));
        assert_eq!(tree.pop_max(), Err(ZipTreeError::Frozen { operation: "pop_max" }));
        assert_eq!(tree.clear(), Err(ZipTreeError::Frozen { operation: "clear" }));
        assert_eq!(
            tree.try_extend([5, 6]),
            Err(ZipTreeError::Frozen { operation: "extend" })
        );
        assert_eq!(items(&tree), vec![1, 2, 3]);
        assert!(tree.is_frozen());
    }

    #[rstest]
    fn test_read_only_option_freezes() {
        let mut tree: ZipTree<i32> = ZipTree::with_options(ZipOptions::new().read_only(true));
        assert!(tree.is_frozen());
        assert!(tree.insert(1).is_err());
        assert!(tree.is_empty());
    }

    #[rstest]
    fn test_copy_of_frozen_tree_is_frozen() {
        let mut tree: ZipTree<i32> = [1].into_iter().collect();
        tree.freeze();
        let mut snapshot = tree.copy();
        assert!(snapshot.is_frozen());
        assert!(snapshot.insert(2).is_err());
    }

    #[rstest]
    fn test_pop_min_and_max() {
        let mut tree: ZipTree<i32> = [4, 2, 8, 6].into_iter().collect();
        assert_eq!(tree.pop_min(), Ok(Some(2)));
        assert_eq!(tree.pop_max(), Ok(Some(8)));
        assert_eq!(items(&tree), vec![4, 6]);
        assert_eq!(tree.pop_min(), Ok(Some(4)));
        assert_eq!(tree.pop_min(), Ok(Some(6)));
        assert_eq!(tree.pop_min(), Ok(None));
        assert_eq!(tree.pop_max(), Ok(None));
    }

    #[rstest]
    fn test_clear_leaves_snapshot_intact() {
        let mut tree: ZipTree<i32> = (0..10).collect();
        let snapshot = tree.copy();
        tree.clear().unwrap();
        tree.insert(100).unwrap();

        assert_eq!(items(&tree), vec![100]);
        assert_eq!(items(&snapshot), (0..10).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_debug_format() {
        let tree: ZipTree<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{tree:?}"), "{1, 2}");
    }
}
