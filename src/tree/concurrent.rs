//! A zip tree shared between threads.
//!
//! [`ConcurrentZipTree`] wraps a [`ZipTree`] in a `parking_lot::RwLock`.
//! Lookups, counts and traversals take the read lock, so any number of them
//! run at once. Mutations, [`freeze`](ConcurrentZipTree::freeze) and
//! [`copy`](ConcurrentZipTree::copy) take the write lock. A copy retags the
//! source tree, which is why it counts as a writer.

use std::fmt;
use std::ops::ControlFlow;

use parking_lot::RwLock;

use super::compare::{Comparator, NaturalOrder};
use super::ziptree::ZipTree;
use crate::error::ZipTreeError;
use crate::options::ZipOptions;

/// A [`ZipTree`] guarded by a reader-writer lock.
///
/// Every method takes `&self`. Items are returned by value because no
/// reference may outlive the read lock.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use ziptree::ConcurrentZipTree;
///
/// let tree = Arc::new(ConcurrentZipTree::new());
/// let handles: Vec<_> = (0..4)
///     .map(|worker| {
///         let tree = Arc::clone(&tree);
///         thread::spawn(move || {
///             for item in 0..25 {
///                 tree.insert(worker * 25 + item).unwrap();
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(tree.len(), 100);
/// assert_eq!(tree.min(), Some(0));
/// assert_eq!(tree.max(), Some(99));
/// ```
pub struct ConcurrentZipTree<T, C = NaturalOrder> {
    inner: RwLock<ZipTree<T, C>>,
}

impl<T: Ord> ConcurrentZipTree<T> {
    /// Creates an empty tree ordered by `T`'s [`Ord`] implementation.
    #[must_use]
    pub fn new() -> Self {
        Self::from(ZipTree::new())
    }

    /// Creates an empty tree in natural order with the given options.
    #[must_use]
    pub fn with_options(options: ZipOptions) -> Self {
        Self::from(ZipTree::with_options(options))
    }
}

impl<T, C: Comparator<T>> ConcurrentZipTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::from(ZipTree::with_comparator(comparator))
    }

    /// Creates an empty tree ordered by `comparator` with the given options.
    #[must_use]
    pub fn with_comparator_and_options(comparator: C, options: ZipOptions) -> Self {
        Self::from(ZipTree::with_comparator_and_options(comparator, options))
    }

    /// Compares two items with this tree's comparator.
    pub fn compare(&self, left: &T, right: &T) -> std::cmp::Ordering {
        self.inner.read().compare(left, right)
    }

    /// Returns `true` if the tree holds an item equal to `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.inner.read().contains(key)
    }

    /// Visits every item in ascending order under the read lock.
    ///
    /// The visitor must not call back into this tree's mutating methods.
    pub fn scan<B, F>(&self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        self.inner.read().scan(visit)
    }

    /// Visits the items greater than or equal to `pivot` in ascending order
    /// under the read lock.
    pub fn ascend<B, F>(&self, pivot: &T, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        self.inner.read().ascend(pivot, visit)
    }

    /// Visits the items less than or equal to `pivot` in descending order
    /// under the read lock.
    pub fn descend<B, F>(&self, pivot: &T, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        self.inner.read().descend(pivot, visit)
    }
}

impl<T: Clone, C: Comparator<T>> ConcurrentZipTree<T, C> {
    /// Returns a clone of the item equal to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &T) -> Option<T> {
        self.inner.read().get(key).cloned()
    }

    /// Returns a clone of the smallest item.
    #[must_use]
    pub fn min(&self) -> Option<T> {
        self.inner.read().min().cloned()
    }

    /// Returns a clone of the largest item.
    #[must_use]
    pub fn max(&self) -> Option<T> {
        self.inner.read().max().cloned()
    }

    /// Inserts `item`, replacing an equal item if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn insert(&self, item: T) -> Result<Option<T>, ZipTreeError> {
        self.inner.write().insert(item)
    }

    /// Removes and returns the item equal to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn remove(&self, key: &T) -> Result<Option<T>, ZipTreeError> {
        self.inner.write().remove(key)
    }

    /// Removes and returns the smallest item.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn pop_min(&self) -> Result<Option<T>, ZipTreeError> {
        self.inner.write().pop_min()
    }

    /// Removes and returns the largest item.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn pop_max(&self) -> Result<Option<T>, ZipTreeError> {
        self.inner.write().pop_max()
    }

    /// Inserts every item of `items` while holding the write lock once.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] before inserting anything if the tree
    /// is frozen.
    pub fn try_extend<I>(&self, items: I) -> Result<(), ZipTreeError>
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write().try_extend(items)
    }
}

impl<T, C> ConcurrentZipTree<T, C> {
    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the tree holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns `true` once the tree has been frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.inner.read().is_frozen()
    }

    /// Makes the tree permanently read-only.
    pub fn freeze(&self) {
        self.inner.write().freeze();
    }

    /// Removes every item.
    ///
    /// # Errors
    ///
    /// Returns [`ZipTreeError::Frozen`] if the tree is frozen.
    pub fn clear(&self) -> Result<(), ZipTreeError> {
        self.inner.write().clear()
    }

    /// Creates an independent snapshot of this tree in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ziptree::ConcurrentZipTree;
    ///
    /// let tree = ConcurrentZipTree::new();
    /// tree.insert(1).unwrap();
    /// let snapshot = tree.copy();
    /// tree.insert(2).unwrap();
    ///
    /// assert_eq!(snapshot.to_vec(), vec![1]);
    /// assert_eq!(tree.to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn copy(&self) -> Self
    where
        C: Clone,
    {
        Self::from(self.inner.write().copy())
    }

    /// Clones every item into a vector in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }

    /// Consumes the lock and returns the tree inside.
    #[must_use]
    pub fn into_inner(self) -> ZipTree<T, C> {
        self.inner.into_inner()
    }
}

impl<T, C> From<ZipTree<T, C>> for ConcurrentZipTree<T, C> {
    fn from(tree: ZipTree<T, C>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }
}

impl<T: Ord> Default for ConcurrentZipTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ConcurrentZipTree<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner.read(), formatter)
    }
}

// =============================================================================
// Send + Sync Tests
// =============================================================================
