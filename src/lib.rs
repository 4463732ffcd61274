//! # ziptree
//!
//! An ordered set built on a zip tree, with O(1) copy-on-write snapshots.
//!
//! ## Overview
//!
//! A zip tree is a randomized balanced binary search tree. Every node draws a
//! geometrically distributed rank on insertion, and the tree keeps nodes in
//! search order by item and in heap order by rank. Insertions and deletions
//! restructure the tree with two primitives, *unzip* (split a path around a
//! key) and *zip* (merge two spines), instead of rotations.
//!
//! - **Ordered set**: insert, lookup, delete, min, max and pivoted range walks
//! - **Snapshots**: [`ZipTree::copy`] shares all nodes and clones lazily
//! - **Freezing**: a frozen tree rejects every mutation with [`ZipTreeError`]
//! - **Threads**: [`ConcurrentZipTree`] guards a tree with a reader-writer lock
//!
//! ## Feature Flags
//!
//! - `arc` (default): nodes are shared with `Arc`, making trees `Send + Sync`
//! - `serde`: serialization of trees as ordered sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ziptree::prelude::*;
//!
//! let mut tree = ZipTree::with_options(ZipOptions::new().seed(7));
//! tree.try_extend([5, 3, 7, 1, 9]).unwrap();
//!
//! let mut snapshot = tree.copy();
//! snapshot.freeze();
//! tree.remove(&3).unwrap();
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 5, 7, 9]);
//! assert_eq!(snapshot.len(), 5);
//! assert_eq!(
//!     snapshot.insert(4),
//!     Err(ZipTreeError::Frozen { operation: "insert" })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ziptree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ZipTreeError;
    pub use crate::options::ZipOptions;
    pub use crate::tree::*;
}

pub mod error;
pub mod options;
pub mod tree;

pub use error::ZipTreeError;
pub use options::ZipOptions;
pub use tree::{Comparator, ConcurrentZipTree, Iter, NaturalOrder, ZipTree};
