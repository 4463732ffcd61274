//! Zip trees with copy-on-write snapshots.
//!
//! This module provides an ordered set built on a zip tree, a randomized
//! balanced search tree whose shape is determined by the items and the random
//! rank drawn for each node:
//!
//! - [`ZipTree`]: Lock-free single-owner tree with O(1) snapshots
//! - [`ConcurrentZipTree`]: The same tree behind a reader-writer lock
//!
//! # Snapshots
//!
//! [`ZipTree::copy`] shares every node with its source. Each snapshot stamps
//! the nodes it creates with its own owner tag, and a mutation clones any node
//! carrying a different tag before changing it. Only the nodes on the mutated
//! path are ever copied.
//!
//! # Examples
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use ziptree::ZipTree;
//!
//! let mut tree: ZipTree<i32> = (1..=9).collect();
//! let snapshot = tree.copy();
//! tree.remove(&5).unwrap();
//!
//! // Range walk from a pivot
//! let mut above = Vec::new();
//! let _ = snapshot.ascend::<(), _>(&4, |item| {
//!     above.push(*item);
//!     if above.len() == 3 {
//!         ControlFlow::Break(())
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! });
//! assert_eq!(above, vec![4, 5, 6]);
//! assert!(!tree.contains(&5));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets trees and snapshots move between threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`, which is
/// faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod compare;
mod concurrent;
mod node;
mod rank;
mod traversal;
mod zip;
mod ziptree;

pub use compare::Comparator;
pub use compare::NaturalOrder;
pub use concurrent::ConcurrentZipTree;
pub use traversal::Iter;
pub use ziptree::ZipTree;

// =============================================================================
// Tests
// =============================================================================
