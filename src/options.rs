//! Construction options for zip trees.
//!
//! The lock policy is chosen by type rather than by flag: a plain
//! [`ZipTree`](crate::tree::ZipTree) takes no locks and relies on `&mut self`
//! for exclusive access, while a
//! [`ConcurrentZipTree`](crate::tree::ConcurrentZipTree) wraps one in a
//! shared-exclusive lock.

/// Options applied when a tree is constructed.
///
/// # Examples
///
/// ```rust
/// use ziptree::{ZipOptions, ZipTree};
///
/// let options = ZipOptions::new().seed(7).read_only(false);
/// let mut tree = ZipTree::with_options(options);
/// tree.insert(1).unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZipOptions {
    /// Freeze the tree immediately after construction.
    pub read_only: bool,
    /// Seed for the rank generator. `0` selects a non-deterministic seed.
    pub seed: u64,
}

impl ZipOptions {
    /// Creates the default options: writable, entropy-seeded.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            read_only: false,
            seed: 0,
        }
    }

    /// Sets whether the tree is frozen right after construction.
    #[inline]
    #[must_use]
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Sets the rank generator seed.
    #[inline]
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
