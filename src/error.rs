//! Error types for zip tree operations.
//!
//! Lookups that find nothing are not errors: they return `None`. The only
//! failure a tree reports is an attempt to mutate a frozen snapshot.

use thiserror::Error;

/// Represents errors returned by mutating operations on a [`ZipTree`](crate::tree::ZipTree).
///
/// # Examples
///
/// ```rust
/// use ziptree::{ZipTree, ZipTreeError};
///
/// let mut tree: ZipTree<i32> = ZipTree::new();
/// tree.freeze();
///
/// let error = tree.insert(1).unwrap_err();
/// assert_eq!(error, ZipTreeError::Frozen { operation: "insert" });
/// assert_eq!(format!("{error}"), "insert: tree is frozen and cannot be modified");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZipTreeError {
    /// A mutation was attempted on a frozen tree. The tree is unchanged.
    #[error("{operation}: tree is frozen and cannot be modified")]
    Frozen {
        /// The name of the rejected operation.
        operation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("insert")]
    #[case("remove")]
    #[case("clear")]
    fn test_frozen_error_display(#[case] operation: &'static str) {
        let error = ZipTreeError::Frozen { operation };
        assert_eq!(
            format!("{error}"),
            format!("{operation}: tree is frozen and cannot be modified")
        );
    }

    #[rstest]
    fn test_frozen_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ZipTreeError::Frozen {
            operation: "pop_min",
        });
        assert!(error.source().is_none());
    }
}
