#![cfg(feature = "serde")]

//! Integration tests for serde support in ziptree.
//!
//! Trees serialize as a sequence of items in ascending order and deserialize
//! from any sequence.

use rstest::rstest;
use ziptree::{ZipOptions, ZipTree};

// =============================================================================
// ZipTree Integration Tests
// =============================================================================

#[rstest]
fn test_ziptree_serializes_as_sorted_sequence() {
    let tree: ZipTree<i32> = [5, 3, 7, 1, 9].into_iter().collect();
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[1,3,5,7,9]");
}

#[rstest]
fn test_ziptree_json_roundtrip() {
    let tree: ZipTree<String> = ["pear", "apple", "fig"]
        .into_iter()
        .map(String::from)
        .collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: ZipTree<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(
        restored.iter().collect::<Vec<_>>(),
        tree.iter().collect::<Vec<_>>()
    );
}

#[rstest]
fn test_ziptree_deserializes_unsorted_input_with_duplicates() {
    let restored: ZipTree<i32> = serde_json::from_str("[4, 2, 4, 1, 2]").unwrap();
    assert_eq!(restored.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
    assert!(!restored.is_frozen());
}

#[rstest]
fn test_empty_ziptree() {
    let tree: ZipTree<i32> = ZipTree::new();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");
    let restored: ZipTree<i32> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_invalid_json_is_rejected() {
    let result: Result<ZipTree<i32>, _> = serde_json::from_str(r#"{"not": "a sequence"}"#);
    assert!(result.is_err());
}

// =============================================================================
// ZipOptions Integration Tests
// =============================================================================

#[rstest]
fn test_options_json_roundtrip() {
    let options = ZipOptions::new().read_only(true).seed(42);
    let json = serde_json::to_string(&options).unwrap();
    let restored: ZipOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);
}

#[rstest]
fn test_options_missing_fields_default() {
    let restored: ZipOptions = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
    assert_eq!(restored, ZipOptions::new().seed(9));
    assert!(!restored.read_only);
}
