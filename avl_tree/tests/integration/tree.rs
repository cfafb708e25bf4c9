/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the basic AvlTree API.

use avl_tree::{AvlTree, Underflow};
use pretty_assertions::assert_eq;

use crate::helpers::{build_tree, collect};

#[test]
fn test_new_tree() {
    let tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
    assert!(tree.root().is_none());
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_min_max_on_empty_tree_underflow() {
    let tree = AvlTree::<i32>::new();
    assert_eq!(tree.min(), Err(Underflow));
    assert_eq!(tree.max(), Err(Underflow));
}

#[test]
fn test_underflow_message() {
    assert_eq!(Underflow.to_string(), "Underflow: the tree is empty");
}

#[test]
fn test_min_max() {
    let tree = build_tree([5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&9));

    let single = build_tree([42]);
    assert_eq!(single.min(), Ok(&42));
    assert_eq!(single.max(), Ok(&42));
}

#[test]
fn test_contains_and_get() {
    let tree = build_tree([5, 3, 8, 1, 4, 7, 9]);
    for value in [1, 3, 4, 5, 7, 8, 9] {
        assert!(tree.contains(&value), "{value} should be present");
        assert_eq!(tree.get(&value), Some(&value));
    }
    for value in [0, 2, 6, 10] {
        assert!(!tree.contains(&value), "{value} should be absent");
        assert_eq!(tree.get(&value), None);
    }
}

#[test]
fn test_borrowed_lookups() {
    let tree: AvlTree<String> = ["pear", "apple", "fig"].map(String::from).into_iter().collect();
    assert!(tree.contains("fig"));
    assert!(!tree.contains("kiwi"));
    assert_eq!(tree.get("apple").map(String::as_str), Some("apple"));
}

#[test]
fn test_clear_resets_len() {
    let mut tree = build_tree(1..=20);
    assert_eq!(tree.len(), 20);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.min(), Err(Underflow));
    tree.check_tree_invariants();

    // The tree is usable after being cleared.
    tree.insert(3);
    assert_eq!(collect(&tree), [3]);
}

#[test]
fn test_from_iter_and_extend() {
    let mut tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
    tree.extend([5, 4, 3]);
    assert_eq!(tree.len(), 5);
    assert_eq!(collect(&tree), [1, 2, 3, 4, 5]);
    tree.check_tree_invariants();
}

#[test]
fn test_clone_is_independent() {
    let original = build_tree(1..=10);
    let mut copy = original.clone();
    copy.remove(&5);

    assert!(original.contains(&5));
    assert!(!copy.contains(&5));
    assert_eq!(original.len(), 10);
    assert_eq!(copy.len(), 9);
    original.check_tree_invariants();
    copy.check_tree_invariants();
}

#[test]
fn test_debug_lists_elements_in_order() {
    let tree = build_tree([2, 3, 1]);
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
}

#[test]
fn test_root_view() {
    let tree = build_tree([2, 1, 3]);
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 2);
    assert_eq!(root.height(), 1);
    assert!(!root.is_leaf());
    assert_eq!(root.left().map(|n| *n.value()), Some(1));
    assert_eq!(root.right().map(|n| *n.value()), Some(3));
    assert!(root.left().unwrap().is_leaf());
}

#[test]
fn test_default_is_empty() {
    let tree: AvlTree<u8> = AvlTree::default();
    assert!(tree.is_empty());
}
