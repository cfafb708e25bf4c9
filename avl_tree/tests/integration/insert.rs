/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for insertion and rebalancing.

use avl_tree::AvlTree;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helpers::{build_tree, collect, max_avl_height, min_height};

#[test]
fn test_insert_balanced_sequence() {
    let tree = build_tree([5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(collect(&tree), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().map(|n| *n.value()), Some(5));
}

#[test]
fn test_insert_ascending_rotates_left() {
    let tree = build_tree([10, 20, 30, 40, 50]);
    assert_eq!(collect(&tree), [10, 20, 30, 40, 50]);
    assert!(tree.height() <= 2, "height {} is not balanced", tree.height());

    // 10,20,30 rotates 20 to the root; 40,50 then rotates 40 above 30 and 50.
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 20);
    assert_eq!(root.right().map(|n| *n.value()), Some(40));
}

#[test]
fn test_insert_descending_rotates_right() {
    let tree = build_tree([50, 40, 30, 20, 10]);
    assert_eq!(collect(&tree), [10, 20, 30, 40, 50]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().map(|n| *n.value()), Some(40));
}

#[rstest]
#[case::left_right([30, 10, 20], 20)]
#[case::right_left([10, 30, 20], 20)]
#[case::left_left([30, 20, 10], 20)]
#[case::right_right([10, 20, 30], 20)]
fn test_three_element_rotations(#[case] values: [i32; 3], #[case] expected_root: i32) {
    let tree = build_tree(values);
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), expected_root);
    assert_eq!(root.height(), 1);
    assert_eq!(collect(&tree), [10, 20, 30]);
}

#[test]
fn test_duplicate_insert_is_noop() {
    let mut tree = build_tree([2, 1, 3]);
    assert!(!tree.insert(2));
    assert!(!tree.insert(3));
    assert_eq!(tree.len(), 3);
    assert_eq!(collect(&tree), [1, 2, 3]);
    tree.check_tree_invariants();
}

#[test]
fn test_insert_reports_new_elements() {
    let mut tree = AvlTree::new();
    assert!(tree.insert("b"));
    assert!(tree.insert("a"));
    assert!(!tree.insert("b"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_insert_keeps_first_of_equal_values() {
    /// Compares by `key` only.
    #[derive(Debug)]
    struct Entry {
        key: u32,
        label: &'static str,
    }
    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }
    impl Eq for Entry {}
    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    let mut tree = AvlTree::new();
    tree.insert(Entry { key: 1, label: "first" });
    tree.insert(Entry { key: 1, label: "second" });
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.min().map(|e| e.label), Ok("first"));
}

#[rstest]
#[case::ascending((0..1000).collect())]
#[case::descending((0..1000).rev().collect())]
#[case::alternating((0..500).flat_map(|i| [i, 999 - i]).collect())]
fn test_height_stays_logarithmic(#[case] values: Vec<i32>) {
    let tree = build_tree(values.iter().copied());
    let n = tree.len();
    assert_eq!(n, 1000);
    assert!(tree.height() >= min_height(n));
    assert!(
        tree.height() <= max_avl_height(n),
        "height {} exceeds the AVL bound {} for {n} elements",
        tree.height(),
        max_avl_height(n),
    );
}

#[test]
fn test_sequential_inserts_build_perfect_tree() {
    // Ascending inserts of 2^k - 1 elements produce a perfect tree.
    let tree = build_tree(1..=127);
    assert_eq!(tree.height(), 6);
    assert_eq!(tree.root().map(|n| *n.value()), Some(64));
}
