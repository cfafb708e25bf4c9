/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Invariant checks for the AVL tree.
//!
//! With the `unittest` feature (and in this crate's unit tests) these checks
//! run after every mutation (`insert`, `remove`) to catch structural
//! violations early.

use std::fmt::Debug;

use super::AvlTree;
use crate::node::{self, AvlNode};

impl<T: Ord> AvlTree<T> {
    /// Verify all structural invariants of the tree.
    ///
    /// Panics with a descriptive message if any invariant is violated:
    /// 1. **Ordering**: every element is greater than everything in its left
    ///    subtree and less than everything in its right subtree.
    /// 2. **Balance**: subtree heights differ by at most
    ///    [`Self::ALLOWED_IMBALANCE`] at every node.
    /// 3. **Height**: every cached height matches the children's heights.
    /// 4. **Size**: [`len`](Self::len) matches the number of nodes.
    pub fn check_tree_invariants(&self) {
        let count = self
            .root
            .as_deref()
            .map_or(0, |root| Self::check_node_invariants(root, None, None));
        assert_eq!(
            self.len, count,
            "len mismatch: memoized={}, computed={count}",
            self.len,
        );
    }

    /// Recursively check invariants for the subtree rooted at `node`, whose
    /// elements must all lie strictly between `lower` and `upper`.
    ///
    /// Returns the number of nodes in the subtree.
    fn check_node_invariants(node: &AvlNode<T>, lower: Option<&T>, upper: Option<&T>) -> usize {
        // --- Invariant 1: ordering ---
        if let Some(lower) = lower {
            assert!(
                node.value > *lower,
                "ordering violated: element is not greater than an ancestor it sits right of",
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.value < *upper,
                "ordering violated: element is not less than an ancestor it sits left of",
            );
        }

        let left_count = node
            .left
            .as_deref()
            .map_or(0, |left| Self::check_node_invariants(left, lower, Some(&node.value)));
        let right_count = node
            .right
            .as_deref()
            .map_or(0, |right| Self::check_node_invariants(right, Some(&node.value), upper));

        let left_height = node::height(&node.left);
        let right_height = node::height(&node.right);

        // --- Invariant 2: balance ---
        let imbalance = left_height.abs_diff(right_height);
        assert!(
            imbalance <= Self::ALLOWED_IMBALANCE.unsigned_abs(),
            "height imbalance ({imbalance}) exceeds ALLOWED_IMBALANCE ({}) \
             (left={left_height}, right={right_height})",
            Self::ALLOWED_IMBALANCE,
        );

        // --- Invariant 3: height ---
        let expected_height = left_height.max(right_height) + 1;
        assert_eq!(
            node.height, expected_height,
            "height mismatch: stored {}, expected {expected_height} \
             (left={left_height}, right={right_height})",
            node.height,
        );

        left_count + right_count + 1
    }
}

impl<T: Ord + Debug> AvlTree<T> {
    /// Assert that an in-order walk yields a strictly ascending sequence.
    ///
    /// Cheaper to read in a failing test than
    /// [`check_tree_invariants`](Self::check_tree_invariants), since it
    /// reports the offending pair of elements.
    pub fn check_ascending(&self) {
        let values: Vec<&T> = self.iter().collect();
        for window in values.windows(2) {
            assert!(
                window[0] < window[1],
                "in-order walk not strictly ascending: {:?} before {:?}",
                window[0],
                window[1],
            );
        }
    }
}
