/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion and balancing.
//!
//! Inserting a value descends to the empty slot where the value belongs,
//! places a new leaf there, and rebalances every ancestor on the way back up.

use std::cmp::Ordering;

use tracing::debug;

use super::AvlTree;
use crate::node::{AvlNode, Link};

impl<T: Ord> AvlTree<T> {
    /// Insert `value` into the tree.
    ///
    /// Returns `true` if the value was added, `false` if an equal value was
    /// already present (in which case the tree is left untouched and the
    /// new value is dropped).
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(Self::insert_node(self.root.take(), value, &mut inserted));

        if inserted {
            self.len += 1;
        } else {
            debug!("insert ignored: value already present");
        }

        #[cfg(any(test, feature = "unittest"))]
        self.check_tree_invariants();

        inserted
    }

    /// Recursive insert implementation.
    ///
    /// Takes ownership of the subtree rooted at `link` and returns the new
    /// root of that subtree after the value has been placed and the subtree
    /// rebalanced.
    fn insert_node(link: Link<T>, value: T, inserted: &mut bool) -> Box<AvlNode<T>> {
        let Some(mut node) = link else {
            *inserted = true;
            return Box::new(AvlNode::leaf(value));
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), value, inserted));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), value, inserted));
            }
            // Duplicate: nothing to do, and nothing below changed.
            Ordering::Equal => return node,
        }

        Self::balance(node)
    }

    /// Restore the AVL property at `node`, assuming both of its subtrees are
    /// balanced and their heights differ by at most one more than
    /// [`Self::ALLOWED_IMBALANCE`].
    ///
    /// Returns the new root of the subtree, with its height updated.
    ///
    /// # Rotation Strategy
    ///
    /// - **Left-heavy**: a single right rotation when the left child's outer
    ///   (left) subtree is at least as tall as its inner one, otherwise a
    ///   left-right double rotation.
    /// - **Right-heavy**: the mirror image, a single left rotation or a
    ///   right-left double rotation.
    ///
    /// Preferring the single rotation on ties matters for removals, where
    /// both grandchildren can have the same height.
    pub(super) fn balance(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let left_height = node.left_height();
        let right_height = node.right_height();

        if left_height - right_height > Self::ALLOWED_IMBALANCE {
            let left = node
                .left
                .as_deref()
                .expect("left-heavy node must have a left child");
            if left.left_height() >= left.right_height() {
                node = node.rotate_right();
            } else {
                node = node.rotate_left_right();
            }
        } else if right_height - left_height > Self::ALLOWED_IMBALANCE {
            let right = node
                .right
                .as_deref()
                .expect("right-heavy node must have a right child");
            if right.right_height() >= right.left_height() {
                node = node.rotate_left();
            } else {
                node = node.rotate_right_left();
            }
        }

        node.update_height();
        node
    }
}
