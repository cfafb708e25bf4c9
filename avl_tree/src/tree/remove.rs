/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Delete path: removal and successor substitution.

use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::debug;

use super::AvlTree;
use crate::node::{AvlNode, Link};

impl<T: Ord> AvlTree<T> {
    /// Remove the element equal to `value`, if present.
    ///
    /// Returns `true` if an element was removed. Removing from an empty tree,
    /// or removing a value that isn't stored, leaves the tree untouched.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Remove the element equal to `value` and return it, if present.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            debug!("remove on an empty tree: nothing to do");
            return None;
        }
        // Only restructure the tree when there is something to remove.
        if !self.contains(value) {
            debug!("remove ignored: value not present");
            return None;
        }

        let (root, removed) = Self::remove_node(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }

        #[cfg(any(test, feature = "unittest"))]
        self.check_tree_invariants();

        removed
    }

    /// Recursive remove implementation.
    ///
    /// Takes ownership of the subtree rooted at `link` and returns the new
    /// root of that subtree, alongside the removed element if it was found.
    ///
    /// # Algorithm
    ///
    /// 1. Descend by comparison until the node holding `value` is found.
    /// 2. **Two children**: detach the minimum of the right subtree and move
    ///    it into this node, in place of the removed element.
    /// 3. **Zero or one child**: replace the node with its only child (if any).
    /// 4. Rebalance every node on the way back up.
    fn remove_node<Q>(link: Link<T>, value: &Q) -> (Link<T>, Option<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node) = link else {
            return (None, None);
        };

        let removed = match value.cmp(node.value.borrow()) {
            Ordering::Less => {
                let (left, removed) = Self::remove_node(node.left.take(), value);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_node(node.right.take(), value);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    let (right, successor) = Self::remove_min(right);
                    node.left = Some(left);
                    node.right = right;
                    Some(std::mem::replace(&mut node.value, successor))
                }
                (Some(child), None) | (None, Some(child)) => {
                    // The only child of an AVL node is a balanced leaf:
                    // it takes this node's place as-is.
                    return (Some(child), Some(node.value));
                }
                (None, None) => return (None, Some(node.value)),
            },
        };

        (Some(Self::balance(node)), removed)
    }

    /// Detach the minimum element of the subtree rooted at `node`.
    ///
    /// Returns the new root of the subtree and the detached element.
    fn remove_min(mut node: Box<AvlNode<T>>) -> (Link<T>, T) {
        match node.left.take() {
            Some(left) => {
                let (left, min) = Self::remove_min(left);
                node.left = left;
                (Some(Self::balance(node)), min)
            }
            None => {
                let AvlNode { value, right, .. } = *node;
                (right, value)
            }
        }
    }
}
