/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AVL tree implementation.
//!
//! This module contains the tree structure and its algorithms.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path (insert, balance)
//! - [`remove`]: Delete path (remove, successor substitution)
//! - [`find`]: Read path (range queries)
//! - [`invariants`]: Structural checks

mod find;
mod insert;
mod invariants;
mod remove;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::node::{self, AvlNode, Link};
use crate::{Iter, Traversal, TraversalOrder, Underflow};

/// An ordered set of elements backed by an AVL tree.
///
/// Elements are kept in a binary search tree ordered by [`Ord`]. After every
/// insertion or removal the tree is rebalanced with rotations so that, for
/// every node, the heights of its two subtrees differ by at most
/// [`Self::ALLOWED_IMBALANCE`]. This bounds the height to O(log n), and with
/// it the cost of [`insert`](Self::insert), [`remove`](Self::remove) and
/// [`contains`](Self::contains).
///
/// # Ownership
///
/// Each node is owned by exactly one slot: either its parent's child slot or
/// the tree's root slot. Mutations take a subtree by value and return its new
/// root, so no parent pointers are needed.
///
/// # Duplicates
///
/// Inserting an element that is already present is a no-op, and
/// [`len`](Self::len) always reports the number of distinct elements stored.
pub struct AvlTree<T> {
    /// The root of the tree.
    root: Link<T>,
    /// Number of elements currently stored.
    len: usize,
}

impl<T> AvlTree<T> {
    /// Maximum height difference allowed between the two subtrees of a node.
    ///
    /// A larger difference after a mutation triggers a rotation.
    pub const ALLOWED_IMBALANCE: i32 = 1;

    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Get the number of elements in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every element, leaving the tree empty.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        self.root = None;
        self.len = 0;
    }

    /// Height of the tree: `0` for a single node, `-1` when empty.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Get a reference to the root node, if any.
    pub fn root(&self) -> Option<&AvlNode<T>> {
        self.root.as_deref()
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the tree is empty.
    pub fn min(&self) -> Result<&T, Underflow> {
        let mut node = self.root.as_deref().ok_or(Underflow)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the tree is empty.
    pub fn max(&self) -> Result<&T, Underflow> {
        let mut node = self.root.as_deref().ok_or(Underflow)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Returns a lazy iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Returns a lazy iterator visiting the elements in the given `order`,
    /// alongside their depth (the root is at depth 0).
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self.root.as_deref(), order)
    }
}

impl<T: Ord> AvlTree<T> {
    /// Returns true if the tree contains an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored element equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for AvlTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
