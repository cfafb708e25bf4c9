/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlNode - A node in the AVL tree.
//!
//! Nodes own their children through `Option<Box<_>>` slots. Every structural
//! operation in this module takes a subtree root by value and hands back the
//! (possibly different) new root, which the caller reattaches.

use tracing::trace;

/// An owned, possibly absent, subtree.
pub(crate) type Link<T> = Option<Box<AvlNode<T>>>;

/// A node in the AVL tree.
///
/// Holds one element, the two owned subtrees and the cached height of the
/// subtree rooted at this node.
#[derive(Debug, Clone)]
pub struct AvlNode<T> {
    /// The element stored in this node.
    pub(crate) value: T,
    /// Left subtree (elements less than `value`).
    pub(crate) left: Link<T>,
    /// Right subtree (elements greater than `value`).
    pub(crate) right: Link<T>,
    /// Height of the subtree rooted at this node. A leaf has height 0.
    pub(crate) height: i32,
}

impl<T> AvlNode<T> {
    /// Creates a new leaf node holding `value`.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The element stored in this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&AvlNode<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&AvlNode<T>> {
        self.right.as_deref()
    }

    /// The cached height of the subtree rooted at this node.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the left subtree, `-1` if absent.
    pub(crate) fn left_height(&self) -> i32 {
        height(&self.left)
    }

    /// Height of the right subtree, `-1` if absent.
    pub(crate) fn right_height(&self) -> i32 {
        height(&self.right)
    }

    /// Recompute the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = self.left_height().max(self.right_height()) + 1;
    }

    /// Performs a right rotation (the subtree is overweight on the left).
    ///
    /// The left child is promoted to the root of the subtree, and its former
    /// right subtree becomes the new left subtree of the demoted node.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        trace!("rotate right");
        let mut promoted = self
            .left
            .take()
            .expect("Cannot rotate right without left child");

        self.left = promoted.right.take();
        self.update_height();

        promoted.right = Some(self);
        promoted.update_height();
        promoted
    }

    /// Performs a left rotation (the subtree is overweight on the right).
    ///
    /// Mirror image of [`Self::rotate_right`].
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        trace!("rotate left");
        let mut promoted = self
            .right
            .take()
            .expect("Cannot rotate left without right child");

        self.right = promoted.left.take();
        self.update_height();

        promoted.left = Some(self);
        promoted.update_height();
        promoted
    }

    /// Rotates the left child to the left, then this node to the right.
    pub(crate) fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        trace!("rotate left-right");
        let left = self
            .left
            .take()
            .expect("Cannot rotate left-right without left child");
        self.left = Some(left.rotate_left());
        self.rotate_right()
    }

    /// Rotates the right child to the right, then this node to the left.
    pub(crate) fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        trace!("rotate right-left");
        let right = self
            .right
            .take()
            .expect("Cannot rotate right-left without right child");
        self.right = Some(right.rotate_right());
        self.rotate_left()
    }
}

/// Height of a possibly absent subtree, `-1` if absent.
pub(crate) fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}
