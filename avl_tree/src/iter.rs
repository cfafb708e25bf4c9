/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterators for traversing the AVL tree.
//!
//! All traversals are done iteratively using an explicit stack, so they are
//! lazy and hold no state outside of the iterator itself.

use std::borrow::Borrow;
use std::iter::FusedIterator;

use crate::node::AvlNode;

/// An iterator over the elements of an [`AvlTree`](crate::AvlTree), in
/// ascending order.
///
/// Created by [`AvlTree::iter`](crate::AvlTree::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Nodes whose element hasn't been yielded yet, and whose left subtree
    /// has already been pushed. The top of the stack is the next element.
    stack: Vec<&'a AvlNode<T>>,
    /// Number of elements left to yield.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a AvlNode<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Push `node` and all its leftmost descendants onto the stack.
    fn push_left_spine(&mut self, mut node: Option<&'a AvlNode<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// The order in which a [`Traversal`] visits the nodes of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree: ascending order.
    #[default]
    InOrder,
    /// Right subtree, node, left subtree: descending order.
    ReverseInOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// An entry on the [`Traversal`] stack.
#[derive(Debug)]
struct StackEntry<'a, T> {
    node: &'a AvlNode<T>,
    depth: usize,
    /// Whether the children of `node` have already been pushed.
    was_expanded: bool,
}

impl<T> Clone for StackEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StackEntry<'_, T> {}

/// An iterator visiting the elements of an [`AvlTree`](crate::AvlTree) in an
/// explicit [`TraversalOrder`].
///
/// Each item is a `(depth, element)` pair, where the root sits at depth 0.
///
/// Created by [`AvlTree::traverse`](crate::AvlTree::traverse).
#[derive(Debug)]
pub struct Traversal<'a, T> {
    stack: Vec<StackEntry<'a, T>>,
    order: TraversalOrder,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a AvlNode<T>>, order: TraversalOrder) -> Self {
        let stack = root
            .into_iter()
            .map(|node| StackEntry {
                node,
                depth: 0,
                was_expanded: false,
            })
            .collect();
        Self { stack, order }
    }

    /// The order in which this traversal visits the tree.
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    fn push_child(&mut self, child: Option<&'a AvlNode<T>>, depth: usize) {
        if let Some(node) = child {
            self.stack.push(StackEntry {
                node,
                depth,
                was_expanded: false,
            });
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.stack.pop()?;
            if entry.was_expanded {
                return Some((entry.depth, &entry.node.value));
            }

            let (first, second) = match self.order {
                TraversalOrder::ReverseInOrder => (entry.node.right(), entry.node.left()),
                _ => (entry.node.left(), entry.node.right()),
            };
            let expanded = StackEntry {
                was_expanded: true,
                ..entry
            };
            let child_depth = entry.depth + 1;

            // Push in reverse visiting order: the stack is LIFO.
            match self.order {
                TraversalOrder::PreOrder => {
                    self.push_child(second, child_depth);
                    self.push_child(first, child_depth);
                    return Some((entry.depth, &entry.node.value));
                }
                TraversalOrder::InOrder | TraversalOrder::ReverseInOrder => {
                    self.push_child(second, child_depth);
                    self.stack.push(expanded);
                    self.push_child(first, child_depth);
                }
                TraversalOrder::PostOrder => {
                    self.stack.push(expanded);
                    self.push_child(second, child_depth);
                    self.push_child(first, child_depth);
                }
            }
        }
    }
}

impl<T> FusedIterator for Traversal<'_, T> {}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            order: self.order,
        }
    }
}

/// A lazy iterator over the elements of an [`AvlTree`](crate::AvlTree)
/// within inclusive bounds, in ascending order.
///
/// Subtrees entirely below `low` are never entered, and iteration stops at
/// the first element above `high`, so a full iteration costs O(k + log n).
///
/// Created by [`AvlTree::range`](crate::AvlTree::range).
#[derive(Debug)]
pub struct RangeIter<'a, T, Q: ?Sized> {
    /// Same layout as [`Iter`]'s stack, minus the nodes below `low`.
    stack: Vec<&'a AvlNode<T>>,
    low: &'a Q,
    high: &'a Q,
}

impl<'a, T, Q> RangeIter<'a, T, Q>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    pub(crate) fn new(root: Option<&'a AvlNode<T>>, low: &'a Q, high: &'a Q) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            low,
            high,
        };
        if low <= high {
            iter.push_left_spine(root);
        }
        iter
    }

    /// Push the left spine of `node`, skipping over nodes below `low` (and
    /// their left subtrees) by stepping right instead.
    fn push_left_spine(&mut self, mut node: Option<&'a AvlNode<T>>) {
        while let Some(current) = node {
            let value: &Q = current.value.borrow();
            if value < self.low {
                node = current.right.as_deref();
            } else {
                self.stack.push(current);
                node = current.left.as_deref();
            }
        }
    }
}

impl<'a, T, Q> Iterator for RangeIter<'a, T, Q>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let value: &Q = node.value.borrow();
        if value > self.high {
            // Everything left on the stack is larger still.
            self.stack.clear();
            return None;
        }
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T, Q> FusedIterator for RangeIter<'_, T, Q>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
}
