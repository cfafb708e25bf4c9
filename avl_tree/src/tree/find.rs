/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: range queries.
//!
//! Given inclusive `[low, high]` bounds, the query walks down to the range and
//! then visits only nodes whose subtree can hold matching elements, comparing
//! each node against both bounds to prune the side that can't.

use std::borrow::Borrow;

use super::AvlTree;
use crate::RangeIter;
use crate::node::AvlNode;

impl<T: Ord> AvlTree<T> {
    /// Collect every element `e` with `low <= e <= high`, in ascending order.
    ///
    /// Runs in O(k + log n), where k is the number of elements returned.
    /// If `low > high` the result is empty.
    pub fn values_in_range<Q>(&self, low: &Q, high: &Q) -> Vec<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut values = Vec::new();
        if low > high {
            return values;
        }
        if let Some(root) = self.root.as_deref() {
            Self::recursive_find_values(&mut values, root, low, high);
        }
        values
    }

    /// Returns a lazy iterator over every element `e` with `low <= e <= high`,
    /// in ascending order.
    ///
    /// Same pruning and cost as [`values_in_range`](Self::values_in_range),
    /// without collecting the results upfront.
    pub fn range<'a, Q>(&'a self, low: &'a Q, high: &'a Q) -> RangeIter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        RangeIter::new(self.root.as_deref(), low, high)
    }

    /// Recursively collect the elements of `node`'s subtree within bounds.
    ///
    /// # Pruning
    ///
    /// - **Above the range** (`value > high`): everything on the right is
    ///   larger still, only the left subtree is visited.
    /// - **Below the range** (`value < low`): only the right subtree is visited.
    /// - **Within the range**: visit left, emit the node, visit right. When
    ///   the node sits exactly on a bound, the side beyond that bound is
    ///   skipped too.
    fn recursive_find_values<'a, Q>(
        values: &mut Vec<&'a T>,
        node: &'a AvlNode<T>,
        low: &Q,
        high: &Q,
    ) where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let value: &Q = node.value.borrow();

        if value > high {
            if let Some(left) = node.left.as_deref() {
                Self::recursive_find_values(values, left, low, high);
            }
        } else if value < low {
            if let Some(right) = node.right.as_deref() {
                Self::recursive_find_values(values, right, low, high);
            }
        } else {
            if value > low
                && let Some(left) = node.left.as_deref()
            {
                Self::recursive_find_values(values, left, low, high);
            }
            values.push(&node.value);
            if value < high
                && let Some(right) = node.right.as_deref()
            {
                Self::recursive_find_values(values, right, low, high);
            }
        }
    }
}
