/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlTree - An ordered set backed by a height-balanced binary search tree.
//!
//! This crate provides an in-memory sorted set with logarithmic-time
//! insertion, removal and lookup, and range queries whose cost is
//! proportional to the number of results rather than to the size of the set.
//!
//! # Overview
//!
//! The [`AvlTree`] keeps its elements in a binary search tree and restores the
//! AVL height invariant with rotations after every mutation. It provides:
//!
//! - Insertion and removal in O(log n), with duplicates ignored
//! - Membership tests and min/max queries in O(log n)
//! - Inclusive range queries in O(k + log n), k being the number of results
//! - Lazy ascending iteration, plus explicit traversal orders (reverse
//!   in-order, pre-order, post-order) reporting each element's depth
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree: AvlTree<u32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.height(), 2);
//!
//! // Query a range, bounds included
//! let values: Vec<_> = tree.values_in_range(&3, &7).into_iter().copied().collect();
//! assert_eq!(values, [3, 4, 5, 7]);
//!
//! tree.remove(&5);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! ```

mod error;
mod iter;
mod node;
pub mod print;
mod tree;

pub use error::Underflow;
pub use iter::{Iter, RangeIter, Traversal, TraversalOrder};
pub use node::AvlNode;
pub use tree::AvlTree;
