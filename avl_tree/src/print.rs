/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Human-readable dumps of the tree contents, for debugging purposes.
//!
//! These helpers only rely on the tree's public traversal API: they never
//! look at the node structure directly.

use std::fmt::{self, Display, Write};

use crate::{AvlTree, TraversalOrder};

/// Number of spaces per depth level used by [`write_sideways`] by default.
pub const SIDEWAYS_INDENT: usize = 3;

/// Line written in place of the contents when the tree is empty.
pub const EMPTY_TREE: &str = "Empty tree.";

/// Write the tree contents in ascending order, one element per line.
///
/// Writes [`EMPTY_TREE`] if the tree holds no elements.
pub fn write_sorted<T: Display>(tree: &AvlTree<T>, out: &mut impl Write) -> fmt::Result {
    if tree.is_empty() {
        return writeln!(out, "{EMPTY_TREE}");
    }
    for value in tree {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// "Sideways-print" the tree: the tree is laid out rotated by 90 degrees
/// counter-clockwise, the root on the left edge and the largest element on the
/// first line.
///
/// Each element is indented by `indent` spaces per depth level. Writes
/// [`EMPTY_TREE`] if the tree holds no elements.
///
/// ```text
///       9
///    8
///       7
/// 5
///       4
///    3
///       1
/// ```
pub fn write_sideways<T: Display>(
    tree: &AvlTree<T>,
    out: &mut impl Write,
    indent: usize,
) -> fmt::Result {
    if tree.is_empty() {
        return writeln!(out, "{EMPTY_TREE}");
    }
    for (depth, value) in tree.traverse(TraversalOrder::ReverseInOrder) {
        writeln!(out, "{:width$}{value}", "", width = depth * indent)?;
    }
    Ok(())
}

/// Render [`write_sorted`] into a new [`String`].
pub fn sorted_to_string<T: Display>(tree: &AvlTree<T>) -> String {
    let mut out = String::new();
    write_sorted(tree, &mut out).expect("writing to a String never fails");
    out
}

/// Render [`write_sideways`] into a new [`String`], using [`SIDEWAYS_INDENT`].
pub fn sideways_to_string<T: Display>(tree: &AvlTree<T>) -> String {
    let mut out = String::new();
    write_sideways(tree, &mut out, SIDEWAYS_INDENT).expect("writing to a String never fails");
    out
}
