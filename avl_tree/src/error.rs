/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use thiserror::Error;

/// Returned by [`AvlTree::min`](crate::AvlTree::min) and
/// [`AvlTree::max`](crate::AvlTree::max) when the tree holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Underflow: the tree is empty")]
pub struct Underflow;
