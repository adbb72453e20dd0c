// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary of what a list operation attached and detached.

use smallvec::SmallVec;

/// Attach/detach events produced by one list operation, in the order they
/// happened.
///
/// A single operation may detach and re-attach the same index, for example
/// when an item is reloaded. Hosts that already react to [`ListHost`]
/// callbacks can ignore this; it is mostly useful to mirror the list into a
/// separate render tree or to assert on behavior in tests.
///
/// [`ListHost`]: crate::ListHost
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// Indices that received a view.
    pub attached: SmallVec<[usize; 8]>,
    /// Indices whose view was detached and pooled.
    pub detached: SmallVec<[usize; 8]>,
    /// Whether views that stayed attached were moved to new frames.
    pub repositioned: bool,
}

impl Changes {
    /// Returns `true` if nothing was attached, detached, or moved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty() && !self.repositioned
    }
}
