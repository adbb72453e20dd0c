// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pool of detached views waiting to be rebound to another index.

use alloc::vec::Vec;

/// Detached view instances available for reuse.
///
/// The pool is unordered: [`ReusePool::dequeue`] hands out *some* pooled view,
/// and callers are expected to fully reconfigure it before attaching it
/// again. Both operations are `O(1)`.
///
/// A list only enqueues views it has detached, so anything handed out by the
/// pool is never attached elsewhere at the same time.
#[derive(Clone, Debug)]
pub struct ReusePool<V> {
    views: Vec<V>,
}

impl<V> Default for ReusePool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ReusePool<V> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Removes and returns a pooled view, or `None` if the pool is empty.
    ///
    /// An empty pool is the normal state while a list grows; the caller then
    /// creates a fresh view.
    pub fn dequeue(&mut self) -> Option<V> {
        self.views.pop()
    }

    /// Adds a detached view to the pool.
    pub fn enqueue(&mut self, view: V) {
        self.views.push(view);
    }

    /// Number of pooled views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if no views are pooled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Drops every pooled view.
    pub fn clear(&mut self) {
        self.views.clear();
    }

    /// Removes every pooled view, handing them back to the caller.
    pub fn drain(&mut self) -> impl Iterator<Item = V> + '_ {
        self.views.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::ReusePool;

    #[test]
    fn underflow_returns_none() {
        let mut pool = ReusePool::<u32>::new();
        assert!(pool.is_empty());
        assert_eq!(pool.dequeue(), None);
    }

    #[test]
    fn dequeue_only_returns_enqueued_views() {
        let mut pool = ReusePool::new();
        pool.enqueue(1_u32);
        pool.enqueue(2);
        assert_eq!(pool.len(), 2);

        let mut out = Vec::new();
        while let Some(view) = pool.dequeue() {
            out.push(view);
        }
        out.sort_unstable();
        assert_eq!(out, [1, 2]);
        assert!(pool.is_empty());
    }

    #[test]
    fn drain_and_clear_empty_the_pool() {
        let mut pool = ReusePool::new();
        pool.enqueue('a');
        pool.enqueue('b');
        assert_eq!(pool.drain().count(), 2);
        assert!(pool.is_empty());

        pool.enqueue('c');
        pool.clear();
        assert_eq!(pool.dequeue(), None);
    }
}
