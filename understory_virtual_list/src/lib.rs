// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: item geometry and visible-range resolution.
//!
//! This crate provides a small, renderer-agnostic core for virtualizing a dense strip
//! of items indexed `0..len`, laid out along one of four directions. It is intended
//! to be shared across different UI stacks and list implementations.
//!
//! The core concepts are:
//!
//! - [`LayoutAxis`]: the direction items are arranged in (left-to-right,
//!   right-to-left, top-to-bottom, or bottom-to-top), plus helpers that map
//!   between item order and 2D content space.
//! - [`GeometryTable`]: per-item rectangles with a configurable gap, backed by
//!   stored extents and a prefix-sum table of starts. Sizes can be re-queried
//!   for a subset of items, shifting only what follows.
//! - [`visible_range`], [`indexes_in_rect`], [`index_at_point`], and
//!   [`nearest_index`]: `O(log n)` queries that resolve which items a viewport
//!   or point touches.
//!
//! This crate deliberately does **not** know about views, widgets, or any
//! particular UI framework. Hosts (for example `understory_recycler`) are
//! responsible for:
//!
//! - Owning the actual data and view instances.
//! - Feeding item sizes and the viewport's cross extent into a [`GeometryTable`].
//! - Calling [`visible_range`] when the viewport changes and diffing the result
//!   to attach and detach views.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Rect};
//! use understory_virtual_list::{GeometryTable, LayoutAxis, visible_range};
//!
//! // 100 items, each 44 logical pixels wide, in a 320x44 viewport.
//! let mut table = GeometryTable::new(LayoutAxis::LeftToRight);
//! table.set_cross_extent(44.0);
//! table.rebuild_all(100, |_| 44.0);
//!
//! let viewport = Rect::new(0.0, 0.0, 320.0, 44.0);
//! assert_eq!(visible_range(&table, viewport, Insets::ZERO), 0..8);
//!
//! // Negative insets realize one extra item on each side.
//! let viewport = Rect::new(440.0, 0.0, 760.0, 44.0);
//! let insets = Insets::new(-44.0, 0.0, -44.0, 0.0);
//! assert_eq!(visible_range(&table, viewport, insets), 9..19);
//! ```
//!
//! All extents and offsets live in a caller-chosen coordinate space
//! (typically logical pixels) and are expected to be finite and non-negative.
//! Negative values are clamped to zero.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod geometry;
mod visible;

pub use axis::LayoutAxis;
pub use geometry::GeometryTable;
pub use visible::{
    effective_rect, index_at_point, indexes_in_rect, nearest_index, rects_intersect,
    visible_range,
};
