// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item geometry backed by stored extents and a prefix-sum table of starts.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::LayoutAxis;

/// Per-item rectangles for a strip of items laid out along one [`LayoutAxis`].
///
/// The table stores one main-axis extent per item and a table of item starts
/// in progress coordinates (see [`LayoutAxis::span_to_progress`]). Items are
/// contiguous: item `i + 1` starts exactly `gap` after item `i` ends. Every
/// item spans the full cross extent, which hosts keep in sync with their
/// viewport.
///
/// Sizes are pulled from a caller-supplied size function, queried per index.
/// [`GeometryTable::rebuild_all`] queries every item;
/// [`GeometryTable::rebuild_subset`] re-queries only the named indices and
/// shifts the starts of everything after the earliest change.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use understory_virtual_list::{GeometryTable, LayoutAxis};
///
/// let mut table = GeometryTable::new(LayoutAxis::LeftToRight);
/// table.set_cross_extent(44.0);
/// table.set_gap(4.0);
/// table.rebuild_all(3, |_| 10.0);
///
/// assert_eq!(table.rect_for_index(1), Some(Rect::new(14.0, 0.0, 24.0, 44.0)));
/// assert_eq!(table.content_extent(), 38.0);
/// assert_eq!(table.rect_for_index(3), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GeometryTable {
    axis: LayoutAxis,
    extents: Vec<f64>,
    starts: Vec<f64>,
    gap: f64,
    cross_extent: f64,
}

impl GeometryTable {
    /// Creates an empty table for `axis`, with no gap and zero cross extent.
    #[must_use]
    pub fn new(axis: LayoutAxis) -> Self {
        Self {
            axis,
            extents: Vec::new(),
            starts: Vec::new(),
            gap: 0.0,
            cross_extent: 0.0,
        }
    }

    /// The layout axis this table was created for.
    #[must_use]
    pub const fn axis(&self) -> LayoutAxis {
        self.axis
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns `true` if the table holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Gap between consecutive items along the axis.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Extent of every item across the axis.
    #[must_use]
    pub const fn cross_extent(&self) -> f64 {
        self.cross_extent
    }

    /// Sets the gap between consecutive items and shifts every start.
    ///
    /// Negative gaps are clamped to zero.
    pub fn set_gap(&mut self, gap: f64) {
        let gap = sanitize(gap);
        if gap != self.gap {
            self.gap = gap;
            self.refresh_starts_from(0);
        }
    }

    /// Sets the cross-axis extent shared by all items.
    ///
    /// Negative extents are clamped to zero.
    pub fn set_cross_extent(&mut self, extent: f64) {
        self.cross_extent = sanitize(extent);
    }

    /// Recomputes every item from `size_fn`.
    ///
    /// Returns `true` if the item count or any extent changed.
    pub fn rebuild_all(&mut self, len: usize, mut size_fn: impl FnMut(usize) -> f64) -> bool {
        let mut changed = len != self.extents.len();
        self.extents.resize(len, 0.0);
        for (index, slot) in self.extents.iter_mut().enumerate() {
            let extent = sanitize(size_fn(index));
            changed |= *slot != extent;
            *slot = extent;
        }
        self.starts.resize(len, 0.0);
        self.refresh_starts_from(0);
        changed
    }

    /// Re-queries the extents of `indices` and shifts every following item.
    ///
    /// Indices outside `0..len()` are ignored. Returns the earliest index whose
    /// extent changed, or `None` if nothing moved.
    pub fn rebuild_subset(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
        mut size_fn: impl FnMut(usize) -> f64,
    ) -> Option<usize> {
        let mut earliest: Option<usize> = None;
        for index in indices {
            let Some(slot) = self.extents.get_mut(index) else {
                continue;
            };
            let extent = sanitize(size_fn(index));
            if *slot != extent {
                *slot = extent;
                earliest = Some(earliest.map_or(index, |e| e.min(index)));
            }
        }
        if let Some(from) = earliest {
            self.refresh_starts_from(from);
        }
        earliest
    }

    /// Resizes the table to `len` items.
    ///
    /// Retained items keep their extents; only appended items are queried.
    pub fn set_len(&mut self, len: usize, mut size_fn: impl FnMut(usize) -> f64) {
        let old_len = self.extents.len();
        if len <= old_len {
            self.extents.truncate(len);
            self.starts.truncate(len);
            return;
        }
        self.extents.extend((old_len..len).map(|index| sanitize(size_fn(index))));
        self.starts.resize(len, 0.0);
        self.refresh_starts_from(old_len);
    }

    /// Extent of `index` along the axis, or `None` if out of range.
    #[must_use]
    pub fn extent_of(&self, index: usize) -> Option<f64> {
        self.extents.get(index).copied()
    }

    /// Progress-space start of `index`, or `None` if out of range.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    /// Progress-space end of `index`, or `None` if out of range.
    #[must_use]
    pub fn end_of(&self, index: usize) -> Option<f64> {
        Some(self.offset_of(index)? + self.extent_of(index)?)
    }

    /// Total extent of the content along the axis: all extents plus the gaps
    /// between items. Zero for an empty table.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.len()
            .checked_sub(1)
            .and_then(|last| self.end_of(last))
            .unwrap_or(0.0)
    }

    /// Total content size, spanning the cross extent.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.axis.compose_size(self.content_extent(), self.cross_extent)
    }

    /// Rectangle of `index` in content coordinates, or `None` if out of range.
    #[must_use]
    pub fn rect_for_index(&self, index: usize) -> Option<Rect> {
        let start = self.offset_of(index)?;
        let end = start + self.extent_of(index)?;
        let main = self.axis.progress_to_span(start, end, self.content_extent());
        Some(self.axis.compose_rect(main, (0.0, self.cross_extent)))
    }

    /// First index whose end lies strictly after `progress`, or `len()`.
    #[must_use]
    pub fn first_ending_after(&self, progress: f64) -> usize {
        self.partition_point(|index| self.starts[index] + self.extents[index] <= progress)
    }

    /// First index whose end lies at or after `progress`, or `len()`.
    #[must_use]
    pub fn first_ending_at_or_after(&self, progress: f64) -> usize {
        self.partition_point(|index| self.starts[index] + self.extents[index] < progress)
    }

    /// First index whose start lies at or after `progress`, or `len()`.
    #[must_use]
    pub fn first_starting_at_or_after(&self, progress: f64) -> usize {
        self.starts.partition_point(|&start| start < progress)
    }

    /// First index whose start lies strictly after `progress`, or `len()`.
    #[must_use]
    pub fn first_starting_after(&self, progress: f64) -> usize {
        self.starts.partition_point(|&start| start <= progress)
    }

    // Ends are non-decreasing because every item starts at or after the
    // previous end, so a predicate over ends partitions the index space.
    fn partition_point(&self, pred: impl Fn(usize) -> bool) -> usize {
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(mid) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    fn refresh_starts_from(&mut self, from: usize) {
        let len = self.extents.len();
        if from >= len {
            return;
        }
        let mut pos = if from == 0 {
            0.0
        } else {
            self.starts[from - 1] + self.extents[from - 1] + self.gap
        };
        for index in from..len {
            self.starts[index] = pos;
            pos += self.extents[index] + self.gap;
        }
    }
}

fn sanitize(value: f64) -> f64 {
    debug_assert!(
        value.is_finite(),
        "item geometry must be finite; got {value:?}"
    );
    if !value.is_finite() {
        log::warn!("non-finite item geometry {value:?} treated as zero");
        return 0.0;
    }
    if value.is_sign_negative() { 0.0 } else { value }
}
