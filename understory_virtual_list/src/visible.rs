// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-range and hit queries over a [`GeometryTable`].
//!
//! All searches are binary searches over the table's monotonic item starts
//! and ends, so they run in `O(log n)` for any viewport.
//!
//! Intersection is open on both axes: rectangles that only share an edge do
//! not intersect, and a viewport with no area intersects nothing. Point
//! containment is half-open, like [`Rect::contains`].

use core::ops::Range;

use kurbo::{Insets, Point, Rect};

use crate::GeometryTable;

/// Applies `insets` to `bounds`.
///
/// Positive insets shrink the rectangle, negative insets grow it. Hosts use
/// negative insets to realize items slightly outside their bounds.
#[must_use]
pub fn effective_rect(bounds: Rect, insets: Insets) -> Rect {
    Rect::new(
        bounds.x0 + insets.x0,
        bounds.y0 + insets.y0,
        bounds.x1 - insets.x1,
        bounds.y1 - insets.y1,
    )
}

/// Returns `true` if `a` and `b` share a region of positive area.
///
/// Item rectangles are allowed to be degenerate along the layout axis (a
/// zero-sized item strictly inside `b` still intersects), but `b` must have
/// positive area.
#[must_use]
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    b.width() > 0.0
        && b.height() > 0.0
        && a.x0 < b.x1
        && b.x0 < a.x1
        && a.y0 < b.y1
        && b.y0 < a.y1
}

/// Indices whose rectangles intersect `viewport` after applying `insets`.
///
/// Returns an empty range when nothing intersects.
#[must_use]
pub fn visible_range(table: &GeometryTable, viewport: Rect, insets: Insets) -> Range<usize> {
    indexes_in_rect(table, effective_rect(viewport, insets)).unwrap_or(0..0)
}

/// Indices whose rectangles intersect `rect`, or `None` if `rect` is
/// disjoint from the content.
#[must_use]
pub fn indexes_in_rect(table: &GeometryTable, rect: Rect) -> Option<Range<usize>> {
    if table.is_empty() || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let axis = table.axis();
    let (cross_start, cross_end) = axis.cross_span(rect);
    if !(cross_start < table.cross_extent() && 0.0 < cross_end) {
        return None;
    }
    let (main_start, main_end) = axis.main_span(rect);
    let (lo, hi) = axis.span_to_progress(main_start, main_end, table.content_extent());

    // An item intersects when it ends after `lo` and starts before `hi`;
    // both predicates are monotonic in the index.
    let start = table.first_ending_after(lo);
    let end = table.first_starting_at_or_after(hi);
    (start < end).then_some(start..end)
}

/// Index of the item whose rectangle contains `point`, or `None` if the
/// point lies in a gap or outside the content.
#[must_use]
pub fn index_at_point(table: &GeometryTable, point: Point) -> Option<usize> {
    if table.is_empty() {
        return None;
    }
    let axis = table.axis();
    let cross = axis.cross_coord(point);
    if !(0.0 <= cross && cross < table.cross_extent()) {
        return None;
    }
    let main = axis.main_coord(point);
    let (progress, _) = axis.span_to_progress(main, main, table.content_extent());

    // Containment is half-open in content space, which flips to
    // `start < p <= end` in progress space on reversed axes.
    let index = if axis.is_reversed() {
        table.first_ending_at_or_after(progress)
    } else {
        table.first_ending_after(progress)
    };
    let start = table.offset_of(index)?;
    let contained = if axis.is_reversed() {
        start < progress
    } else {
        start <= progress
    };
    contained.then_some(index)
}

/// Index of the item closest to `point` along the layout axis.
///
/// Points inside an item resolve to that item; points in a gap resolve to
/// the nearer neighbor (the earlier one on ties); points beyond the content
/// clamp to the first or last item. Returns `None` only for an empty table.
#[must_use]
pub fn nearest_index(table: &GeometryTable, point: Point) -> Option<usize> {
    let len = table.len();
    if len == 0 {
        return None;
    }
    let axis = table.axis();
    let main = axis.main_coord(point);
    let (progress, _) = axis.span_to_progress(main, main, table.content_extent());

    let next = table.first_starting_after(progress);
    if next == 0 {
        return Some(0);
    }
    let candidate = next - 1;
    let end = table.end_of(candidate)?;
    if progress < end || next == len {
        return Some(candidate);
    }
    let next_start = table.offset_of(next)?;
    if next_start - progress < progress - end {
        Some(next)
    } else {
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Insets, Point, Rect};

    use super::{
        effective_rect, index_at_point, indexes_in_rect, nearest_index, rects_intersect,
        visible_range,
    };
    use crate::{GeometryTable, LayoutAxis};

    const AXES: [LayoutAxis; 4] = [
        LayoutAxis::LeftToRight,
        LayoutAxis::RightToLeft,
        LayoutAxis::TopToBottom,
        LayoutAxis::BottomToTop,
    ];

    struct Rng(u64);

    impl Rng {
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        /// Integer-valued sample in `lo..=hi`, so geometry stays exact.
        fn int(&mut self, lo: i64, hi: i64) -> f64 {
            let span = (hi - lo + 1) as u64;
            (lo + (self.next_u64() % span) as i64) as f64
        }
    }

    fn uniform(axis: LayoutAxis, len: usize, extent: f64, gap: f64, cross: f64) -> GeometryTable {
        let mut table = GeometryTable::new(axis);
        table.set_gap(gap);
        table.set_cross_extent(cross);
        table.rebuild_all(len, |_| extent);
        table
    }

    fn brute_force(table: &GeometryTable, rect: Rect) -> Option<Vec<usize>> {
        let hits: Vec<usize> = (0..table.len())
            .filter(|&i| rects_intersect(table.rect_for_index(i).unwrap(), rect))
            .collect();
        (!hits.is_empty()).then_some(hits)
    }

    #[test]
    fn effective_rect_uses_inset_semantics() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            effective_rect(bounds, Insets::new(10.0, 5.0, 10.0, 5.0)),
            Rect::new(10.0, 5.0, 90.0, 45.0)
        );
        assert_eq!(
            effective_rect(bounds, Insets::uniform(-10.0)),
            Rect::new(-10.0, -10.0, 110.0, 60.0)
        );
    }

    #[test]
    fn fixed_width_strip_at_origin() {
        // 100 items of 44 in a 320 wide viewport: 7 full items and a partial 8th.
        let table = uniform(LayoutAxis::LeftToRight, 100, 44.0, 0.0, 44.0);
        let viewport = Rect::new(0.0, 0.0, 320.0, 44.0);
        assert_eq!(visible_range(&table, viewport, Insets::ZERO), 0..8);
    }

    #[test]
    fn negative_insets_preload_neighbors() {
        let table = uniform(LayoutAxis::LeftToRight, 100, 44.0, 0.0, 44.0);
        let viewport = Rect::new(440.0, 0.0, 760.0, 44.0);
        assert_eq!(visible_range(&table, viewport, Insets::ZERO), 10..18);
        let insets = Insets::new(-44.0, 0.0, -44.0, 0.0);
        assert_eq!(visible_range(&table, viewport, insets), 9..19);
        // Positive insets shrink the effective area.
        let insets = Insets::new(44.0, 0.0, 44.0, 0.0);
        assert_eq!(visible_range(&table, viewport, insets), 11..17);
    }

    #[test]
    fn empty_and_disjoint_queries_return_sentinels() {
        let empty = uniform(LayoutAxis::TopToBottom, 0, 44.0, 0.0, 320.0);
        let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
        assert!(visible_range(&empty, viewport, Insets::ZERO).is_empty());
        assert_eq!(indexes_in_rect(&empty, viewport), None);
        assert_eq!(index_at_point(&empty, Point::new(1.0, 1.0)), None);
        assert_eq!(nearest_index(&empty, Point::new(1.0, 1.0)), None);

        let table = uniform(LayoutAxis::TopToBottom, 10, 44.0, 0.0, 320.0);
        // Beyond the content along the axis.
        assert_eq!(indexes_in_rect(&table, Rect::new(0.0, 500.0, 320.0, 900.0)), None);
        // Beside the content across the axis.
        assert_eq!(indexes_in_rect(&table, Rect::new(400.0, 0.0, 500.0, 100.0)), None);
        // No area.
        assert_eq!(indexes_in_rect(&table, Rect::new(0.0, 10.0, 320.0, 10.0)), None);
        // Inverted by oversized insets.
        assert!(visible_range(&table, viewport, Insets::uniform(400.0)).is_empty());
    }

    #[test]
    fn point_lookup_respects_gaps_and_direction() {
        // Starts 0, 15, 30; ends 10, 25, 40.
        let table = uniform(LayoutAxis::LeftToRight, 3, 10.0, 5.0, 20.0);
        assert_eq!(index_at_point(&table, Point::new(0.0, 0.0)), Some(0));
        assert_eq!(index_at_point(&table, Point::new(9.9, 19.9)), Some(0));
        assert_eq!(index_at_point(&table, Point::new(10.0, 5.0)), None);
        assert_eq!(index_at_point(&table, Point::new(15.0, 5.0)), Some(1));
        assert_eq!(index_at_point(&table, Point::new(39.0, 5.0)), Some(2));
        assert_eq!(index_at_point(&table, Point::new(40.0, 5.0)), None);
        assert_eq!(index_at_point(&table, Point::new(5.0, 20.0)), None);

        // Reversed: item 0 occupies 30..40, item 2 occupies 0..10.
        let table = uniform(LayoutAxis::RightToLeft, 3, 10.0, 5.0, 20.0);
        assert_eq!(index_at_point(&table, Point::new(30.0, 5.0)), Some(0));
        assert_eq!(index_at_point(&table, Point::new(40.0, 5.0)), None);
        assert_eq!(index_at_point(&table, Point::new(0.0, 5.0)), Some(2));
        assert_eq!(index_at_point(&table, Point::new(10.0, 5.0)), None);
        assert_eq!(index_at_point(&table, Point::new(27.0, 5.0)), None);
    }

    #[test]
    fn nearest_index_snaps_out_of_gaps() {
        // Starts 0, 20, 40; ends 10, 30, 50.
        let table = uniform(LayoutAxis::TopToBottom, 3, 10.0, 10.0, 20.0);
        assert_eq!(nearest_index(&table, Point::new(0.0, -5.0)), Some(0));
        assert_eq!(nearest_index(&table, Point::new(0.0, 12.0)), Some(0));
        assert_eq!(nearest_index(&table, Point::new(0.0, 15.0)), Some(0));
        assert_eq!(nearest_index(&table, Point::new(0.0, 18.0)), Some(1));
        assert_eq!(nearest_index(&table, Point::new(0.0, 25.0)), Some(1));
        assert_eq!(nearest_index(&table, Point::new(0.0, 500.0)), Some(2));
    }

    #[test]
    fn ranges_match_brute_force_on_random_layouts() {
        let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
        for round in 0..400 {
            let axis = AXES[round % AXES.len()];
            let len = rng.int(0, 40) as usize;
            let extents: Vec<f64> = (0..len).map(|_| rng.int(0, 30)).collect();
            let mut table = GeometryTable::new(axis);
            table.set_gap(rng.int(0, 6));
            table.set_cross_extent(rng.int(0, 60));
            table.rebuild_all(len, |i| extents[i]);

            let content = table.content_extent() as i64;
            let x = rng.int(-40, content + 40);
            let y = rng.int(-40, content + 40);
            let w = rng.int(0, 120);
            let h = rng.int(0, 120);
            let viewport = Rect::new(x, y, x + w, y + h);
            let inset = rng.int(-20, 20);
            let insets = Insets::new(inset, -inset, inset / 2.0, 0.0);

            let expected = brute_force(&table, effective_rect(viewport, insets));
            let actual = indexes_in_rect(&table, effective_rect(viewport, insets));
            assert_eq!(
                actual.map(|r| r.collect::<Vec<_>>()),
                expected,
                "round {round}: {axis:?} viewport {viewport:?} insets {insets:?}"
            );

            let point = Point::new(rng.int(-10, content + 10), rng.int(-10, content + 10));
            let expected = (0..len).find(|&i| table.rect_for_index(i).unwrap().contains(point));
            assert_eq!(
                index_at_point(&table, point),
                expected,
                "round {round}: {axis:?} point {point:?}"
            );
        }
    }
}
