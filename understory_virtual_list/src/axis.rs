// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout directions and the mapping between item order and 2D content space.
//!
//! Items are positioned in *progress* coordinates: the distance from the
//! leading edge of the content, measured in item order. For the forward
//! directions progress and content coordinates coincide; for the reversed
//! directions item 0 sits at the far (right or bottom) end of the content.

use kurbo::{Point, Rect, Size};

/// Direction along which items are laid out and indices increase.
///
/// The axis is fixed when a list is created.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutAxis {
    /// Item 0 at the left edge, indices grow to the right.
    #[default]
    LeftToRight,
    /// Item 0 at the right edge, indices grow to the left.
    RightToLeft,
    /// Item 0 at the top edge, indices grow downwards.
    TopToBottom,
    /// Item 0 at the bottom edge, indices grow upwards.
    BottomToTop,
}

impl LayoutAxis {
    /// Returns `true` for [`LeftToRight`](Self::LeftToRight) and [`RightToLeft`](Self::RightToLeft).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }

    /// Returns `true` for [`TopToBottom`](Self::TopToBottom) and [`BottomToTop`](Self::BottomToTop).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Returns `true` if item 0 is placed at the far end of the content.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::RightToLeft | Self::BottomToTop)
    }

    /// Extent of `size` along the layout axis.
    #[must_use]
    pub fn main_extent(self, size: Size) -> f64 {
        if self.is_horizontal() {
            size.width
        } else {
            size.height
        }
    }

    /// Extent of `size` across the layout axis.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        if self.is_horizontal() {
            size.height
        } else {
            size.width
        }
    }

    /// Coordinate of `point` along the layout axis.
    #[must_use]
    pub fn main_coord(self, point: Point) -> f64 {
        if self.is_horizontal() { point.x } else { point.y }
    }

    /// Coordinate of `point` across the layout axis.
    #[must_use]
    pub fn cross_coord(self, point: Point) -> f64 {
        if self.is_horizontal() { point.y } else { point.x }
    }

    /// The `(start, end)` span of `rect` along the layout axis, in content coordinates.
    #[must_use]
    pub fn main_span(self, rect: Rect) -> (f64, f64) {
        if self.is_horizontal() {
            (rect.x0, rect.x1)
        } else {
            (rect.y0, rect.y1)
        }
    }

    /// The `(start, end)` span of `rect` across the layout axis.
    #[must_use]
    pub fn cross_span(self, rect: Rect) -> (f64, f64) {
        if self.is_horizontal() {
            (rect.y0, rect.y1)
        } else {
            (rect.x0, rect.x1)
        }
    }

    /// Converts a content-space span into progress coordinates.
    ///
    /// `content_extent` is the total main-axis extent of the content. The
    /// conversion is its own inverse, see [`LayoutAxis::progress_to_span`].
    #[must_use]
    pub fn span_to_progress(self, start: f64, end: f64, content_extent: f64) -> (f64, f64) {
        if self.is_reversed() {
            (content_extent - end, content_extent - start)
        } else {
            (start, end)
        }
    }

    /// Converts a progress span back into content coordinates.
    #[must_use]
    pub fn progress_to_span(self, start: f64, end: f64, content_extent: f64) -> (f64, f64) {
        self.span_to_progress(start, end, content_extent)
    }

    /// Builds a rectangle from main-axis and cross-axis spans.
    #[must_use]
    pub fn compose_rect(self, main: (f64, f64), cross: (f64, f64)) -> Rect {
        if self.is_horizontal() {
            Rect::new(main.0, cross.0, main.1, cross.1)
        } else {
            Rect::new(cross.0, main.0, cross.1, main.1)
        }
    }

    /// Builds a size from main-axis and cross-axis extents.
    #[must_use]
    pub fn compose_size(self, main: f64, cross: f64) -> Size {
        if self.is_horizontal() {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Builds a point from main-axis and cross-axis coordinates.
    #[must_use]
    pub fn compose_point(self, main: f64, cross: f64) -> Point {
        if self.is_horizontal() {
            Point::new(main, cross)
        } else {
            Point::new(cross, main)
        }
    }
}
