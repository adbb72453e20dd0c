// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: the data source that supplies views and the host
//! viewport that scrolls and displays them.

use kurbo::{Point, Rect, Size};

use crate::ReusePool;

/// Supplies the item count and the views for individual items.
pub trait DataSource<V> {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Returns a view configured for `index`.
    ///
    /// Implementations typically take a recycled view from `pool` (see
    /// [`ReusePool::dequeue`]) and create a fresh one only when the pool is
    /// empty. Returning `None` leaves the item unrendered for this pass; the
    /// list asks again on the next pass.
    fn view_for_item(&mut self, index: usize, pool: &mut ReusePool<V>) -> Option<V>;
}

/// The scrollable viewport a list lives in.
///
/// Hosts own scrolling physics and gestures. They report the visible area
/// and receive the content size, scroll requests, and view placement.
pub trait ListHost<V> {
    /// Visible area in content coordinates: origin is the scroll offset, size
    /// is the viewport size.
    fn bounds(&self) -> Rect;

    /// Called when the total content size changes.
    fn set_content_size(&mut self, size: Size);

    /// Requests a new scroll offset.
    ///
    /// Non-animated requests are expected to be reflected by
    /// [`ListHost::bounds`] as soon as this returns. For animated requests the
    /// host reports progress through `layout` calls on the list.
    fn set_content_offset(&mut self, offset: Point, animated: bool);

    /// Attaches `view` at `frame`, or moves it there if already attached.
    fn place_view(&mut self, view: &mut V, frame: Rect);

    /// Detaches `view` from the display hierarchy.
    fn remove_view(&mut self, view: &mut V);
}

/// A [`ListHost`] without a display hierarchy.
///
/// Scroll requests apply immediately, animated or not, and view placement is
/// ignored. Useful for driving a list headlessly, for example in tests and
/// benchmarks, or when the real host mirrors attach/detach through the
/// returned [`Changes`](crate::Changes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessViewport {
    bounds: Rect,
    content_size: Size,
}

impl HeadlessViewport {
    /// Creates a viewport of `size` scrolled to the origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rect::from_origin_size(Point::ORIGIN, size),
            content_size: Size::ZERO,
        }
    }

    /// Scrolls to `offset`, keeping the viewport size.
    pub fn scroll_to(&mut self, offset: Point) {
        self.bounds = Rect::from_origin_size(offset, self.bounds.size());
    }

    /// Resizes the viewport, keeping the scroll offset.
    pub fn resize(&mut self, size: Size) {
        self.bounds = Rect::from_origin_size(self.bounds.origin(), size);
    }

    /// Last content size reported by the list.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }
}

impl<V> ListHost<V> for HeadlessViewport {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    fn set_content_offset(&mut self, offset: Point, _animated: bool) {
        self.scroll_to(offset);
    }

    fn place_view(&mut self, _view: &mut V, _frame: Rect) {}

    fn remove_view(&mut self, _view: &mut V) {}
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{HeadlessViewport, ListHost};

    #[test]
    fn headless_viewport_applies_offsets_immediately() {
        let mut viewport = HeadlessViewport::new(Size::new(320.0, 44.0));
        assert_eq!(
            <HeadlessViewport as ListHost<()>>::bounds(&viewport),
            Rect::new(0.0, 0.0, 320.0, 44.0)
        );

        <HeadlessViewport as ListHost<()>>::set_content_offset(
            &mut viewport,
            Point::new(100.0, 0.0),
            true,
        );
        viewport.resize(Size::new(160.0, 44.0));
        assert_eq!(
            <HeadlessViewport as ListHost<()>>::bounds(&viewport),
            Rect::new(100.0, 0.0, 260.0, 44.0)
        );

        <HeadlessViewport as ListHost<()>>::set_content_size(&mut viewport, Size::new(10.0, 2.0));
        assert_eq!(viewport.content_size(), Size::new(10.0, 2.0));
    }
}
