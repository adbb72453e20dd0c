// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling list controller.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::{Insets, Point, Rect, Size};
use understory_virtual_list::{
    GeometryTable, LayoutAxis, effective_rect, index_at_point, indexes_in_rect, nearest_index,
    visible_range,
};

use crate::delegate::SizeUpdate;
use crate::{
    Changes, DataSource, ListDelegate, ListHost, ListOptions, ListRequests, ReusePool,
    ScrollPosition,
};

/// Upper bound on how many rounds of delegate-queued requests one call drains.
///
/// Requests still queued after this many rounds stay pending until the next
/// call into the list.
const MAX_DRAIN_ROUNDS: usize = 16;

/// A virtualized list that only keeps views for visible items attached and
/// recycles the rest.
///
/// The list owns its [`GeometryTable`], the map of attached views, and a
/// [`ReusePool`]. It talks to three collaborators:
///
/// - a [`DataSource`] that reports the item count and configures views,
/// - a [`ListHost`] viewport that scrolls and displays them,
/// - an optional [`ListDelegate`] with notification and sizing hooks.
///
/// Hosts call [`RecyclingList::layout`] whenever the viewport scrolls or
/// resizes. Each pass detaches views whose items left the visible range,
/// attaches views for items that entered it (in ascending index order), and
/// leaves every other attached view alone.
///
/// The first pass (or the first explicit [`RecyclingList::reload_data`])
/// queries the data source; until then the list is empty.
pub struct RecyclingList<V, D, H> {
    options: ListOptions,
    geometry: GeometryTable,
    data_source: D,
    host: H,
    delegate: ListDelegate<V>,
    pool: ReusePool<V>,
    attached: AttachedViews<V>,
    requests: ListRequests,
    needs_reload: bool,
    content_dirty: bool,
    frames_dirty: bool,
}

impl<V, D, H> fmt::Debug for RecyclingList<V, D, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclingList")
            .field("axis", &self.geometry.axis())
            .field("options", &self.options)
            .field("items", &self.geometry.len())
            .field("attached", &self.attached.range())
            .field("pooled", &self.pool.len())
            .field("delegate", &self.delegate)
            .field("needs_reload", &self.needs_reload)
            .finish_non_exhaustive()
    }
}

impl<V, D, H> RecyclingList<V, D, H>
where
    D: DataSource<V>,
    H: ListHost<V>,
{
    /// Creates a list laid out along `axis`.
    ///
    /// The axis cannot change afterwards.
    #[must_use]
    pub fn new(axis: LayoutAxis, options: ListOptions, data_source: D, host: H) -> Self {
        let mut geometry = GeometryTable::new(axis);
        geometry.set_gap(options.gap_between_items);
        Self {
            options,
            geometry,
            data_source,
            host,
            delegate: ListDelegate::new(),
            pool: ReusePool::new(),
            attached: AttachedViews::new(),
            requests: ListRequests::default(),
            needs_reload: true,
            content_dirty: true,
            frames_dirty: false,
        }
    }

    /// Sets the delegate while building the list.
    #[must_use]
    pub fn with_delegate(mut self, delegate: ListDelegate<V>) -> Self {
        self.delegate = delegate;
        self.needs_reload = true;
        self
    }

    /// Replaces the delegate and reloads, since sizing hooks may differ.
    pub fn set_delegate(&mut self, delegate: ListDelegate<V>) -> Changes {
        self.delegate = delegate;
        self.reload_data()
    }

    /// The layout axis chosen at construction.
    #[must_use]
    pub fn layout_axis(&self) -> LayoutAxis {
        self.geometry.axis()
    }

    /// Current layout options.
    #[must_use]
    pub fn options(&self) -> ListOptions {
        self.options
    }

    /// Shared access to the data source.
    #[must_use]
    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    /// Mutable access to the data source.
    ///
    /// Call [`RecyclingList::reload_data`] or
    /// [`RecyclingList::reload_items_at`] after changing the data.
    pub fn data_source_mut(&mut self) -> &mut D {
        &mut self.data_source
    }

    /// Shared access to the host viewport.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host viewport.
    ///
    /// Call [`RecyclingList::layout`] after scrolling or resizing it.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Replaces the layout options, rebuilding geometry as needed.
    pub fn set_options(&mut self, options: ListOptions) -> Changes {
        let old = core::mem::replace(&mut self.options, options);
        let mut changes = Changes::default();
        if self.needs_reload {
            self.geometry.set_gap(options.gap_between_items);
            self.reload_inner(&mut changes);
        } else {
            let axis = self.geometry.axis();
            let extent_changed = if axis.is_horizontal() {
                old.item_width != options.item_width
            } else {
                old.item_height != options.item_height
            };
            if extent_changed {
                self.rebuild_all_sizes();
            }
            if old.gap_between_items != options.gap_between_items {
                self.geometry.set_gap(options.gap_between_items);
                self.mark_geometry_changed();
            }
            self.reconcile(&mut changes);
        }
        self.drain_requests(&mut changes);
        changes
    }

    /// Sets the default item width used by horizontal layouts.
    pub fn set_item_width(&mut self, width: f64) -> Changes {
        self.set_options(self.options.with_item_width(width))
    }

    /// Sets the default item height used by vertical layouts.
    pub fn set_item_height(&mut self, height: f64) -> Changes {
        self.set_options(self.options.with_item_height(height))
    }

    /// Sets the gap between consecutive items.
    pub fn set_gap_between_items(&mut self, gap: f64) -> Changes {
        self.set_options(self.options.with_gap(gap))
    }

    /// Sets the insets applied to the viewport before resolving visible items.
    pub fn set_visible_insets(&mut self, insets: Insets) -> Changes {
        self.set_options(self.options.with_visible_insets(insets))
    }

    /// Re-queries the item count and every size, and rebinds all views.
    ///
    /// Every attached view is detached and pooled first; queued partial
    /// reloads are superseded.
    pub fn reload_data(&mut self) -> Changes {
        let mut changes = Changes::default();
        self.requests.clear();
        self.reload_inner(&mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Re-requests the views for `indices` from the data source and
    /// re-queries their sizes.
    ///
    /// Only attached indices among `indices` are detached and re-attached;
    /// other attached views receive no notifications.
    pub fn reload_items_at(&mut self, indices: impl IntoIterator<Item = usize>) -> Changes {
        let mut changes = Changes::default();
        let indices: Vec<usize> = indices.into_iter().collect();
        self.reload_items_inner(indices, &mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Re-queries every item size and repositions attached views.
    pub fn update_item_sizes(&mut self) -> Changes {
        let mut changes = Changes::default();
        self.update_sizes_inner(SizeUpdate::All, &mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Re-queries the sizes of `indices` and repositions attached views.
    pub fn update_item_sizes_at(&mut self, indices: impl IntoIterator<Item = usize>) -> Changes {
        let mut changes = Changes::default();
        let update = SizeUpdate::Indices(indices.into_iter().collect());
        self.update_sizes_inner(update, &mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Reconciles attached views with the host's current viewport.
    ///
    /// Call this after every scroll offset or size change. Calling it again
    /// without a viewport change does nothing. Host bounds that are not
    /// finite count as an empty viewport.
    pub fn layout(&mut self) -> Changes {
        let mut changes = Changes::default();
        if self.needs_reload {
            self.reload_inner(&mut changes);
        } else {
            self.reconcile(&mut changes);
        }
        self.drain_requests(&mut changes);
        changes
    }

    /// Scrolls so that `index` is placed according to `position`.
    ///
    /// Offsets are clamped to the content. Out-of-range indices are ignored.
    /// Non-animated scrolls reconcile immediately; animated ones rely on the
    /// host calling [`RecyclingList::layout`] while it animates.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        position: ScrollPosition,
        animated: bool,
    ) -> Changes {
        let mut changes = Changes::default();
        self.scroll_to_index_inner(index, position, animated, &mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Pages one viewport towards lower indices.
    ///
    /// Moves back by one viewport extent, then snaps forward to the first
    /// item boundary at or after that point so no item is skipped.
    pub fn page_backward(&mut self, animated: bool) -> Changes {
        let mut changes = Changes::default();
        self.page_inner(false, animated, &mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Pages one viewport towards higher indices.
    ///
    /// The item cut by the trailing edge of the viewport becomes the first
    /// item. If that item already starts at the leading edge (it is larger
    /// than the viewport), moves by exactly one viewport extent instead.
    pub fn page_forward(&mut self, animated: bool) -> Changes {
        let mut changes = Changes::default();
        self.page_inner(true, animated, &mut changes);
        self.drain_requests(&mut changes);
        changes
    }

    /// Takes a view out of the reuse pool, if any.
    pub fn dequeue_reusable_view(&mut self) -> Option<V> {
        self.pool.dequeue()
    }

    /// Number of views waiting in the reuse pool.
    #[must_use]
    pub fn reusable_view_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of items, as of the last reload.
    #[must_use]
    pub fn number_of_items(&self) -> usize {
        self.geometry.len()
    }

    /// Total content size reported to the host.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.geometry.content_size()
    }

    /// Rectangle of `index` in content coordinates, or `None` if out of range.
    #[must_use]
    pub fn rect_for_item(&self, index: usize) -> Option<Rect> {
        self.geometry.rect_for_index(index)
    }

    /// Attached view for `index`, or `None` if it is not visible or out of range.
    #[must_use]
    pub fn view_for_item(&self, index: usize) -> Option<&V> {
        self.attached.get(index)
    }

    /// Mutable access to the attached view for `index`.
    pub fn view_for_item_mut(&mut self, index: usize) -> Option<&mut V> {
        self.attached.get_mut(index)
    }

    /// Index `view` is attached to, or `None` if it is not attached.
    #[must_use]
    pub fn index_for_view(&self, view: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.attached
            .iter()
            .find_map(|(index, attached)| (attached == view).then_some(index))
    }

    /// Index of the item containing `point`, or `None` outside the items.
    #[must_use]
    pub fn index_for_point(&self, point: Point) -> Option<usize> {
        index_at_point(&self.geometry, point)
    }

    /// Index of the item at the center of the viewport.
    ///
    /// When the center falls in a gap or beyond the content, resolves to the
    /// nearest item along the axis. `None` when the list is empty or the
    /// host bounds are not finite.
    #[must_use]
    pub fn index_for_center_of_viewport(&self) -> Option<usize> {
        let bounds = self.host.bounds();
        if !bounds.is_finite() {
            return None;
        }
        let center = bounds.center();
        index_at_point(&self.geometry, center).or_else(|| nearest_index(&self.geometry, center))
    }

    /// Indices whose rectangles intersect `rect`, or `None` if it is disjoint
    /// from the content.
    #[must_use]
    pub fn indexes_in_rect(&self, rect: Rect) -> Option<Range<usize>> {
        indexes_in_rect(&self.geometry, rect)
    }

    /// The viewport area used to resolve visible items: host bounds with the
    /// visible insets applied.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        effective_rect(self.host.bounds(), self.options.visible_insets)
    }

    /// Attached views in ascending index order.
    pub fn visible_views(&self) -> impl Iterator<Item = &V> + '_ {
        self.attached.iter().map(|(_, view)| view)
    }

    /// Indices that currently have an attached view, ascending.
    pub fn visible_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.attached.iter().map(|(index, _)| index)
    }

    /// The index range resolved by the last pass, including items whose view
    /// could not be obtained yet.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.attached.range()
    }

    fn reload_inner(&mut self, changes: &mut Changes) {
        for (index, mut view) in self.attached.drain() {
            self.delegate
                .did_end_displaying(&mut view, index, &mut self.requests);
            self.host.remove_view(&mut view);
            self.pool.enqueue(view);
            changes.detached.push(index);
        }
        let len = self.data_source.item_count();
        let axis = self.geometry.axis();
        let default = self.default_extent();
        let delegate = &mut self.delegate;
        self.geometry
            .rebuild_all(len, |index| delegate.item_extent(axis, index, default));
        self.needs_reload = false;
        self.content_dirty = true;
        self.frames_dirty = false;
        self.reconcile(changes);
    }

    fn reload_items_inner(&mut self, mut indices: Vec<usize>, changes: &mut Changes) {
        if self.needs_reload {
            self.reload_inner(changes);
            return;
        }
        let len = self.geometry.len();
        indices.retain(|&index| index < len);
        indices.sort_unstable();
        indices.dedup();
        for &index in &indices {
            if let Some(view) = self.attached.take(index) {
                self.detach(index, view, changes);
            }
        }
        self.rebuild_sizes_at(&indices);
        self.reconcile(changes);
    }

    fn update_sizes_inner(&mut self, update: SizeUpdate, changes: &mut Changes) {
        if self.needs_reload {
            self.reload_inner(changes);
            return;
        }
        match update {
            SizeUpdate::Nothing => {}
            SizeUpdate::All => self.rebuild_all_sizes(),
            SizeUpdate::Indices(indices) => self.rebuild_sizes_at(&indices),
        }
        self.reconcile(changes);
    }

    fn rebuild_all_sizes(&mut self) {
        let len = self.geometry.len();
        let axis = self.geometry.axis();
        let default = self.default_extent();
        let delegate = &mut self.delegate;
        if self
            .geometry
            .rebuild_all(len, |index| delegate.item_extent(axis, index, default))
        {
            self.mark_geometry_changed();
        }
    }

    fn rebuild_sizes_at(&mut self, indices: &[usize]) {
        let axis = self.geometry.axis();
        let default = self.default_extent();
        let delegate = &mut self.delegate;
        let changed = self.geometry.rebuild_subset(indices.iter().copied(), |index| {
            delegate.item_extent(axis, index, default)
        });
        if changed.is_some() {
            self.mark_geometry_changed();
        }
    }

    fn mark_geometry_changed(&mut self) {
        self.content_dirty = true;
        self.frames_dirty = true;
    }

    fn default_extent(&self) -> f64 {
        if self.geometry.axis().is_horizontal() {
            self.options.item_width
        } else {
            self.options.item_height
        }
    }

    /// Diffs the attached range against the range visible in the host bounds.
    fn reconcile(&mut self, changes: &mut Changes) {
        let bounds = self.host.bounds();
        let viewable = bounds.is_finite();
        if viewable {
            let cross = self.geometry.axis().cross_extent(bounds.size());
            if cross != self.geometry.cross_extent() {
                self.geometry.set_cross_extent(cross);
                self.mark_geometry_changed();
            }
        } else {
            // The cross extent keeps its last finite value.
            log::warn!("host bounds {bounds:?} are not finite; treating the viewport as empty");
        }
        if self.content_dirty {
            self.host.set_content_size(self.geometry.content_size());
            self.content_dirty = false;
        }

        let target = if viewable {
            visible_range(&self.geometry, bounds, self.options.visible_insets)
        } else {
            0..0
        };
        for index in self.attached.range() {
            if target.contains(&index) {
                continue;
            }
            if let Some(view) = self.attached.take(index) {
                self.detach(index, view, changes);
            }
        }
        self.attached.reshape(target.clone());

        if self.frames_dirty {
            for (index, view) in self.attached.iter_mut() {
                if let Some(frame) = self.geometry.rect_for_index(index) {
                    self.host.place_view(view, frame);
                    changes.repositioned = true;
                }
            }
            self.frames_dirty = false;
        }

        for index in target.clone() {
            // A queued reload replaces whatever this pass would still attach.
            if self.requests.reload_data {
                break;
            }
            if self.attached.get(index).is_some() {
                continue;
            }
            let Some(frame) = self.geometry.rect_for_index(index) else {
                continue;
            };
            let Some(mut view) = self.data_source.view_for_item(index, &mut self.pool) else {
                log::debug!("no view for item {index}; retrying on the next pass");
                continue;
            };
            self.delegate
                .will_display(&mut view, index, &mut self.requests);
            self.host.place_view(&mut view, frame);
            self.attached.put(index, view);
            changes.attached.push(index);
        }

        log::trace!(
            "reconciled {target:?}: {} attached, {} detached, {} pooled",
            changes.attached.len(),
            changes.detached.len(),
            self.pool.len()
        );
    }

    fn detach(&mut self, index: usize, mut view: V, changes: &mut Changes) {
        self.delegate
            .did_end_displaying(&mut view, index, &mut self.requests);
        self.host.remove_view(&mut view);
        self.pool.enqueue(view);
        changes.detached.push(index);
    }

    fn scroll_to_index_inner(
        &mut self,
        index: usize,
        position: ScrollPosition,
        animated: bool,
        changes: &mut Changes,
    ) {
        if self.needs_reload {
            self.reload_inner(changes);
        }
        let Some(rect) = self.geometry.rect_for_index(index) else {
            return;
        };
        let bounds = self.host.bounds();
        if !bounds.is_finite() {
            return;
        }
        let axis = self.geometry.axis();
        let (view_start, view_end) = axis.main_span(bounds);
        let extent = view_end - view_start;
        let (item_start, item_end) = axis.main_span(rect);

        let centered = (item_start + item_end) / 2.0 - extent / 2.0;
        let minimal = if item_start < view_start || item_end - item_start > extent {
            item_start
        } else if item_end > view_end {
            item_end - extent
        } else {
            view_start
        };
        let origin = match position {
            ScrollPosition::Center => centered,
            ScrollPosition::CenterElseNone if item_end - item_start < extent => centered,
            ScrollPosition::CenterElseNone | ScrollPosition::None => minimal,
        };
        self.scroll_main_to(origin, animated, changes);
    }

    fn page_inner(&mut self, forward: bool, animated: bool, changes: &mut Changes) {
        if self.needs_reload {
            self.reload_inner(changes);
        }
        let axis = self.geometry.axis();
        let bounds = self.host.bounds();
        let extent = axis.main_extent(bounds.size());
        if self.geometry.is_empty() || !bounds.is_finite() || extent <= 0.0 {
            return;
        }
        let content = self.geometry.content_extent();
        let (main_start, main_end) = axis.main_span(bounds);
        let (lead, trail) = axis.span_to_progress(main_start, main_end, content);

        let target = if forward {
            let cut = self.geometry.first_ending_after(trail);
            match self.geometry.offset_of(cut) {
                Some(start) if start > lead => start,
                _ => lead + extent,
            }
        } else {
            let target = lead - extent;
            let boundary = self.geometry.first_starting_at_or_after(target);
            match self.geometry.offset_of(boundary) {
                Some(start) if start < lead => start,
                _ => target,
            }
        };
        let (origin, _) = axis.progress_to_span(target, target + extent, content);
        self.scroll_main_to(origin, animated, changes);
    }

    /// Moves the viewport's main-axis origin, clamped to the content.
    fn scroll_main_to(&mut self, origin: f64, animated: bool, changes: &mut Changes) {
        let axis = self.geometry.axis();
        let bounds = self.host.bounds();
        let extent = axis.main_extent(bounds.size());
        let max = (self.geometry.content_extent() - extent).max(0.0);
        let origin = if origin.is_finite() {
            origin.clamp(0.0, max)
        } else {
            0.0
        };
        let offset = axis.compose_point(origin, axis.cross_coord(bounds.origin()));
        if offset == bounds.origin() {
            return;
        }
        self.host.set_content_offset(offset, animated);
        if !animated {
            self.reconcile(changes);
        }
    }

    fn drain_requests(&mut self, changes: &mut Changes) {
        for _ in 0..MAX_DRAIN_ROUNDS {
            if self.requests.is_empty() {
                return;
            }
            let pending = core::mem::take(&mut self.requests);
            if pending.reload_data {
                self.reload_inner(changes);
            } else {
                if !pending.reload_items.is_empty() {
                    self.reload_items_inner(pending.reload_items, changes);
                }
                if pending.size_update != SizeUpdate::Nothing {
                    self.update_sizes_inner(pending.size_update, changes);
                }
            }
            if let Some((index, position, animated)) = pending.scroll_to {
                self.scroll_to_index_inner(index, position, animated, changes);
            }
        }
        if !self.requests.is_empty() {
            log::warn!(
                "delegate requests still queued after {MAX_DRAIN_ROUNDS} rounds; \
                 deferring them to the next call"
            );
        }
    }
}

/// Views attached to a contiguous index range, with holes for items whose
/// view could not be obtained.
#[derive(Debug)]
struct AttachedViews<V> {
    first: usize,
    slots: VecDeque<Option<V>>,
}

impl<V> AttachedViews<V> {
    fn new() -> Self {
        Self {
            first: 0,
            slots: VecDeque::new(),
        }
    }

    fn range(&self) -> Range<usize> {
        self.first..self.first + self.slots.len()
    }

    fn get(&self, index: usize) -> Option<&V> {
        let offset = index.checked_sub(self.first)?;
        self.slots.get(offset)?.as_ref()
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        let offset = index.checked_sub(self.first)?;
        self.slots.get_mut(offset)?.as_mut()
    }

    /// Removes the view at `index`, leaving a hole.
    fn take(&mut self, index: usize) -> Option<V> {
        let offset = index.checked_sub(self.first)?;
        self.slots.get_mut(offset)?.take()
    }

    /// Stores `view` at `index`, which must lie inside [`Self::range`].
    fn put(&mut self, index: usize, view: V) {
        let slot = index
            .checked_sub(self.first)
            .and_then(|offset| self.slots.get_mut(offset));
        debug_assert!(slot.is_some(), "index {index} outside the attached range");
        if let Some(slot) = slot {
            debug_assert!(slot.is_none(), "index {index} already has a view");
            *slot = Some(view);
        }
    }

    /// Moves the range to `target`. Slots leaving the range must be holes.
    fn reshape(&mut self, target: Range<usize>) {
        let current = self.range();
        let disjoint = target.start >= current.end || current.start >= target.end;
        if target.is_empty() || current.is_empty() || disjoint {
            debug_assert!(
                self.slots.iter().all(Option::is_none),
                "views must be detached before their slots are dropped"
            );
            self.slots.clear();
            self.slots.resize_with(target.len(), || None);
            self.first = target.start;
            return;
        }
        while self.first < target.start {
            let slot = self.slots.pop_front();
            debug_assert!(
                matches!(slot, Some(None)),
                "views must be detached before their slots are dropped"
            );
            self.first += 1;
        }
        while self.first > target.start {
            self.slots.push_front(None);
            self.first -= 1;
        }
        while self.first + self.slots.len() > target.end {
            let slot = self.slots.pop_back();
            debug_assert!(
                matches!(slot, Some(None)),
                "views must be detached before their slots are dropped"
            );
        }
        while self.first + self.slots.len() < target.end {
            self.slots.push_back(None);
        }
    }

    fn iter(&self) -> impl Iterator<Item = (usize, &V)> + '_ {
        let first = self.first;
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(offset, slot)| Some((first + offset, slot.as_ref()?)))
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut V)> + '_ {
        let first = self.first;
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(move |(offset, slot)| Some((first + offset, slot.as_mut()?)))
    }

    /// Removes every view, leaving an empty range.
    fn drain(&mut self) -> Vec<(usize, V)> {
        let first = core::mem::take(&mut self.first);
        core::mem::take(&mut self.slots)
            .into_iter()
            .enumerate()
            .filter_map(|(offset, slot)| Some((first + offset, slot?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::AttachedViews;

    #[test]
    fn reshape_slides_and_keeps_overlap() {
        let mut attached = AttachedViews::new();
        attached.reshape(2..5);
        attached.put(2, 'a');
        attached.put(3, 'b');
        attached.put(4, 'c');

        assert_eq!(attached.take(2), Some('a'));
        attached.reshape(3..7);
        assert_eq!(attached.range(), 3..7);
        assert_eq!(attached.get(3), Some(&'b'));
        assert_eq!(attached.get(4), Some(&'c'));
        assert_eq!(attached.get(5), None);
        assert_eq!(attached.get(2), None);

        attached.put(6, 'd');
        let indices: Vec<usize> = attached.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![3, 4, 6]);
    }

    #[test]
    fn reshape_to_disjoint_range_starts_fresh() {
        let mut attached = AttachedViews::<u8>::new();
        attached.reshape(0..3);
        attached.reshape(10..12);
        assert_eq!(attached.range(), 10..12);
        assert_eq!(attached.iter().count(), 0);
        attached.reshape(0..0);
        assert!(attached.range().is_empty());
    }

    #[test]
    fn drain_returns_views_with_indices() {
        let mut attached = AttachedViews::new();
        attached.reshape(5..8);
        attached.put(5, 50_u32);
        attached.put(7, 70);
        assert_eq!(attached.drain(), vec![(5, 50), (7, 70)]);
        assert_eq!(attached.range(), 0..0);
    }
}
