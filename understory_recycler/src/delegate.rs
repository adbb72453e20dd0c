// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional notification and sizing hooks, and the deferred request queue
//! handed to them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_virtual_list::LayoutAxis;

use crate::ScrollPosition;

type DisplayHook<V> = Box<dyn FnMut(&mut V, usize, &mut ListRequests)>;
type ExtentHook = Box<dyn FnMut(usize) -> f64>;

/// Optional hooks a [`RecyclingList`](crate::RecyclingList) calls while it
/// attaches, detaches, and measures items.
///
/// Every hook is optional; an unset hook costs nothing. Display hooks run in
/// the middle of a reconciliation pass and therefore cannot borrow the list.
/// They receive a [`ListRequests`] queue instead, which the list drains once
/// the pass is over.
///
/// ```rust
/// use understory_recycler::ListDelegate;
///
/// let delegate = ListDelegate::<String>::new()
///     .on_will_display(|view, index, _requests| *view = format!("row {index}"))
///     .with_height_for_item(|index| if index == 0 { 88.0 } else { 44.0 });
/// assert!(delegate.has_height_for_item());
/// assert!(!delegate.has_width_for_item());
/// ```
pub struct ListDelegate<V> {
    will_display: Option<DisplayHook<V>>,
    did_end_displaying: Option<DisplayHook<V>>,
    width_for_item: Option<ExtentHook>,
    height_for_item: Option<ExtentHook>,
}

impl<V> fmt::Debug for ListDelegate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListDelegate")
            .field("will_display", &self.will_display.is_some())
            .field("did_end_displaying", &self.did_end_displaying.is_some())
            .field("width_for_item", &self.width_for_item.is_some())
            .field("height_for_item", &self.height_for_item.is_some())
            .finish()
    }
}

impl<V> Default for ListDelegate<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ListDelegate<V> {
    /// Creates a delegate with no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            will_display: None,
            did_end_displaying: None,
            width_for_item: None,
            height_for_item: None,
        }
    }

    /// Called right before a view is attached for an index.
    #[must_use]
    pub fn on_will_display(
        mut self,
        hook: impl FnMut(&mut V, usize, &mut ListRequests) + 'static,
    ) -> Self {
        self.will_display = Some(Box::new(hook));
        self
    }

    /// Called right after a view stops displaying an index, before it is
    /// detached from the host and pooled.
    #[must_use]
    pub fn on_did_end_displaying(
        mut self,
        hook: impl FnMut(&mut V, usize, &mut ListRequests) + 'static,
    ) -> Self {
        self.did_end_displaying = Some(Box::new(hook));
        self
    }

    /// Per-item widths for horizontal layouts, replacing the default width.
    #[must_use]
    pub fn with_width_for_item(mut self, hook: impl FnMut(usize) -> f64 + 'static) -> Self {
        self.width_for_item = Some(Box::new(hook));
        self
    }

    /// Per-item heights for vertical layouts, replacing the default height.
    #[must_use]
    pub fn with_height_for_item(mut self, hook: impl FnMut(usize) -> f64 + 'static) -> Self {
        self.height_for_item = Some(Box::new(hook));
        self
    }

    /// Returns `true` if a width hook is set.
    #[must_use]
    pub fn has_width_for_item(&self) -> bool {
        self.width_for_item.is_some()
    }

    /// Returns `true` if a height hook is set.
    #[must_use]
    pub fn has_height_for_item(&self) -> bool {
        self.height_for_item.is_some()
    }

    pub(crate) fn will_display(&mut self, view: &mut V, index: usize, requests: &mut ListRequests) {
        if let Some(hook) = &mut self.will_display {
            hook(view, index, requests);
        }
    }

    pub(crate) fn did_end_displaying(
        &mut self,
        view: &mut V,
        index: usize,
        requests: &mut ListRequests,
    ) {
        if let Some(hook) = &mut self.did_end_displaying {
            hook(view, index, requests);
        }
    }

    /// Extent of `index` along `axis`: the matching hook if set, else `default`.
    pub(crate) fn item_extent(&mut self, axis: LayoutAxis, index: usize, default: f64) -> f64 {
        let hook = if axis.is_horizontal() {
            &mut self.width_for_item
        } else {
            &mut self.height_for_item
        };
        match hook {
            Some(hook) => hook(index),
            None => default,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum SizeUpdate {
    #[default]
    Nothing,
    All,
    Indices(Vec<usize>),
}

/// List mutations requested from inside a delegate hook.
///
/// Requests are applied after the current pass finishes, in this order:
/// data reload, item reloads, size updates, then scrolling. A data reload
/// supersedes any item reloads and size updates queued alongside it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListRequests {
    pub(crate) reload_data: bool,
    pub(crate) reload_items: Vec<usize>,
    pub(crate) size_update: SizeUpdate,
    pub(crate) scroll_to: Option<(usize, ScrollPosition, bool)>,
}

impl ListRequests {
    /// Requests a full reload.
    pub fn reload_data(&mut self) {
        self.reload_data = true;
        self.reload_items.clear();
        self.size_update = SizeUpdate::Nothing;
    }

    /// Requests that the views for `indices` be re-requested from the data source.
    pub fn reload_items(&mut self, indices: impl IntoIterator<Item = usize>) {
        if !self.reload_data {
            self.reload_items.extend(indices);
        }
    }

    /// Requests that every item size be re-queried.
    pub fn update_item_sizes(&mut self) {
        if !self.reload_data {
            self.size_update = SizeUpdate::All;
        }
    }

    /// Requests that the sizes of `indices` be re-queried.
    pub fn update_item_sizes_at(&mut self, indices: impl IntoIterator<Item = usize>) {
        if self.reload_data {
            return;
        }
        match &mut self.size_update {
            SizeUpdate::All => {}
            SizeUpdate::Indices(pending) => pending.extend(indices),
            SizeUpdate::Nothing => {
                self.size_update = SizeUpdate::Indices(indices.into_iter().collect());
            }
        }
    }

    /// Requests a scroll to `index`. A later request replaces an earlier one.
    pub fn scroll_to_index(&mut self, index: usize, position: ScrollPosition, animated: bool) {
        self.scroll_to = Some((index, position, animated));
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.reload_data
            && self.reload_items.is_empty()
            && self.size_update == SizeUpdate::Nothing
            && self.scroll_to.is_none()
    }

    /// Drops every queued request.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
