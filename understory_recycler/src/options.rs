// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List configuration and scroll positioning modes.

use kurbo::Insets;

/// Default extent of an item along the layout axis.
pub const DEFAULT_ITEM_EXTENT: f64 = 44.0;

/// Layout configuration for a [`RecyclingList`](crate::RecyclingList).
///
/// ```rust
/// use kurbo::Insets;
/// use understory_recycler::ListOptions;
///
/// let options = ListOptions::default()
///     .with_item_width(80.0)
///     .with_gap(4.0)
///     .with_visible_insets(Insets::uniform_xy(-80.0, 0.0));
/// assert_eq!(options.item_height, 44.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListOptions {
    /// Item width for horizontal layouts, unless the delegate provides one.
    pub item_width: f64,
    /// Item height for vertical layouts, unless the delegate provides one.
    pub item_height: f64,
    /// Space between consecutive items along the layout axis.
    pub gap_between_items: f64,
    /// Insets applied to the viewport before resolving visible items.
    ///
    /// Positive values shrink the area, negative values realize items
    /// outside the bounds ahead of time.
    pub visible_insets: Insets,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_ITEM_EXTENT,
            item_height: DEFAULT_ITEM_EXTENT,
            gap_between_items: 0.0,
            visible_insets: Insets::ZERO,
        }
    }
}

impl ListOptions {
    /// Sets the default item width.
    #[must_use]
    pub fn with_item_width(mut self, width: f64) -> Self {
        self.item_width = width;
        self
    }

    /// Sets the default item height.
    #[must_use]
    pub fn with_item_height(mut self, height: f64) -> Self {
        self.item_height = height;
        self
    }

    /// Sets the gap between items.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap_between_items = gap;
        self
    }

    /// Sets the visible insets.
    #[must_use]
    pub fn with_visible_insets(mut self, insets: Insets) -> Self {
        self.visible_insets = insets;
        self
    }
}

/// Where to place an item when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollPosition {
    /// Scroll as little as possible to make the item fully visible.
    #[default]
    None,
    /// Center the item in the viewport.
    Center,
    /// Center the item if it is smaller than the viewport, otherwise behave
    /// like [`ScrollPosition::None`].
    CenterElseNone,
}
