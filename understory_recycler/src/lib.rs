// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycler --heading-base-level=0

//! Understory Recycler: a view-recycling list controller.
//!
//! A [`RecyclingList`] presents a potentially huge number of items in a
//! scrollable viewport while only keeping views attached for the items that
//! are currently visible. Views that scroll out of view are parked in a
//! [`ReusePool`] and handed back to the [`DataSource`] when a new item needs
//! one, so the number of live views stays bounded by the viewport size.
//!
//! The controller is framework-agnostic. It talks to the outside world
//! through:
//!
//! - [`DataSource`]: reports the item count and configures a view for an
//!   index, usually by dequeuing one from the pool it is handed.
//! - [`ListHost`]: the scrollable viewport. It reports its bounds and receives
//!   the content size, scroll requests, and view placement.
//! - [`ListDelegate`]: optional hooks for display notifications and per-item
//!   sizes. Hooks may queue further mutations through [`ListRequests`].
//!
//! Geometry and visible-range resolution come from
//! [`understory_virtual_list`]; items can flow in any [`LayoutAxis`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_recycler::{
//!     DataSource, HeadlessViewport, LayoutAxis, ListOptions, RecyclingList, ReusePool,
//!     ScrollPosition,
//! };
//!
//! struct Rows;
//!
//! impl DataSource<String> for Rows {
//!     fn item_count(&self) -> usize {
//!         100
//!     }
//!
//!     fn view_for_item(&mut self, index: usize, pool: &mut ReusePool<String>) -> Option<String> {
//!         let mut view = pool.dequeue().unwrap_or_default();
//!         view.clear();
//!         view.push_str(&format!("row {index}"));
//!         Some(view)
//!     }
//! }
//!
//! let host = HeadlessViewport::new(Size::new(320.0, 44.0));
//! let mut list = RecyclingList::new(LayoutAxis::LeftToRight, ListOptions::default(), Rows, host);
//!
//! let changes = list.layout();
//! assert_eq!(list.visible_range(), 0..8);
//! assert_eq!(changes.attached.len(), 8);
//! assert_eq!(list.content_size(), Size::new(4400.0, 44.0));
//!
//! // Jump to the middle; the old views are pooled and rebound.
//! list.scroll_to_index(50, ScrollPosition::Center, false);
//! assert_eq!(list.host().content_size(), Size::new(4400.0, 44.0));
//! assert_eq!(list.visible_range(), 46..55);
//! assert_eq!(list.view_for_item(50).map(String::as_str), Some("row 50"));
//!
//! // Hosts scroll on their own and call `layout` afterwards.
//! list.host_mut().scroll_to(Point::ORIGIN);
//! list.layout();
//! assert_eq!(list.visible_range(), 0..8);
//! ```
//!
//! The list never creates views itself and never drops attached views behind
//! the caller's back: every view it receives ends up either attached, in the
//! pool, or returned through [`RecyclingList::dequeue_reusable_view`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod changes;
mod delegate;
mod host;
mod list;
mod options;
mod pool;

pub use changes::Changes;
pub use delegate::{ListDelegate, ListRequests};
pub use host::{DataSource, HeadlessViewport, ListHost};
pub use list::RecyclingList;
pub use options::{DEFAULT_ITEM_EXTENT, ListOptions, ScrollPosition};
pub use pool::ReusePool;

pub use understory_virtual_list::LayoutAxis;
