// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_layout --heading-base-level=0

//! Overstory Layout: content sizing for anchored popovers.
//!
//! Overstory Layout is the measurement half of the Overstory popover stack.
//! It turns declarative sizing modes into a concrete content box:
//!
//! - [`resolve_item_sizes`] resolves each row's `(width, height)` from
//!   [`WidthMode`]/[`HeightMode`], probing actual content through a
//!   [`MeasureContent`] capability when a mode is adaptive.
//! - [`accumulate`] folds the resolved sizes plus spacing and
//!   [content insets](Layout::content_inset) into the final popover size,
//!   applying the [`PopoverHeight`] cap.
//!
//! It does not render, place, or attach anything: placement lives in
//! `overstory_anchor`, and orchestration plus the host capability surface
//! live in `overstory_popover`.
//!
//! ## Sizing modes
//!
//! - `Fixed` width and height are pure functions of the [`Layout`]; no
//!   measurement happens.
//! - [`WidthMode::Flexible`] measures every row against a maximum width and
//!   gives all rows the widest result (one shared column).
//! - [`HeightMode::Adaptive`] measures each row's height independently; rows
//!   may differ.
//!
//! Measurement runs through one reusable, non-visible probe element owned by
//! the host, sequentially on the host's thread, one call per row per pass.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Insets, Size};
//! use overstory_layout::{
//!     accumulate, resolve_item_sizes, HeightMode, HeightPolicy, ItemSize, Layout,
//!     MeasureContent, WidthMode,
//! };
//!
//! // A probe that pretends every row is 12 units per "character" wide.
//! struct TextProbe<'a>(&'a [&'a str]);
//!
//! impl MeasureContent for TextProbe<'_> {
//!     fn measure(&mut self, index: usize, width_constraint: f64, _policy: HeightPolicy) -> Size {
//!         let natural = self.0[index].len() as f64 * 12.0;
//!         Size::new(natural.min(width_constraint), 24.0)
//!     }
//! }
//!
//! let items = ["Copy", "Paste", "Select All"];
//! let mut layout = Layout::new(ItemSize::new(
//!     WidthMode::Flexible { max_width: 200.0 },
//!     HeightMode::Adaptive,
//! ));
//! layout.item_spacing = 4.0;
//! layout.content_inset = Insets::uniform(8.0);
//!
//! let resolved = resolve_item_sizes(&layout, items.len(), &mut TextProbe(&items));
//! let size = accumulate(&layout, &resolved);
//!
//! // "Select All" (10 chars) wins the shared column width.
//! assert_eq!(size.width, 120.0 + 16.0);
//! assert_eq!(size.height, 3.0 * 24.0 + 2.0 * 4.0 + 16.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accumulate;
mod measure;
mod resolver;
mod types;

pub use accumulate::accumulate;
pub use measure::MeasureContent;
pub use resolver::resolve_item_sizes;
pub use types::{
    HeightMode, HeightPolicy, ItemSize, Layout, LayoutError, PopoverHeight, WidthMode,
};
