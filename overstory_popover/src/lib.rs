// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_popover --heading-base-level=0

//! Overstory Popover: a transient, anchored overlay menu controller.
//!
//! This crate orchestrates the Overstory stack. A [`Popover`] owns a list of
//! items and a rendering collaborator; it recomputes its content size through
//! `overstory_layout` whenever the items change, and on
//! [`show`](Popover::show) turns an anchor rectangle plus a
//! [`CompassPosition`](overstory_anchor::CompassPosition) into a target
//! rectangle via `overstory_anchor`, handing the results to the host.
//!
//! ## Collaborators, not widgets
//!
//! The engine computes sizes and rectangles; it never renders pixels. A
//! toolkit integration implements two traits:
//!
//! - [`RowHost`] — measures row content through a reusable, non-visible probe
//!   element and attaches/removes the overlay and backdrop views.
//! - [`AnchorLookup`] — resolves the anchor into the visible container's
//!   coordinate space.
//!
//! ## Failure policy
//!
//! Configuration problems ([`ConfigError`]) are fatal and surface from
//! [`Popover::new`], before any UI exists. Runtime placement problems
//! ([`ShowError`]) degrade to logged no-ops; a failed `show` may simply be
//! retried. Empty or unchanged item updates are silent no-ops by contract.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use overstory_layout::{HeightMode, HeightPolicy, ItemSize, WidthMode};
//! use overstory_popover::{
//!     AnchorLookup, BackdropOptions, Popover, PopoverConfig, RowHost,
//! };
//!
//! /// A host that just remembers what it was told to attach.
//! #[derive(Default)]
//! struct Recorder {
//!     overlay: Option<Rect>,
//! }
//!
//! impl RowHost<&'static str> for Recorder {
//!     fn measure_row(&mut self, item: &&'static str, max: f64, _: HeightPolicy) -> Size {
//!         Size::new((item.len() as f64 * 9.0).min(max), 22.0)
//!     }
//!     fn apply_content_size(&mut self, _size: Size) {}
//!     fn apply_row_height(&mut self, _height: f64) {}
//!     fn attach_overlay(&mut self, target: Rect) {
//!         self.overlay = Some(target);
//!     }
//!     fn attach_backdrop(&mut self, _bounds: Rect, _options: BackdropOptions) {}
//!     fn remove_overlay(&mut self) {
//!         self.overlay = None;
//!     }
//! }
//!
//! struct Window;
//!
//! impl AnchorLookup for Window {
//!     fn container_bounds(&self) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 640.0, 480.0))
//!     }
//!     fn anchor_rect(&self) -> Option<Rect> {
//!         Some(Rect::new(40.0, 40.0, 90.0, 60.0))
//!     }
//! }
//!
//! let config = PopoverConfig::new(ItemSize::new(
//!     WidthMode::Flexible { max_width: 180.0 },
//!     HeightMode::Adaptive,
//! ));
//! let mut popover = Popover::new(config, Recorder::default()).unwrap();
//! popover.set_items(vec!["Open", "Duplicate", "Move to Trash"]);
//!
//! let target = popover.show(&Window).unwrap();
//! assert_eq!(popover.host().overlay, Some(target));
//! popover.dismiss();
//! assert_eq!(popover.host().overlay, None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod error;
mod host;

pub use config::PopoverConfig;
pub use controller::Popover;
pub use error::{ConfigError, ShowError};
pub use host::{AnchorLookup, BackdropOptions, RowHost};
