// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_anchor --heading-base-level=0

//! Overstory Anchor: compass placement for anchored popovers.
//!
//! Given an anchor rectangle, a [`CompassPosition`], a caller offset, and the
//! popover's already-resolved size, [`place`] produces the popover's target
//! rectangle in the same coordinate space. The six positions combine three
//! horizontal alignments (leading, center, trailing) with two vertical sides
//! (strictly above, strictly below); the popover never overlaps the anchor
//! vertically.
//!
//! This crate is deliberately dumb: it does not clamp to container bounds,
//! flip sides when space runs out, or know about screens. The caller supplies
//! rectangles that already live in the visible container's coordinate space
//! (see `overstory_popover` for the orchestration that does so).
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use overstory_anchor::{place, CompassPosition};
//!
//! let anchor = Rect::new(100.0, 200.0, 150.0, 220.0);
//! let target = place(
//!     anchor,
//!     CompassPosition::BottomCenter,
//!     Vec2::ZERO,
//!     Size::new(80.0, 40.0),
//! );
//! assert_eq!(target, Rect::new(85.0, 220.0, 165.0, 260.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod compass;
mod place;

pub use compass::{CompassPosition, HorizontalAlign, VerticalSide};
pub use place::place;
