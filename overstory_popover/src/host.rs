// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability surface the controller requires from its collaborators.
//!
//! The engine never touches a widget toolkit directly. A toolkit integration
//! implements [`RowHost`] for measuring and displaying rows and
//! [`AnchorLookup`] for resolving the anchor into the visible container's
//! coordinate space. Everything the engine emits flows back out through these
//! traits.

use kurbo::{Rect, Size};
use overstory_layout::HeightPolicy;

bitflags::bitflags! {
    /// Behavior bits for the backdrop attached behind the popover.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BackdropOptions: u8 {
        /// Tapping outside the popover dismisses it.
        const DISMISS_ON_OUTSIDE_TAP = 0b0000_0001;
    }
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self::DISMISS_ON_OUTSIDE_TAP
    }
}

/// Rendering collaborator for one popover: measures row content through a
/// shared probe element and attaches the overlay and backdrop views.
///
/// `I` is the toolkit's row item type; the controller owns the item list and
/// hands items back by reference for measurement (the generalized form of a
/// generic-cell-type list widget).
///
/// ## Probe passes
///
/// Adaptive sizing measures through one reusable, non-visible probe element.
/// The controller brackets every measurement pass with
/// [`begin_probe_pass`](Self::begin_probe_pass) /
/// [`end_probe_pass`](Self::end_probe_pass); `measure_row` is only called in
/// between, once per item, sequentially on the caller's thread. A pass is
/// never started for fully fixed sizing, and the probe must not be shared
/// across concurrent passes (there are none in this engine).
pub trait RowHost<I> {
    /// Whether this host can produce a natural size for row content.
    ///
    /// Hosts built on a generic, non-customizable row element return `false`;
    /// combining such a host with adaptive sizing is rejected at popover
    /// construction, before any UI exists.
    fn supports_measurement(&self) -> bool {
        true
    }

    /// Acquire/reset the shared probe element for one measurement pass.
    fn begin_probe_pass(&mut self) {}

    /// Rebind the probe element to `item` and measure it within
    /// `width_constraint`, with `policy` governing the vertical dimension.
    ///
    /// The returned width must not exceed `width_constraint`.
    fn measure_row(&mut self, item: &I, width_constraint: f64, policy: HeightPolicy) -> Size;

    /// Release the probe element after a measurement pass.
    fn end_probe_pass(&mut self) {}

    /// Receive the recomputed popover content size after an item change.
    fn apply_content_size(&mut self, size: Size);

    /// Receive the shared fixed row height, when the layout declares one.
    fn apply_row_height(&mut self, height: f64);

    /// Attach (or move) the popover overlay at `target`, in container
    /// coordinates.
    fn attach_overlay(&mut self, target: Rect);

    /// Attach the backdrop covering `bounds` (the full visible container).
    fn attach_backdrop(&mut self, bounds: Rect, options: BackdropOptions);

    /// Remove the overlay and backdrop.
    fn remove_overlay(&mut self);
}

/// Anchor resolution: the container lookup and coordinate-space conversion
/// collapsed into the two rectangles the engine actually consumes.
///
/// Both return `None` when the anchor is detached from any visible container;
/// `show()` then degrades to a logged no-op.
pub trait AnchorLookup {
    /// Bounds of the visible container, in the container's own coordinates.
    fn container_bounds(&self) -> Option<Rect>;

    /// The anchor's rectangle converted into the container's coordinates.
    fn anchor_rect(&self) -> Option<Rect>;
}
