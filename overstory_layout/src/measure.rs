// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement capability the resolver requires from a rendering host.

use kurbo::Size;

use crate::types::HeightPolicy;

/// Measure rendered row content through a shared, non-visible probe element.
///
/// The [resolver](crate::resolver::resolve_item_sizes) calls
/// [`measure`](Self::measure) at most once per item, sequentially, on the
/// thread that owns the implementor. An implementation typically rebinds one
/// reusable probe row to the item's content and reads back its natural size;
/// the probe must never become visible to the user.
///
/// Contract:
/// - The returned width must not exceed `width_constraint`
///   (debug builds assert).
/// - Results must not be cached across measurement passes; the controller
///   acquires a fresh pass for every item-list change.
pub trait MeasureContent {
    /// Measure the content of the item at `index` laid out within
    /// `width_constraint`, with `policy` governing the vertical dimension.
    fn measure(&mut self, index: usize, width_constraint: f64, policy: HeightPolicy) -> Size;
}

impl<T: MeasureContent + ?Sized> MeasureContent for &mut T {
    fn measure(&mut self, index: usize, width_constraint: f64, policy: HeightPolicy) -> Size {
        (**self).measure(index, width_constraint, policy)
    }
}
