// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of declared sizing modes into concrete per-item sizes.
//!
//! ## Probe discipline
//!
//! - `(Fixed, Fixed)` performs zero probe calls; the result is a pure
//!   function of the layout.
//! - Any adaptive dimension performs exactly one probe call per item, in item
//!   order, with [`HeightPolicy::Compress`] and the mode's width constraint.
//! - When both dimensions are adaptive, one joint probe serves both.
//!
//! Whether measurement is possible at all is decided up front (see the
//! controller crate); this module assumes a working probe.

use alloc::vec::Vec;
use kurbo::Size;

use crate::measure::MeasureContent;
use crate::types::{HeightMode, HeightPolicy, Layout, WidthMode};

/// Resolve the effective `(width, height)` of each of `item_count` items.
///
/// Returns one [`Size`] per item, in item order. Fixed dimensions come from
/// `layout` verbatim; adaptive dimensions come from `probe`.
pub fn resolve_item_sizes(
    layout: &Layout,
    item_count: usize,
    probe: &mut dyn MeasureContent,
) -> Vec<Size> {
    let width = layout.item_size.width;
    let height = layout.item_size.height;
    (0..item_count)
        .map(|index| match (width, height) {
            (WidthMode::Fixed(w), HeightMode::Fixed(h)) => Size::new(w, h),
            (WidthMode::Fixed(w), HeightMode::Adaptive) => {
                let measured = probe.measure(index, w, HeightPolicy::Compress);
                Size::new(w, measured.height)
            }
            (WidthMode::Flexible { max_width }, HeightMode::Fixed(h)) => {
                let measured = probe.measure(index, max_width, HeightPolicy::Compress);
                debug_assert!(
                    measured.width <= max_width,
                    "probe returned a width above its constraint"
                );
                Size::new(measured.width, h)
            }
            (WidthMode::Flexible { max_width }, HeightMode::Adaptive) => {
                let measured = probe.measure(index, max_width, HeightPolicy::Compress);
                debug_assert!(
                    measured.width <= max_width,
                    "probe returned a width above its constraint"
                );
                measured
            }
        })
        .collect()
}
