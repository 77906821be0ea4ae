// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulation of resolved per-item sizes into one popover content size.

use kurbo::Size;

use crate::types::{HeightMode, Layout, PopoverHeight, WidthMode};

/// Combine resolved per-item sizes with the layout's spacing and inset policy
/// into the popover's final content box.
///
/// Pure and deterministic: identical inputs always yield the identical
/// [`Size`]. The caller guarantees `resolved` is non-empty (the controller
/// never recomputes for an empty item list).
///
/// Height accounting: each row contributes one spacing unit, so after summing
/// there are `n` units for `n - 1` gaps. The inset step adds
/// `top + bottom - spacing`, reclaiming the single trailing unit; the insets
/// fill the role of the outer gaps. This accounting is part of the geometry
/// contract — do not "simplify" it.
pub fn accumulate(layout: &Layout, resolved: &[Size]) -> Size {
    let inset = layout.content_inset;

    let content_width = match layout.item_size.width {
        WidthMode::Fixed(v) => v,
        WidthMode::Flexible { .. } => resolved.iter().map(|s| s.width).fold(0.0, f64::max),
    };
    let width = content_width + inset.x0 + inset.x1;

    #[allow(
        clippy::cast_precision_loss,
        reason = "item counts are far below 2^52"
    )]
    let mut total = match layout.item_size.height {
        HeightMode::Fixed(v) => (v + layout.item_spacing) * resolved.len() as f64,
        HeightMode::Adaptive => resolved
            .iter()
            .map(|s| s.height + layout.item_spacing)
            .sum(),
    };
    total += inset.y0 + inset.y1 - layout.item_spacing;

    let height = match layout.popover_height {
        PopoverHeight::Fixed(v) => v,
        PopoverHeight::Adaptive { max_height } => total.min(max_height),
    };

    Size::new(width, height)
}
