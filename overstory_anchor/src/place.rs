// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of an already-sized popover rectangle relative to an anchor.

use kurbo::{Point, Rect, Size, Vec2};

use crate::compass::{CompassPosition, HorizontalAlign, VerticalSide};

/// Compute the popover's target rectangle.
///
/// `source` is the anchor's rectangle and the result share one coordinate
/// space (normally the visible container's). The result has exactly `size`
/// and sits strictly above or below `source` per the compass vertical side,
/// aligned per its horizontal component, then shifted by `offset`.
///
/// No clamping to container bounds happens here; the caller owns that policy.
/// Pure and deterministic: identical inputs yield the identical rectangle.
pub fn place(source: Rect, compass: CompassPosition, offset: Vec2, size: Size) -> Rect {
    let x = match compass.horizontal() {
        HorizontalAlign::Leading => source.x0,
        HorizontalAlign::Center => source.center().x - size.width / 2.0,
        HorizontalAlign::Trailing => source.x1 - size.width,
    };
    let y = match compass.vertical() {
        VerticalSide::Above => source.y0 - size.height,
        VerticalSide::Below => source.y1,
    };
    Rect::from_origin_size(Point::new(x + offset.x, y + offset.y), size)
}
