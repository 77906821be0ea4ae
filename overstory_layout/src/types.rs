// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for popover content layout: sizing modes, the layout policy,
//! and its validation error.

use kurbo::Insets;

/// How the shared column width of every row is determined.
///
/// The popover uses a single column: all rows share one width. `Fixed` rows
/// take the given width as-is; `Flexible` rows are measured against a maximum
/// and the widest measurement wins for the whole column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidthMode {
    /// Every row uses exactly this width. No measurement is performed.
    Fixed(f64),
    /// Rows are measured with `max_width` as the constraint; the column width
    /// is the maximum measured width across all rows (never above `max_width`).
    Flexible {
        /// Upper bound handed to the measurement probe as a width constraint.
        max_width: f64,
    },
}

/// How each row's height is determined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HeightMode {
    /// Every row uses exactly this height.
    Fixed(f64),
    /// Each row's height is measured independently; rows may differ. When the
    /// width is also [`WidthMode::Flexible`], both dimensions come from the
    /// same probe call.
    Adaptive,
}

/// How the popover's overall height relates to its accumulated content height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PopoverHeight {
    /// The popover is exactly this tall; the accumulated content height is
    /// ignored (the width is still derived from content).
    Fixed(f64),
    /// The popover is as tall as its content, capped at `max_height`.
    Adaptive {
        /// Upper bound on the popover height. `f64::INFINITY` means uncapped.
        max_height: f64,
    },
}

impl Default for PopoverHeight {
    fn default() -> Self {
        Self::Adaptive {
            max_height: f64::INFINITY,
        }
    }
}

/// Declared per-row sizing. Mandatory: there is no sensible default pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemSize {
    /// Shared column width mode.
    pub width: WidthMode,
    /// Per-row height mode.
    pub height: HeightMode,
}

impl ItemSize {
    /// Create an item sizing from a width and a height mode.
    pub const fn new(width: WidthMode, height: HeightMode) -> Self {
        Self { width, height }
    }

    /// Whether resolving this sizing requires probing actual row content.
    ///
    /// True unless both dimensions are fixed. Used for the fail-fast
    /// construction check against hosts that cannot measure.
    pub const fn needs_measurement(&self) -> bool {
        !matches!(
            (self.width, self.height),
            (WidthMode::Fixed(_), HeightMode::Fixed(_))
        )
    }
}

/// Vertical policy handed to the measurement probe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HeightPolicy {
    /// Compress to the minimal height that fits the content at the width
    /// constraint. This is what adaptive sizing issues.
    Compress,
    /// Lay out at exactly this height. Part of the host capability surface;
    /// fixed-row-height hosts receive the value out of band via
    /// `apply_row_height` instead of per-probe.
    Exact(f64),
}

/// The immutable layout policy for one popover.
///
/// Supplied once at construction and never mutated. `item_spacing` is counted
/// once per row during accumulation; the final inset step removes the single
/// over-counted trailing unit (see [`accumulate`](crate::accumulate)).
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Declared per-row sizing (mandatory).
    pub item_size: ItemSize,
    /// Vertical gap between rows, ≥ 0. Default 0.
    pub item_spacing: f64,
    /// Overall popover height policy. Default adaptive and uncapped.
    pub popover_height: PopoverHeight,
    /// Padding inside the popover around the row content, ≥ 0 on every edge.
    /// `x0`/`x1` are the leading/trailing insets, `y0`/`y1` top/bottom.
    pub content_inset: Insets,
}

impl Layout {
    /// Create a layout with the given row sizing and default spacing, height,
    /// and insets.
    pub const fn new(item_size: ItemSize) -> Self {
        Self {
            item_size,
            item_spacing: 0.0,
            popover_height: PopoverHeight::Adaptive {
                max_height: f64::INFINITY,
            },
            content_inset: Insets::ZERO,
        }
    }

    /// Check the numeric preconditions this crate otherwise assumes.
    ///
    /// Rejects negative or NaN spacing, any negative inset edge, and fixed or
    /// maximum dimensions that are negative or NaN. Intended to run once,
    /// before any UI exists; the resolver and accumulator trust their inputs
    /// after this.
    pub fn validate(&self) -> Result<(), LayoutError> {
        fn bad(v: f64) -> bool {
            v.is_nan() || v < 0.0
        }
        if bad(self.item_spacing) {
            return Err(LayoutError::NegativeSpacing(self.item_spacing));
        }
        let i = self.content_inset;
        if bad(i.x0) || bad(i.y0) || bad(i.x1) || bad(i.y1) {
            return Err(LayoutError::NegativeInset);
        }
        let dims = [
            match self.item_size.width {
                WidthMode::Fixed(v) => v,
                WidthMode::Flexible { max_width } => max_width,
            },
            match self.item_size.height {
                HeightMode::Fixed(v) => v,
                HeightMode::Adaptive => 0.0,
            },
            match self.popover_height {
                PopoverHeight::Fixed(v) => v,
                PopoverHeight::Adaptive { max_height } => max_height,
            },
        ];
        for d in dims {
            if bad(d) {
                return Err(LayoutError::InvalidDimension(d));
            }
        }
        Ok(())
    }
}

/// Numeric precondition violations detected by [`Layout::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// `item_spacing` was negative or NaN.
    #[error("item spacing must be non-negative, got {0}")]
    NegativeSpacing(f64),
    /// At least one content inset edge was negative or NaN.
    #[error("content inset must be non-negative on every edge")]
    NegativeInset,
    /// A fixed or maximum dimension was negative or NaN.
    #[error("sizing dimensions must be non-negative, got {0}")]
    InvalidDimension(f64),
}
