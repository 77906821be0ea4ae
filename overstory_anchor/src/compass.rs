// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed six-value compass of popover positions relative to an anchor.

/// Horizontal alignment component of a [`CompassPosition`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HorizontalAlign {
    /// Popover's leading edge flush with the anchor's leading edge.
    Leading,
    /// Popover centered on the anchor's horizontal midpoint.
    Center,
    /// Popover's trailing edge flush with the anchor's trailing edge.
    Trailing,
}

/// Vertical side component of a [`CompassPosition`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VerticalSide {
    /// Popover sits strictly above the anchor (no vertical overlap).
    Above,
    /// Popover sits strictly below the anchor (no vertical overlap).
    Below,
}

/// One of six relative placements of the popover: 3 horizontal alignments ×
/// 2 vertical sides.
///
/// The variant set is closed by design; placement matches exhaustively on the
/// two components, so extending the compass requires updating the formula
/// table in [`place`](crate::place).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum CompassPosition {
    /// Above the anchor, leading-aligned.
    TopLeft,
    /// Above the anchor, centered.
    TopCenter,
    /// Above the anchor, trailing-aligned.
    TopRight,
    /// Below the anchor, leading-aligned.
    #[default]
    BottomLeft,
    /// Below the anchor, centered.
    BottomCenter,
    /// Below the anchor, trailing-aligned.
    BottomRight,
}

impl CompassPosition {
    /// All six positions, in declaration order. Handy for tests and pickers.
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// The horizontal alignment component.
    pub const fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::BottomLeft => HorizontalAlign::Leading,
            Self::TopCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::BottomRight => HorizontalAlign::Trailing,
        }
    }

    /// The vertical side component.
    pub const fn vertical(self) -> VerticalSide {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalSide::Above,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalSide::Below,
        }
    }
}
