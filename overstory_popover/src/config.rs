// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover's configuration surface.

use kurbo::{Insets, Vec2};
use overstory_anchor::CompassPosition;
use overstory_layout::{ItemSize, Layout, PopoverHeight};

use crate::host::BackdropOptions;

/// Everything a popover is configured with, fixed at construction.
///
/// Only [`item_size`](Self::item_size) is mandatory; every other option has
/// the documented default. Validation happens in `Popover::new`, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverConfig {
    /// Declared per-row sizing (mandatory, no default).
    pub item_size: ItemSize,
    /// Vertical gap between rows. Default `0`.
    pub item_spacing: f64,
    /// Overall height policy. Default adaptive with an unbounded maximum.
    pub height: PopoverHeight,
    /// Padding inside the popover around the row content. Default zero on
    /// all four edges.
    pub content_inset: Insets,
    /// Compass position relative to the anchor. Default
    /// [`CompassPosition::BottomLeft`].
    pub position: CompassPosition,
    /// Extra shift applied after compass placement. Default zero.
    pub offset: Vec2,
    /// Backdrop behavior. Default dismisses on an outside tap.
    pub backdrop: BackdropOptions,
}

impl PopoverConfig {
    /// Create a configuration with the given row sizing and all defaults.
    pub fn new(item_size: ItemSize) -> Self {
        Self {
            item_size,
            item_spacing: 0.0,
            height: PopoverHeight::default(),
            content_inset: Insets::ZERO,
            position: CompassPosition::default(),
            offset: Vec2::ZERO,
            backdrop: BackdropOptions::default(),
        }
    }

    /// The layout policy slice of this configuration.
    pub fn layout(&self) -> Layout {
        Layout {
            item_size: self.item_size,
            item_spacing: self.item_spacing,
            popover_height: self.height,
            content_inset: self.content_inset,
        }
    }
}
