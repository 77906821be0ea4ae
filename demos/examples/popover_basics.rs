// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover basics.
//!
//! Fixed row sizing, a console host, and one `show()` per compass position.
//!
//! Run:
//! - `cargo run -p overstory_demos --example popover_basics`

use kurbo::{Rect, Size};
use overstory_anchor::CompassPosition;
use overstory_layout::{HeightMode, HeightPolicy, ItemSize, WidthMode};
use overstory_popover::{AnchorLookup, BackdropOptions, Popover, PopoverConfig, RowHost};

/// A host that prints what a toolkit integration would attach.
struct ConsoleHost;

impl RowHost<&'static str> for ConsoleHost {
    fn measure_row(&mut self, _item: &&'static str, _max: f64, _policy: HeightPolicy) -> Size {
        unreachable!("fixed sizing never probes")
    }

    fn apply_content_size(&mut self, size: Size) {
        println!("content size -> {size:?}");
    }

    fn apply_row_height(&mut self, height: f64) {
        println!("row height   -> {height}");
    }

    fn attach_overlay(&mut self, target: Rect) {
        println!("overlay      -> {target:?}");
    }

    fn attach_backdrop(&mut self, bounds: Rect, options: BackdropOptions) {
        println!("backdrop     -> {bounds:?} ({options:?})");
    }

    fn remove_overlay(&mut self) {
        println!("overlay removed");
    }
}

/// A window with one button to anchor on.
struct Window;

impl AnchorLookup for Window {
    fn container_bounds(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    fn anchor_rect(&self) -> Option<Rect> {
        Some(Rect::new(360.0, 280.0, 440.0, 310.0))
    }
}

fn main() {
    env_logger::init();

    let mut config = PopoverConfig::new(ItemSize::new(
        WidthMode::Fixed(160.0),
        HeightMode::Fixed(32.0),
    ));
    config.item_spacing = 2.0;

    let mut popover = Popover::new(config, ConsoleHost).unwrap();
    popover.set_items(vec!["Open", "Rename", "Delete"]);

    // Walk the compass; each show recomputes an ephemeral target rect.
    for position in CompassPosition::ALL {
        // Placement options are fixed per popover, so build one per position.
        let mut config = PopoverConfig::new(ItemSize::new(
            WidthMode::Fixed(160.0),
            HeightMode::Fixed(32.0),
        ));
        config.item_spacing = 2.0;
        config.position = position;
        let mut p = Popover::new(config, ConsoleHost).unwrap();
        p.set_items(vec!["Open", "Rename", "Delete"]);
        println!("-- {position:?}");
        let target = p.show(&Window).unwrap();
        println!("   target origin {:?}", target.origin());
        p.dismiss();
    }
}
