// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive menu sizing.
//!
//! Flexible column width and adaptive row heights measured through a fake
//! text metric, then a capped popover height.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p overstory_demos --example adaptive_menu`

use kurbo::{Insets, Rect, Size};
use overstory_layout::{HeightMode, HeightPolicy, ItemSize, PopoverHeight, WidthMode};
use overstory_popover::{AnchorLookup, BackdropOptions, Popover, PopoverConfig, RowHost};

const CHAR_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 18.0;

/// A host whose "probe row" is a monospace text metric: rows wrap at the
/// width constraint and grow by whole lines.
#[derive(Default)]
struct TextHost {
    probes: usize,
}

impl RowHost<String> for TextHost {
    fn begin_probe_pass(&mut self) {
        println!("probe acquired");
    }

    fn measure_row(&mut self, item: &String, max: f64, _policy: HeightPolicy) -> Size {
        self.probes += 1;
        let natural = item.len() as f64 * CHAR_WIDTH;
        let chars_per_line = (max / CHAR_WIDTH).floor().max(1.0);
        let lines = (item.len() as f64 / chars_per_line).ceil().max(1.0);
        Size::new(natural.min(max), lines * LINE_HEIGHT)
    }

    fn end_probe_pass(&mut self) {
        println!("probe released after {} measurements", self.probes);
    }

    fn apply_content_size(&mut self, size: Size) {
        println!("content size -> {size:?}");
    }

    fn apply_row_height(&mut self, _height: f64) {}

    fn attach_overlay(&mut self, target: Rect) {
        println!("overlay      -> {target:?}");
    }

    fn attach_backdrop(&mut self, bounds: Rect, _options: BackdropOptions) {
        println!("backdrop     -> {bounds:?}");
    }

    fn remove_overlay(&mut self) {
        println!("overlay removed");
    }
}

struct Toolbar;

impl AnchorLookup for Toolbar {
    fn container_bounds(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 1024.0, 768.0))
    }

    fn anchor_rect(&self) -> Option<Rect> {
        Some(Rect::new(900.0, 10.0, 990.0, 40.0))
    }
}

fn main() {
    env_logger::init();

    let mut config = PopoverConfig::new(ItemSize::new(
        WidthMode::Flexible { max_width: 220.0 },
        HeightMode::Adaptive,
    ));
    config.item_spacing = 4.0;
    config.content_inset = Insets::uniform(10.0);
    config.height = PopoverHeight::Adaptive { max_height: 240.0 };
    config.position = overstory_anchor::CompassPosition::BottomRight;

    let mut popover = Popover::new(config, TextHost::default()).unwrap();

    let items: Vec<String> = [
        "Reply",
        "Reply All",
        "Forward as Attachment",
        "Mark as Read and Archive the Conversation",
        "Move to Folder…",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    popover.set_items(items.clone());
    println!("resolved: {:?}", popover.resolved_size());

    // An identical update is a silent no-op: the probe stays untouched.
    popover.set_items(items);

    let target = popover.show(&Toolbar).unwrap();
    println!("shown at {target:?}");
    popover.dismiss();
}
