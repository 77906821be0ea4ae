// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover controller: owns the item list, keeps the resolved content
//! size current, and turns `show()` into placement plus host attachment.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use overstory_anchor::place;
use overstory_layout::{
    HeightMode, HeightPolicy, Layout, MeasureContent, accumulate, resolve_item_sizes,
};

use crate::config::PopoverConfig;
use crate::error::{ConfigError, ShowError};
use crate::host::{AnchorLookup, RowHost};

/// An anchored popover over a list of items.
///
/// `I` is the row item type; equality on the full item sequence drives the
/// no-op rule for updates. `H` is the rendering collaborator.
///
/// Lifecycle: configuration is fixed at [`new`](Self::new) (fail-fast), the
/// content size is recomputed on every non-empty, changed
/// [`set_items`](Self::set_items), and the target rectangle is recomputed on
/// every [`show`](Self::show) and never persisted.
#[derive(Debug)]
pub struct Popover<I, H> {
    config: PopoverConfig,
    layout: Layout,
    host: H,
    items: Vec<I>,
    resolved: Option<Size>,
    shown: bool,
}

impl<I, H> Popover<I, H>
where
    I: PartialEq,
    H: RowHost<I>,
{
    /// Create a popover, validating the configuration against the host.
    ///
    /// Fails before any UI exists when the layout's numbers are invalid or
    /// when an adaptive sizing mode is paired with a host that cannot
    /// measure (see [`RowHost::supports_measurement`]).
    pub fn new(config: PopoverConfig, host: H) -> Result<Self, ConfigError> {
        let layout = config.layout();
        layout.validate()?;
        if layout.item_size.needs_measurement() && !host.supports_measurement() {
            return Err(ConfigError::MeasurementUnsupported);
        }
        Ok(Self {
            config,
            layout,
            host,
            items: Vec::new(),
            resolved: None,
            shown: false,
        })
    }

    /// Replace the item list.
    ///
    /// A deliberate no-op when `items` is empty or equal to the current
    /// sequence: no measurement runs and nothing is pushed to the host, so an
    /// idempotent data source cannot cause flashing or wasted probes.
    /// Otherwise the content size is recomputed and forwarded through
    /// [`RowHost::apply_content_size`] (and [`RowHost::apply_row_height`] for
    /// a fixed row height).
    pub fn set_items(&mut self, items: Vec<I>) {
        if items.is_empty() || items == self.items {
            log::trace!("popover item update skipped (empty or unchanged)");
            return;
        }
        self.items = items;
        self.recompute();
    }

    /// Place and attach the popover relative to the anchor.
    ///
    /// Resolves the container and anchor rectangles through `lookup`, places
    /// the already-resolved content size per the configured compass position
    /// and offset, then attaches the backdrop (covering the full container)
    /// and the overlay. Returns the target rectangle.
    ///
    /// Fails without visible effect when the anchor has no resolvable
    /// container (logged, retry at will) or when no items have been set.
    pub fn show(&mut self, lookup: &impl AnchorLookup) -> Result<Rect, ShowError> {
        let Some(size) = self.resolved else {
            log::debug!("popover show skipped: no items have been set");
            return Err(ShowError::EmptyItems);
        };
        let Some(container) = lookup.container_bounds() else {
            log::warn!("popover show aborted: anchor has no resolvable container");
            return Err(ShowError::MissingContainer);
        };
        let Some(anchor) = lookup.anchor_rect() else {
            log::warn!("popover show aborted: anchor rect does not convert into the container");
            return Err(ShowError::MissingContainer);
        };
        let target = place(anchor, self.config.position, self.config.offset, size);
        log::debug!(
            "placing popover: anchor={anchor:?} compass={:?} offset={:?} target={target:?}",
            self.config.position,
            self.config.offset,
        );
        self.host.attach_backdrop(container, self.config.backdrop);
        self.host.attach_overlay(target);
        self.shown = true;
        Ok(target)
    }

    /// Remove the overlay and backdrop. Idempotent.
    pub fn dismiss(&mut self) {
        if self.shown {
            self.host.remove_overlay();
            self.shown = false;
        }
    }

    /// Whether the popover is currently attached.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// The current item list.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The content size from the last non-empty item update, if any.
    pub fn resolved_size(&self) -> Option<Size> {
        self.resolved
    }

    /// The rendering collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the rendering collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn recompute(&mut self) {
        let resolved = if self.layout.item_size.needs_measurement() {
            // One probe pass per recompute; the guard releases the host's
            // probe element even if a measure panics.
            let mut pass = ProbePass::begin(&mut self.host, &self.items);
            resolve_item_sizes(&self.layout, pass.items.len(), &mut pass)
        } else {
            resolve_item_sizes(&self.layout, self.items.len(), &mut NoProbe)
        };
        let size = accumulate(&self.layout, &resolved);
        self.resolved = Some(size);
        self.host.apply_content_size(size);
        if let HeightMode::Fixed(h) = self.layout.item_size.height {
            self.host.apply_row_height(h);
        }
    }
}

/// RAII scope for the host's shared probe element: acquired for the duration
/// of one accumulation pass, released on drop.
struct ProbePass<'a, I, H: RowHost<I>> {
    host: &'a mut H,
    items: &'a [I],
}

impl<'a, I, H: RowHost<I>> ProbePass<'a, I, H> {
    fn begin(host: &'a mut H, items: &'a [I]) -> Self {
        host.begin_probe_pass();
        Self { host, items }
    }
}

impl<I, H: RowHost<I>> MeasureContent for ProbePass<'_, I, H> {
    fn measure(&mut self, index: usize, width_constraint: f64, policy: HeightPolicy) -> Size {
        self.host.measure_row(&self.items[index], width_constraint, policy)
    }
}

impl<I, H: RowHost<I>> Drop for ProbePass<'_, I, H> {
    fn drop(&mut self) {
        self.host.end_probe_pass();
    }
}

/// Stand-in measurer for fully fixed sizing, where the resolver performs zero
/// probe calls and no probe element should be instantiated.
struct NoProbe;

impl MeasureContent for NoProbe {
    fn measure(&mut self, _index: usize, _width_constraint: f64, _policy: HeightPolicy) -> Size {
        debug_assert!(false, "fixed sizing never probes");
        Size::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::BackdropOptions;
    use alloc::string::String;
    use alloc::vec;
    use kurbo::{Insets, Vec2};
    use overstory_anchor::CompassPosition;
    use overstory_layout::{ItemSize, LayoutError, WidthMode};

    /// Everything a host observes, in order.
    #[derive(Debug, PartialEq)]
    enum Event {
        BeginPass,
        EndPass,
        ContentSize(Size),
        RowHeight(f64),
        Backdrop(Rect, BackdropOptions),
        Overlay(Rect),
        Removed,
    }

    /// Host that measures strings at 10 units per character, 20 tall, and
    /// records every call.
    #[derive(Debug, Default)]
    struct RecordingHost {
        events: Vec<Event>,
        measure_calls: usize,
        measurable: bool,
    }

    impl RecordingHost {
        fn measuring() -> Self {
            Self {
                measurable: true,
                ..Self::default()
            }
        }
    }

    impl RowHost<String> for RecordingHost {
        fn supports_measurement(&self) -> bool {
            self.measurable
        }

        fn begin_probe_pass(&mut self) {
            self.events.push(Event::BeginPass);
        }

        fn measure_row(&mut self, item: &String, width_constraint: f64, _policy: HeightPolicy) -> Size {
            self.measure_calls += 1;
            #[allow(clippy::cast_precision_loss, reason = "test strings are short")]
            let natural = item.len() as f64 * 10.0;
            Size::new(natural.min(width_constraint), 20.0)
        }

        fn end_probe_pass(&mut self) {
            self.events.push(Event::EndPass);
        }

        fn apply_content_size(&mut self, size: Size) {
            self.events.push(Event::ContentSize(size));
        }

        fn apply_row_height(&mut self, height: f64) {
            self.events.push(Event::RowHeight(height));
        }

        fn attach_overlay(&mut self, target: Rect) {
            self.events.push(Event::Overlay(target));
        }

        fn attach_backdrop(&mut self, bounds: Rect, options: BackdropOptions) {
            self.events.push(Event::Backdrop(bounds, options));
        }

        fn remove_overlay(&mut self) {
            self.events.push(Event::Removed);
        }
    }

    /// Lookup with optional container/anchor rects.
    struct FakeLookup {
        container: Option<Rect>,
        anchor: Option<Rect>,
    }

    impl FakeLookup {
        fn attached() -> Self {
            Self {
                container: Some(Rect::new(0.0, 0.0, 800.0, 600.0)),
                anchor: Some(Rect::new(100.0, 200.0, 150.0, 220.0)),
            }
        }

        fn detached() -> Self {
            Self {
                container: None,
                anchor: None,
            }
        }
    }

    impl AnchorLookup for FakeLookup {
        fn container_bounds(&self) -> Option<Rect> {
            self.container
        }

        fn anchor_rect(&self) -> Option<Rect> {
            self.anchor
        }
    }

    fn fixed_config() -> PopoverConfig {
        PopoverConfig::new(ItemSize::new(WidthMode::Fixed(100.0), HeightMode::Fixed(40.0)))
    }

    fn adaptive_config() -> PopoverConfig {
        PopoverConfig::new(ItemSize::new(
            WidthMode::Flexible { max_width: 200.0 },
            HeightMode::Adaptive,
        ))
    }

    fn rows(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn construction_rejects_adaptive_sizing_on_non_measuring_host() {
        let host = RecordingHost::default(); // cannot measure
        let err = Popover::new(adaptive_config(), host).unwrap_err();
        assert_eq!(err, ConfigError::MeasurementUnsupported);
    }

    #[test]
    fn construction_allows_fixed_sizing_on_non_measuring_host() {
        let host = RecordingHost::default();
        assert!(Popover::new(fixed_config(), host).is_ok());
    }

    #[test]
    fn construction_rejects_invalid_layout_numbers() {
        let mut cfg = fixed_config();
        cfg.item_spacing = -2.0;
        let err = Popover::new(cfg, RecordingHost::measuring()).unwrap_err();
        assert_eq!(err, ConfigError::Layout(LayoutError::NegativeSpacing(-2.0)));
    }

    #[test]
    fn set_items_resolves_size_and_pushes_it_to_the_host() {
        let mut cfg = adaptive_config();
        cfg.item_spacing = 4.0;
        cfg.content_inset = Insets::uniform(8.0);
        let mut popover = Popover::new(cfg, RecordingHost::measuring()).unwrap();

        popover.set_items(rows(&["Copy", "Paste", "Select All"]));

        // "Select All" (10 chars) wins the column: 100 wide + 16 insets.
        let expected = Size::new(100.0 + 16.0, 3.0 * 20.0 + 2.0 * 4.0 + 16.0);
        assert_eq!(popover.resolved_size(), Some(expected));
        assert_eq!(popover.host().measure_calls, 3);
        assert_eq!(
            popover.host().events,
            vec![
                Event::BeginPass,
                Event::EndPass,
                Event::ContentSize(expected),
            ],
        );
    }

    #[test]
    fn fixed_sizing_never_starts_a_probe_pass() {
        let mut popover = Popover::new(fixed_config(), RecordingHost::default()).unwrap();
        popover.set_items(rows(&["a", "b"]));
        assert_eq!(popover.host().measure_calls, 0);
        assert_eq!(
            popover.host().events,
            vec![
                Event::ContentSize(Size::new(100.0, 80.0)),
                Event::RowHeight(40.0),
            ],
            "no BeginPass/EndPass and the fixed row height is forwarded"
        );
    }

    #[test]
    fn empty_or_unchanged_items_are_a_no_op() {
        let mut popover = Popover::new(adaptive_config(), RecordingHost::measuring()).unwrap();

        popover.set_items(Vec::new());
        assert_eq!(popover.resolved_size(), None);
        assert_eq!(popover.host().measure_calls, 0);

        popover.set_items(rows(&["Cut", "Copy"]));
        let calls = popover.host().measure_calls;
        let size = popover.resolved_size();
        assert_eq!(calls, 2);

        // Identical sequence: no probes, no host pushes.
        popover.set_items(rows(&["Cut", "Copy"]));
        assert_eq!(popover.host().measure_calls, calls);
        assert_eq!(popover.resolved_size(), size);

        // Emptying afterwards is also a no-op.
        popover.set_items(Vec::new());
        assert_eq!(popover.host().measure_calls, calls);
        assert_eq!(popover.resolved_size(), size);
    }

    #[test]
    fn changed_items_recompute() {
        let mut popover = Popover::new(adaptive_config(), RecordingHost::measuring()).unwrap();
        popover.set_items(rows(&["Cut"]));
        popover.set_items(rows(&["Cut", "Paste Special"]));
        assert_eq!(popover.host().measure_calls, 1 + 2);
        assert_eq!(
            popover.resolved_size(),
            Some(Size::new(130.0, 40.0)),
            "widest row drives the column width"
        );
    }

    #[test]
    fn show_before_any_items_is_a_typed_no_op() {
        let mut popover = Popover::new(fixed_config(), RecordingHost::default()).unwrap();
        let err = popover.show(&FakeLookup::attached()).unwrap_err();
        assert_eq!(err, ShowError::EmptyItems);
        assert!(!popover.is_shown());
        assert!(popover.host().events.is_empty());
    }

    #[test]
    fn show_without_container_degrades_to_a_logged_no_op() {
        let mut popover = Popover::new(fixed_config(), RecordingHost::default()).unwrap();
        popover.set_items(rows(&["One"]));
        let before = popover.host().events.len();

        let err = popover.show(&FakeLookup::detached()).unwrap_err();
        assert_eq!(err, ShowError::MissingContainer);
        assert!(!popover.is_shown());
        assert_eq!(popover.host().events.len(), before, "nothing was attached");

        // A failed show may be retried once the anchor is attached.
        assert!(popover.show(&FakeLookup::attached()).is_ok());
    }

    #[test]
    fn show_attaches_backdrop_then_overlay_at_the_placed_rect() {
        let mut cfg = fixed_config();
        cfg.position = CompassPosition::BottomCenter;
        let mut popover = Popover::new(cfg, RecordingHost::default()).unwrap();
        popover.set_items(rows(&["One", "Two"]));

        let target = popover.show(&FakeLookup::attached()).unwrap();
        // Size 100x80 centered under the 50-wide anchor at (100, 200)-(150, 220).
        assert_eq!(target, Rect::new(75.0, 220.0, 175.0, 300.0));
        assert!(popover.is_shown());

        let events = &popover.host().events;
        assert_eq!(
            events[events.len() - 2..],
            [
                Event::Backdrop(
                    Rect::new(0.0, 0.0, 800.0, 600.0),
                    BackdropOptions::DISMISS_ON_OUTSIDE_TAP,
                ),
                Event::Overlay(Rect::new(75.0, 220.0, 175.0, 300.0)),
            ],
        );
    }

    #[test]
    fn show_applies_the_configured_offset() {
        let mut cfg = fixed_config();
        cfg.offset = Vec2::new(6.0, -3.0);
        let mut popover = Popover::new(cfg, RecordingHost::default()).unwrap();
        popover.set_items(rows(&["One"]));

        let target = popover.show(&FakeLookup::attached()).unwrap();
        let base = Rect::new(100.0, 220.0, 200.0, 260.0);
        assert_eq!(target.origin(), base.origin() + Vec2::new(6.0, -3.0));
    }

    #[test]
    fn repeated_show_recomputes_the_same_ephemeral_rect() {
        let mut popover = Popover::new(fixed_config(), RecordingHost::default()).unwrap();
        popover.set_items(rows(&["One"]));
        let a = popover.show(&FakeLookup::attached()).unwrap();
        let b = popover.show(&FakeLookup::attached()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dismiss_removes_the_overlay_once() {
        let mut popover = Popover::new(fixed_config(), RecordingHost::default()).unwrap();
        popover.set_items(rows(&["One"]));
        popover.show(&FakeLookup::attached()).unwrap();

        popover.dismiss();
        assert!(!popover.is_shown());
        assert_eq!(popover.host().events.last(), Some(&Event::Removed));

        let count = popover.host().events.len();
        popover.dismiss();
        assert_eq!(popover.host().events.len(), count, "idempotent");
    }
}
