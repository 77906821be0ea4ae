// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy: fatal configuration errors and recoverable show failures.

use overstory_layout::LayoutError;

/// Fatal configuration problems, surfaced by `Popover::new` before any UI is
/// shown. There is no silent degradation path: a mis-configured popover would
/// otherwise render zero-sized with no diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The layout's numeric preconditions do not hold.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The layout needs content measurement but the host cannot measure.
    #[error("adaptive sizing requires a host that can measure row content")]
    MeasurementUnsupported,
}

/// Recoverable failures of `Popover::show`. The popover is not attached and
/// nothing crashes; the caller may retry at will.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShowError {
    /// The anchor has no resolvable container (or its rect cannot be
    /// converted into container coordinates).
    #[error("anchor has no resolvable container")]
    MissingContainer,
    /// No non-empty item update has happened yet, so there is no content
    /// size to place.
    #[error("popover has no items to show")]
    EmptyItems,
}
