// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configurable setting.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default zoom step per wheel notch, in percent.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 2.0;

/// Minimum allowed zoom step percentage.
pub const MIN_ZOOM_STEP_PERCENT: f32 = 0.5;

/// Maximum allowed zoom step percentage.
pub const MAX_ZOOM_STEP_PERCENT: f32 = 50.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 650.0;

/// Smallest window width the viewer accepts.
pub const MIN_WINDOW_WIDTH: f32 = 200.0;

/// Smallest window height the viewer accepts.
pub const MIN_WINDOW_HEIGHT: f32 = 150.0;
