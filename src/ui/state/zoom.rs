// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Wheel zoom is multiplicative: each notch scales the displayed width and
//! height by `1 + step` (zoom in) or `1 - step` (zoom out), so repeated
//! notches compound.

pub use crate::config::{DEFAULT_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT, MIN_ZOOM_STEP_PERCENT};
use iced::Size;

/// Zoom step percentage, guaranteed to be within valid range (0.5%–50%).
///
/// This type ensures that zoom step values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scale factor for one notch in `direction`.
    #[must_use]
    pub fn factor(self, direction: ZoomDirection) -> f32 {
        let step = self.0 / 100.0;
        match direction {
            ZoomDirection::In => 1.0 + step,
            ZoomDirection::Out => 1.0 - step,
        }
    }

    /// Scales `size` by one notch.
    #[must_use]
    pub fn apply(self, size: Size, direction: ZoomDirection) -> Size {
        let factor = self.factor(direction);
        Size::new(size.width * factor, size.height * factor)
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP_PERCENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction of a wheel movement; `None` for a purely horizontal scroll.
    #[must_use]
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}
