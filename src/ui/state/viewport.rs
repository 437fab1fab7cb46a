// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the window size and the on-screen geometry of the displayed image:
//! its current size (fit size modified by zoom) and the pan offset from the
//! centered position.

use super::zoom::{ZoomDirection, ZoomStep};
use crate::media::fit_size;
use iced::{Point, Rectangle, Size, Vector};

/// Manages viewport state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Current window size
    pub window: Size,

    /// Current on-screen size of the image
    pub image_size: Size,

    /// Offset of the image from the centered position
    pub pan: Vector,
}

impl ViewportState {
    #[must_use]
    pub fn new(window: Size) -> Self {
        Self {
            window,
            image_size: Size::ZERO,
            pan: Vector::ZERO,
        }
    }

    /// Fits a freshly loaded image to the window and recenters it.
    pub fn fit(&mut self, image_width: u32, image_height: u32) {
        self.image_size = fit_size(image_width, image_height, self.window);
        self.pan = Vector::ZERO;
    }

    /// Records a new window size. The displayed image keeps its size.
    pub fn resize(&mut self, window: Size) {
        self.window = window;
    }

    /// Moves the image back to the centered position; zoom is kept.
    pub fn reset_pan(&mut self) {
        self.pan = Vector::ZERO;
    }

    pub fn set_pan(&mut self, pan: Vector) {
        self.pan = pan;
    }

    /// Scales the displayed image by one wheel notch.
    pub fn zoom(&mut self, step: ZoomStep, direction: ZoomDirection) {
        self.image_size = step.apply(self.image_size, direction);
    }

    /// Rectangle the image occupies inside `bounds`: centered, then panned.
    #[must_use]
    pub fn image_rect(&self, bounds: Size) -> Rectangle {
        let origin = Point::new(
            (bounds.width - self.image_size.width) / 2.0 + self.pan.x,
            (bounds.height - self.image_size.height) / 2.0 + self.pan.y,
        );
        Rectangle::new(origin, self.image_size)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fit_portrait_fills_window_height() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        viewport.fit(1000, 2000);

        assert_abs_diff_eq!(viewport.image_size.height, 600.0, epsilon = 1e-3);
        assert_abs_diff_eq!(viewport.image_size.width, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn fit_landscape_fills_window_width() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        viewport.fit(2000, 1000);

        assert_abs_diff_eq!(viewport.image_size.width, 800.0, epsilon = 1e-3);
        assert_abs_diff_eq!(viewport.image_size.height, 400.0, epsilon = 1e-3);
    }

    #[test]
    fn fit_resets_pan() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        viewport.set_pan(Vector::new(35.0, -12.0));
        viewport.fit(10, 10);

        assert_eq!(viewport.pan, Vector::ZERO);
    }

    #[test]
    fn reset_pan_keeps_zoom() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        viewport.fit(2000, 1000);
        viewport.zoom(ZoomStep::default(), ZoomDirection::In);
        viewport.set_pan(Vector::new(10.0, 10.0));

        viewport.reset_pan();

        assert_eq!(viewport.pan, Vector::ZERO);
        assert_abs_diff_eq!(viewport.image_size.width, 816.0, epsilon = 1e-3);
    }

    #[test]
    fn resize_does_not_refit() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        viewport.fit(2000, 1000);
        viewport.resize(Size::new(1600.0, 1200.0));

        assert_abs_diff_eq!(viewport.image_size.width, 800.0, epsilon = 1e-3);
        assert_eq!(viewport.window, Size::new(1600.0, 1200.0));
    }

    #[test]
    fn image_rect_is_centered_then_panned() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        viewport.fit(2000, 1000);

        let rect = viewport.image_rect(Size::new(800.0, 600.0));
        assert_abs_diff_eq!(rect.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.y, 100.0, epsilon = 1e-3);

        viewport.set_pan(Vector::new(25.0, -40.0));
        let rect = viewport.image_rect(Size::new(800.0, 600.0));
        assert_abs_diff_eq!(rect.x, 25.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.y, 60.0, epsilon = 1e-3);
    }
}
