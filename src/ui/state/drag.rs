// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the image. The image
//! follows the cursor with a fixed anchor recorded when the button went down:
//! `pan = anchor + cursor`, where `anchor = pan_at_press - cursor_at_press`.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pan offset minus cursor position at press time
    pub anchor: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, cursor: Point, pan: Vector) {
        self.is_dragging = true;
        self.anchor = Some(Vector::new(pan.x - cursor.x, pan.y - cursor.y));
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
    }

    /// Calculates the pan offset for the current cursor position
    #[must_use]
    pub fn offset_at(&self, cursor: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let anchor = self.anchor?;
        Some(Vector::new(anchor.x + cursor.x, anchor.y + cursor.y))
    }
}
