// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state for the viewer, kept apart from the widget code so it can be
//! tested without a window.

pub mod drag;
pub mod viewport;
pub mod zoom;

pub use drag::DragState;
pub use viewport::ViewportState;
pub use zoom::{ZoomDirection, ZoomStep};
