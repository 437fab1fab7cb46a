// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the displayed image at its zoomed size and pan
//! offset. Parts of the image outside the window are clipped.

use crate::ui::state::ViewportState;
use iced::widget::{canvas, image};
use iced::{mouse, Color, Rectangle, Renderer, Theme};

/// Image surface filling the window.
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    pub image: Option<&'a image::Handle>,
    pub viewport: &'a ViewportState,
    pub background: Color,
}

impl<Message> canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), self.background);

        if let Some(handle) = self.image {
            let target = self.viewport.image_rect(bounds.size());
            if target.width > 0.0 && target.height > 0.0 {
                frame.draw_image(target, canvas::Image::new(handle.clone()));
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.image.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
