// SPDX-License-Identifier: MPL-2.0
//! Viewer component: the displayed image and the input that acts on it.
//!
//! Raw window events are routed here by the application subscription. Pan and
//! zoom are handled locally; Left/Right are turned into navigation effects for
//! the application, which owns the directory index.

use super::surface::Surface;
use crate::config::BackgroundTheme;
use crate::media::ImageData;
use crate::ui::state::{DragState, ViewportState, ZoomDirection, ZoomStep};
use iced::widget::{canvas, center, container, text, Stack};
use iced::{event, keyboard, mouse, window, Color, Element, Length, Point, Size};

/// Messages emitted by the viewer widgets and routed events.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the application should perform after a viewer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    NavigateNext,
    NavigatePrevious,
}

/// Complete viewer state.
#[derive(Debug, Clone)]
pub struct State {
    image: Option<ImageData>,
    error: Option<String>,
    viewport: ViewportState,
    drag: DragState,
    cursor_position: Option<Point>,
    zoom_step: ZoomStep,
    background: BackgroundTheme,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Size::ZERO, ZoomStep::default(), BackgroundTheme::default())
    }
}

impl State {
    #[must_use]
    pub fn new(window_size: Size, zoom_step: ZoomStep, background: BackgroundTheme) -> Self {
        Self {
            image: None,
            error: None,
            viewport: ViewportState::new(window_size),
            drag: DragState::default(),
            cursor_position: None,
            zoom_step,
            background,
        }
    }

    /// Replaces the displayed image, fitting it to the window with no pan.
    pub fn show_image(&mut self, image: ImageData) {
        self.viewport.fit(image.width, image.height);
        self.image = Some(image);
        self.error = None;
    }

    /// Replaces the displayed image with an error message.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.image = None;
        self.error = Some(message.into());
        self.viewport.reset_pan();
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Window(
                window::Event::Opened { size, .. } | window::Event::Resized(size),
            ) => {
                self.viewport.resize(size);
                Effect::None
            }
            event::Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
                Effect::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Effect::NavigateNext,
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Effect::NavigatePrevious,
                keyboard::Key::Named(keyboard::key::Named::Space) => {
                    self.viewport.reset_pan();
                    Effect::None
                }
                _ => Effect::None,
            },
            _ => Effect::None,
        }
    }

    fn handle_mouse_event(&mut self, event: mouse::Event) {
        match event {
            mouse::Event::WheelScrolled { delta } => self.handle_wheel_zoom(delta),
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if let Some(position) = self.cursor_position {
                    self.drag.start(position, self.viewport.pan);
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.drag.stop(),
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                if let Some(pan) = self.drag.offset_at(position) {
                    self.viewport.set_pan(pan);
                }
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.drag.stop();
            }
            _ => {}
        }
    }

    /// One wheel event is one notch, whatever its magnitude.
    fn handle_wheel_zoom(&mut self, delta: mouse::ScrollDelta) {
        if self.image.is_none() {
            return;
        }
        if let Some(direction) = ZoomDirection::from_wheel(scroll_steps(&delta)) {
            self.viewport.zoom(self.zoom_step, direction);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let surface = canvas::Canvas::new(Surface {
            image: self.image.as_ref().map(|image| &image.handle),
            viewport: &self.viewport,
            background: background_color(self.background),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        match &self.error {
            Some(message) => Stack::new()
                .push(surface)
                .push(center(
                    container(text(message.as_str()).color(foreground_color(self.background)))
                        .padding(16),
                ))
                .into(),
            None => surface.into(),
        }
    }
}

/// Normalizes mouse wheel units (lines vs. pixels) into notches.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

fn background_color(theme: BackgroundTheme) -> Color {
    match theme {
        BackgroundTheme::Dark => Color::from_rgb8(0x1e, 0x1e, 0x1e),
        BackgroundTheme::Light => Color::from_rgb8(0xf2, 0xf2, 0xf2),
    }
}

fn foreground_color(theme: BackgroundTheme) -> Color {
    match theme {
        BackgroundTheme::Dark => Color::from_rgb8(0xe6, 0xe6, 0xe6),
        BackgroundTheme::Light => Color::from_rgb8(0x20, 0x20, 0x20),
    }
}
