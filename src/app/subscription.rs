// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window, mouse and keyboard events are routed to the viewer as raw
//! events. Once the navigator is attached, the directory watcher subscription
//! feeds filesystem changes into the same update loop.

use super::Message;
use crate::directory_watcher;
use crate::ui::viewer::component;
use iced::{event, keyboard, mouse, window, Subscription};
use std::path::Path;

/// Routes the events the viewer reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let routed = match &event {
            event::Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) => true,
            event::Event::Mouse(
                mouse::Event::WheelScrolled { .. }
                | mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonPressed(mouse::Button::Left)
                | mouse::Event::ButtonReleased(mouse::Button::Left),
            ) => true,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                matches!(status, event::Status::Ignored)
            }
            _ => false,
        };

        routed.then(|| {
            Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event,
            })
        })
    })
}

/// Watches `directory` for changes; idle until a directory is known.
pub fn create_directory_subscription(directory: Option<&Path>) -> Subscription<Message> {
    match directory {
        Some(directory) => directory_watcher::watch(directory.to_path_buf()).map(Message::Directory),
        None => Subscription::none(),
    }
}
