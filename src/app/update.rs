// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::viewer::component;
use iced::Task;
use std::path::PathBuf;

/// Handles one application message.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(viewer_message) => handle_viewer_message(app, viewer_message),
        Message::ImageLoaded {
            generation,
            path,
            result,
        } => {
            handle_image_loaded(app, generation, path, result);
            Task::none()
        }
        Message::Directory(event) => {
            app.navigator.apply(&event);
            Task::none()
        }
    }
}

fn handle_viewer_message(app: &mut App, message: component::Message) -> Task<Message> {
    let next = match app.viewer.update(message) {
        component::Effect::None => None,
        component::Effect::NavigateNext => app.navigator.navigate_next(),
        component::Effect::NavigatePrevious => app.navigator.navigate_previous(),
    };

    match next {
        Some(path) => app.load(path),
        None => Task::none(),
    }
}

fn handle_image_loaded(
    app: &mut App,
    generation: u64,
    path: PathBuf,
    result: Result<ImageData, Error>,
) {
    if generation != app.load_generation {
        log::debug!("Dropping superseded load of {}", path.display());
        return;
    }

    match result {
        Ok(image) => {
            log::info!(
                "Showing {} ({}x{})",
                path.display(),
                image.width,
                image.height
            );
            app.viewer.show_image(image);

            if !app.navigator.is_attached() {
                if let Err(err) = app.navigator.attach(&path) {
                    log::warn!("Directory navigation unavailable: {err}");
                }
            }
        }
        Err(err) => {
            log::warn!("Cannot display {}: {err}", path.display());
            app.viewer.show_error(err.to_string());
        }
    }

    app.displayed_path = Some(path);
}

impl App {
    /// Starts decoding `path` on the blocking pool.
    pub(super) fn load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_generation = self.load_generation.wrapping_add(1);
        let generation = self.load_generation;

        Task::perform(
            async move {
                let load_path = path.clone();
                let result = tokio::task::spawn_blocking(move || media::load_image(&load_path))
                    .await
                    .map_err(|e| Error::Io(e.to_string()))
                    .and_then(|result| result);
                (path, result)
            },
            move |(path, result)| Message::ImageLoaded {
                generation,
                path,
                result,
            },
        )
    }
}
