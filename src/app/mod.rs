// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the
//! directory being browsed.
//!
//! The `App` owns the viewer, the navigator and the load bookkeeping. Every
//! mutation happens in `App::update`: key presses, finished loads and
//! directory changes all arrive as messages and are handled one at a time.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, BackgroundTheme, Config, WindowConfig};
use crate::image_navigation::ImageNavigator;
use crate::ui::state::ZoomStep;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const APP_TITLE: &str = "Iced Glance";

/// Root Iced application state.
pub struct App {
    viewer: component::State,
    navigator: ImageNavigator,
    /// Path of the image (or failed load) currently shown.
    displayed_path: Option<PathBuf>,
    /// Incremented for every load request; only the latest one is shown.
    load_generation: u64,
    background: BackgroundTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("displayed_path", &self.displayed_path)
            .field("viewer_has_image", &self.viewer.image().is_some())
            .field("attached", &self.navigator.is_attached())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &WindowConfig) -> window::Settings {
    window::Settings {
        size: config.size(),
        min_size: Some(WindowConfig::min_size()),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        log::warn!("{warning}");
    }
    let settings = window_settings(&config.window);

    // iced 0.14 requires Fn for boot; flags are consumed once.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn with_config(config: &Config) -> Self {
        Self {
            viewer: component::State::new(
                config.window.size(),
                ZoomStep::new(config.display.zoom_step_percent()),
                config.display.background(),
            ),
            navigator: ImageNavigator::new(),
            displayed_path: None,
            load_generation: 0,
            background: config.display.background(),
        }
    }

    /// Initializes application state and kicks off loading of the initial
    /// image.
    fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let mut app = Self::with_config(config);
        let task = app.load(flags.file_path);
        (app, task)
    }

    fn title(&self) -> String {
        self.displayed_path
            .as_deref()
            .and_then(|path| path.file_name())
            .map_or_else(
                || APP_TITLE.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    fn theme(&self) -> Theme {
        match self.background {
            BackgroundTheme::Dark => Theme::Dark,
            BackgroundTheme::Light => Theme::Light,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.viewer)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_directory_subscription(self.navigator.directory()),
        ])
    }
}

#[cfg(test)]
mod tests;
