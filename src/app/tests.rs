// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::directory_watcher::DirectoryEvent;
use crate::error::Error;
use crate::media::ImageData;
use iced::{event, keyboard};
use std::path::Path;
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image_rs::RgbaImage::from_pixel(4, 2, image_rs::Rgba([10, 20, 30, 255]))
        .save_with_format(&path, image_rs::ImageFormat::Png)
        .expect("failed to write png");
    path
}

fn sample_image() -> ImageData {
    ImageData::from_rgba(4, 2, vec![0; 4 * 2 * 4])
}

fn loaded(app: &App, path: &Path, result: Result<ImageData, Error>) -> Message {
    Message::ImageLoaded {
        generation: app.load_generation,
        path: path.to_path_buf(),
        result,
    }
}

fn arrow(named: keyboard::key::Named) -> Message {
    Message::Viewer(component::Message::RawEvent {
        window: window::Id::unique(),
        event: event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }),
    })
}

/// Boots an app on `path` and delivers its initial load.
fn booted(path: &Path) -> App {
    let (mut app, _task) = App::new(
        Flags {
            file_path: path.to_path_buf(),
        },
        &Config::default(),
    );
    let message = loaded(&app, path, Ok(sample_image()));
    let _ = app.update(message);
    app
}

#[test]
fn title_defaults_to_app_name() {
    let app = App::default();
    assert_eq!(app.title(), APP_TITLE);
}

#[test]
fn first_successful_load_attaches_navigator() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let first = write_png(temp_dir.path(), "a.png");
    write_png(temp_dir.path(), "b.png");

    let app = booted(&first);

    assert!(app.navigator.is_attached());
    assert_eq!(app.navigator.len(), 2);
    assert_eq!(app.navigator.directory(), Some(temp_dir.path()));
    assert_eq!(app.title(), "a.png");
    assert!(app.viewer.image().is_some());
}

#[test]
fn failed_initial_load_does_not_attach() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("broken.png");

    let (mut app, _task) = App::new(
        Flags {
            file_path: path.clone(),
        },
        &Config::default(),
    );
    let message = loaded(&app, &path, Err(Error::Decode("bad header".into())));
    let _ = app.update(message);

    assert!(!app.navigator.is_attached());
    assert_eq!(app.viewer.error(), Some("Decode Error: bad header"));
    assert_eq!(app.title(), "broken.png");
}

#[test]
fn right_arrow_requests_next_image() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let first = write_png(temp_dir.path(), "a.png");
    let second = write_png(temp_dir.path(), "b.png");
    let mut app = booted(&first);
    let generation = app.load_generation;

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));

    assert_eq!(app.load_generation, generation + 1);
    assert_eq!(app.navigator.current_image_path(), Some(second.as_path()));
    // The displayed image only changes once the load completes.
    assert_eq!(app.title(), "a.png");

    let message = loaded(&app, &second, Ok(sample_image()));
    let _ = app.update(message);
    assert_eq!(app.title(), "b.png");
}

#[test]
fn left_arrow_wraps_to_last_image() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let first = write_png(temp_dir.path(), "a.png");
    write_png(temp_dir.path(), "b.png");
    let last = write_png(temp_dir.path(), "c.png");
    let mut app = booted(&first);

    let _ = app.update(arrow(keyboard::key::Named::ArrowLeft));

    assert_eq!(app.navigator.current_image_path(), Some(last.as_path()));
}

#[test]
fn superseded_load_is_dropped() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let first = write_png(temp_dir.path(), "a.png");
    let second = write_png(temp_dir.path(), "b.png");
    let third = write_png(temp_dir.path(), "c.png");
    let mut app = booted(&first);

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));
    let stale_generation = app.load_generation;
    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));

    let _ = app.update(Message::ImageLoaded {
        generation: stale_generation,
        path: second,
        result: Ok(sample_image()),
    });
    assert_eq!(app.title(), "a.png");

    let message = loaded(&app, &third, Ok(sample_image()));
    let _ = app.update(message);
    assert_eq!(app.title(), "c.png");
}

#[test]
fn navigation_load_error_keeps_navigation_working() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let first = write_png(temp_dir.path(), "a.png");
    let second = write_png(temp_dir.path(), "b.png");
    let mut app = booted(&first);

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));
    let message = loaded(
        &app,
        &second,
        Err(Error::FileNotFound(second.clone())),
    );
    let _ = app.update(message);

    assert!(app.viewer.error().is_some());

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));
    assert_eq!(app.navigator.current_image_path(), Some(first.as_path()));
}

#[test]
fn directory_events_update_navigation() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let current = write_png(temp_dir.path(), "m.png");
    let mut app = booted(&current);

    let created = temp_dir.path().join("a.png");
    let _ = app.update(Message::Directory(DirectoryEvent::Created(created.clone())));

    assert_eq!(app.navigator.len(), 2);
    assert_eq!(app.navigator.current_image_path(), Some(current.as_path()));

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));
    assert_eq!(app.navigator.current_image_path(), Some(created.as_path()));
}

#[test]
fn navigation_before_attach_is_noop() {
    let mut app = App::default();
    let generation = app.load_generation;

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));

    assert_eq!(app.load_generation, generation);
}
