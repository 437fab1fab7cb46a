// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::directory_watcher::DirectoryEvent;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::viewer::component;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// A background load finished. `generation` identifies the request so
    /// results of superseded loads can be dropped.
    ImageLoaded {
        generation: u64,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// The watched directory changed on disk.
    Directory(DirectoryEvent),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Validated, absolute path of the image to open.
    pub file_path: PathBuf,
}
