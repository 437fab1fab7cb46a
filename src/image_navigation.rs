// SPDX-License-Identifier: MPL-2.0
//! Image navigation state shared by the window.
//!
//! The `ImageNavigator` is constructed unattached and bound to a directory
//! exactly once, after the first image was displayed successfully. From then
//! on it owns the directory index and applies the watcher's change events to
//! it. Every method is called from the application's update loop, which is
//! what serializes user navigation against filesystem changes.

use crate::directory_index::DirectoryIndex;
use crate::directory_watcher::DirectoryEvent;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default)]
enum NavigatorState {
    #[default]
    Unattached,
    Attached {
        directory: PathBuf,
        index: DirectoryIndex,
    },
}

/// Navigation through the images of one directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageNavigator {
    state: NavigatorState,
}

impl ImageNavigator {
    /// Creates a new, unattached navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the navigator to the directory containing `current_file`.
    ///
    /// Scans the directory and places the cursor on `current_file`. May only
    /// succeed once per navigator.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyAttached`] on any call after a successful one
    /// - errors of [`DirectoryIndex::scan`]; the navigator stays unattached
    pub fn attach(&mut self, current_file: &Path) -> Result<()> {
        if self.is_attached() {
            return Err(Error::AlreadyAttached);
        }

        let directory = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?
            .to_path_buf();
        let index = DirectoryIndex::scan(current_file)?;

        log::info!(
            "Tracking {} image(s) in {}",
            index.len(),
            directory.display()
        );
        self.state = NavigatorState::Attached { directory, index };
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, NavigatorState::Attached { .. })
    }

    /// Returns the watched directory once attached.
    pub fn directory(&self) -> Option<&Path> {
        match &self.state {
            NavigatorState::Attached { directory, .. } => Some(directory),
            NavigatorState::Unattached => None,
        }
    }

    /// Returns the directory index once attached.
    pub fn index(&self) -> Option<&DirectoryIndex> {
        match &self.state {
            NavigatorState::Attached { index, .. } => Some(index),
            NavigatorState::Unattached => None,
        }
    }

    fn index_mut(&mut self) -> Option<&mut DirectoryIndex> {
        match &mut self.state {
            NavigatorState::Attached { index, .. } => Some(index),
            NavigatorState::Unattached => None,
        }
    }

    /// Navigates to the next image and returns its path.
    ///
    /// Returns `None` if unattached or if there are no images in the list.
    /// Wraps around to the first image when at the last image.
    pub fn navigate_next(&mut self) -> Option<PathBuf> {
        self.index_mut()?.advance().map(Path::to_path_buf)
    }

    /// Navigates to the previous image and returns its path.
    ///
    /// Returns `None` if unattached or if there are no images in the list.
    /// Wraps around to the last image when at the first image.
    pub fn navigate_previous(&mut self) -> Option<PathBuf> {
        self.index_mut()?.retreat().map(Path::to_path_buf)
    }

    /// Returns the path under the cursor.
    pub fn current_image_path(&self) -> Option<&Path> {
        self.index()?.current()
    }

    /// Returns the cursor position.
    pub fn current_index(&self) -> Option<usize> {
        self.index()?.cursor()
    }

    /// Returns the total number of images tracked.
    pub fn len(&self) -> usize {
        self.index().map_or(0, DirectoryIndex::len)
    }

    /// Checks if no images are tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies a change reported by the directory watcher.
    ///
    /// Returns `true` if the index changed. Events are ignored while
    /// unattached.
    pub fn apply(&mut self, event: &DirectoryEvent) -> bool {
        let Some(index) = self.index_mut() else {
            return false;
        };

        let changed = match event {
            DirectoryEvent::Created(path) => index.insert(path),
            DirectoryEvent::Removed(path) => index.remove(path),
            DirectoryEvent::Renamed { from, to } => index.rename(from, to),
        };

        if changed {
            log::debug!(
                "Applied {:?}; cursor {:?} of {}",
                event,
                index.cursor(),
                index.len()
            );
        }
        changed
    }
}
