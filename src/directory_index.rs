// SPDX-License-Identifier: MPL-2.0
//! Sorted list of the image files in one directory, plus a cursor.
//!
//! The index is built once from a directory scan and then kept up to date
//! incrementally from filesystem events. Every mutation preserves two rules:
//!
//! - the list stays sorted, deduplicated and limited to known image formats;
//! - the cursor stays inside the list and keeps referring to the same file
//!   it referred to before the mutation (unless that file itself went away).
//!
//! Mutations are idempotent: removing an untracked path or inserting a path
//! that is already present leaves the index untouched. Some platforms report
//! a rename both as a separate from/to pair and as one combined event, so the
//! same change can arrive more than once.

use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// Image files of one directory with navigation capabilities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryIndex {
    image_files: Vec<PathBuf>,
    cursor: Option<usize>,
}

impl DirectoryIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from already known paths; unknown formats are dropped,
    /// the rest is sorted and deduplicated. The cursor starts on the first
    /// entry.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut image_files: Vec<PathBuf> = paths
            .into_iter()
            .filter(|path| media::is_known_format(path))
            .collect();
        image_files.sort();
        image_files.dedup();

        let cursor = if image_files.is_empty() { None } else { Some(0) };

        Self {
            image_files,
            cursor,
        }
    }

    /// Scans the directory containing `current_file` (non-recursively) and
    /// places the cursor on `current_file`.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the path has no parent or the directory cannot be read
    /// - [`Error::NotInDirectory`] if `current_file` is not among the scanned images
    pub fn scan(current_file: &Path) -> Result<Self> {
        let parent = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(parent)? {
            let path = entry?.path();
            if path.is_file() {
                entries.push(path);
            }
        }

        let mut index = Self::from_paths(entries);
        let position = index
            .position(current_file)
            .ok_or_else(|| Error::NotInDirectory(current_file.to_path_buf()))?;
        index.cursor = Some(position);

        Ok(index)
    }

    /// Returns the path under the cursor.
    pub fn current(&self) -> Option<&Path> {
        self.cursor
            .and_then(|idx| self.image_files.get(idx))
            .map(PathBuf::as_path)
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(PathBuf::as_path)
    }

    /// Returns all tracked paths in order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.image_files
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Checks whether `path` is tracked.
    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    fn position(&self, path: &Path) -> Option<usize> {
        self.image_files
            .binary_search_by(|entry| entry.as_path().cmp(path))
            .ok()
    }

    /// Moves the cursor one entry forward, wrapping to the first entry, and
    /// returns the new current path. `None` if the index is empty.
    pub fn advance(&mut self) -> Option<&Path> {
        let len = self.image_files.len();
        let cursor = self.cursor?;
        self.cursor = Some((cursor + 1) % len);
        self.current()
    }

    /// Moves the cursor one entry back, wrapping to the last entry, and
    /// returns the new current path. `None` if the index is empty.
    pub fn retreat(&mut self) -> Option<&Path> {
        let len = self.image_files.len();
        let cursor = self.cursor?;
        self.cursor = Some((cursor + len - 1) % len);
        self.current()
    }

    /// Starts tracking a newly created file.
    ///
    /// Returns `true` if the index changed.
    pub fn insert(&mut self, path: &Path) -> bool {
        if !media::is_known_format(path) {
            return false;
        }
        let Err(index) = self
            .image_files
            .binary_search_by(|entry| entry.as_path().cmp(path))
        else {
            return false;
        };

        self.image_files.insert(index, path.to_path_buf());
        self.cursor = Some(match self.cursor {
            Some(cursor) if index <= cursor => cursor + 1,
            Some(cursor) => cursor,
            None => 0,
        });
        true
    }

    /// Stops tracking a deleted file.
    ///
    /// When the removed entry preceded the cursor, the cursor moves back so
    /// it stays on the same file. When the removed entry was the current one,
    /// the cursor also moves back (stopping at the first entry). The caller
    /// decides whether to reload anything.
    ///
    /// Returns `true` if the index changed.
    pub fn remove(&mut self, path: &Path) -> bool {
        if !media::is_known_format(path) {
            return false;
        }
        let Some(index) = self.position(path) else {
            return false;
        };

        self.remove_at(index);
        true
    }

    fn remove_at(&mut self, index: usize) {
        self.image_files.remove(index);

        let len = self.image_files.len();
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(cursor) if index <= cursor => Some(cursor.saturating_sub(1).min(len - 1)),
            Some(cursor) => Some(cursor.min(len - 1)),
            None => Some(0),
        };
    }

    /// Applies a rename of `from` to `to`.
    ///
    /// - tracked to known format: the entry moves to its new sorted position
    ///   and the cursor keeps pointing at the same file;
    /// - tracked to unknown format: handled as a removal of `from`;
    /// - untracked to known format: handled as an insertion of `to`;
    /// - anything else is ignored.
    ///
    /// Returns `true` if the index changed.
    pub fn rename(&mut self, from: &Path, to: &Path) -> bool {
        let old_index = if media::is_known_format(from) {
            self.position(from)
        } else {
            None
        };

        let Some(old_index) = old_index else {
            return self.insert(to);
        };

        if !media::is_known_format(to) {
            self.remove_at(old_index);
            return true;
        }

        if self.contains(to) {
            // Target already tracked (replaced an existing file): the source
            // simply disappears from the listing.
            self.remove_at(old_index);
            return true;
        }

        let cursor = self.cursor.unwrap_or(old_index);
        self.image_files.remove(old_index);
        let new_index = match self
            .image_files
            .binary_search_by(|entry| entry.as_path().cmp(to))
        {
            Ok(index) | Err(index) => index,
        };
        self.image_files.insert(new_index, to.to_path_buf());

        let cursor = if old_index == cursor {
            new_index
        } else if old_index < cursor && new_index >= cursor {
            cursor - 1
        } else if old_index > cursor && new_index <= cursor {
            cursor + 1
        } else {
            cursor
        };
        self.cursor = Some(cursor);
        true
    }
}
