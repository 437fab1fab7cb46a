// SPDX-License-Identifier: MPL-2.0
//! Image validation, decoding and fit-to-window sizing.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded image ready to hand to the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Height over width; `1.0` for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }
}

/// Checks that `path` names an existing file with a known image extension.
///
/// # Errors
///
/// - [`Error::FileNotFound`] if nothing exists at `path`
/// - [`Error::UnsupportedFormat`] if the extension is not a known image format
pub fn validate(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    if !super::is_known_format(path) {
        let ext = super::extension_of(path).unwrap_or_default();
        return Err(Error::UnsupportedFormat(ext.to_string()));
    }

    Ok(())
}

/// Validates the file given on the command line and makes its path absolute.
///
/// Symbolic links are kept as given: the browsed directory is the one the
/// link lives in, not the one its target lives in.
///
/// # Errors
///
/// Errors of [`validate`], or [`Error::Io`] if the current directory is
/// needed and unavailable.
pub fn resolve_initial_file(path: &Path) -> Result<PathBuf> {
    validate(path)?;
    Ok(std::path::absolute(path)?)
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`Error::FileNotFound`])
/// - The extension is not a known format ([`Error::UnsupportedFormat`])
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a decodable image ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    validate(path)?;

    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Computes the on-screen size of an image fitted to `window`.
///
/// Taller-than-wide images take the full window height; wider-than-tall and
/// square images take the full window width. The aspect ratio is preserved
/// in both cases.
#[must_use]
pub fn fit_size(image_width: u32, image_height: u32, window: Size) -> Size {
    if image_width == 0 || image_height == 0 {
        return Size::ZERO;
    }

    let ratio = image_height as f32 / image_width as f32;

    if image_height > image_width {
        let height = window.height;
        Size::new(height / ratio, height)
    } else {
        let width = window.width;
        Size::new(width, width * ratio)
    }
}
