// SPDX-License-Identifier: MPL-2.0
//! Image file recognition and loading.
//!
//! The viewer only understands a small, fixed set of raster formats. The same
//! extension check is used when validating a file for display, when scanning
//! its directory and when filtering watcher events, so a file is either
//! visible everywhere or nowhere.

pub mod image;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{fit_size, load_image, resolve_initial_file, validate, ImageData};

/// Supported file extensions
pub mod extensions {
    /// Known image extensions, lowercase and without the leading dot.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "bmp", "png"];
}

/// Returns the extension of `path` as written on disk, if it is valid UTF-8.
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Checks whether `path` carries one of the known image extensions.
///
/// Matching ignores ASCII case, so `photo.JPG` and `photo.jpg` are treated
/// the same.
#[must_use]
pub fn is_known_format(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_extensions() {
        assert!(is_known_format(Path::new("/pics/a.jpg")));
        assert!(is_known_format(Path::new("/pics/a.jpeg")));
        assert!(is_known_format(Path::new("/pics/a.bmp")));
        assert!(is_known_format(Path::new("/pics/a.png")));
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_known_format(Path::new("/pics/IMAGE.PNG")));
        assert!(is_known_format(Path::new("/pics/holiday.JpEg")));
    }

    #[test]
    fn rejects_other_formats() {
        assert!(!is_known_format(Path::new("/pics/a.gif")));
        assert!(!is_known_format(Path::new("/pics/a.png.txt")));
        assert!(!is_known_format(Path::new("/pics/notes")));
        assert!(!is_known_format(Path::new("/pics/.png")));
        assert!(!is_known_format(Path::new("/pics/trailing.")));
    }
}
