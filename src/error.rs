// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested path does not exist on disk.
    FileNotFound(PathBuf),

    /// The file extension is outside the known format set.
    /// Holds the offending extension (empty when the file has none).
    UnsupportedFormat(String),

    /// The file exists but could not be decoded as an image.
    Decode(String),

    Io(String),

    /// A scanned directory listing did not contain the file it was scanned for.
    NotInDirectory(PathBuf),

    /// The navigator was already bound to a directory.
    AlreadyAttached,

    Config(String),

    /// The windowing subsystem refused to present the window.
    PresentationConflict(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::UnsupportedFormat(ext) if ext.is_empty() => {
                write!(f, "Unsupported format: file has no extension")
            }
            Error::UnsupportedFormat(ext) => write!(f, "Unsupported format: .{}", ext),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::NotInDirectory(path) => {
                write!(f, "{} is missing from its directory listing", path.display())
            }
            Error::AlreadyAttached => write!(f, "Navigator is already attached to a directory"),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::PresentationConflict(e) => write!(f, "Cannot present window: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::PresentationConflict(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
