// SPDX-License-Identifier: MPL-2.0
//! `iced_glance` is a minimal image viewer built with the Iced GUI framework.
//!
//! It opens one image, lets the user pan and zoom it, and steps through the
//! other images of the same directory. The directory is watched while the
//! viewer is open so that added, removed and renamed files show up in the
//! navigation order immediately.

#![doc(html_root_url = "https://docs.rs/iced_glance/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_index;
pub mod directory_watcher;
pub mod error;
pub mod image_navigation;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
