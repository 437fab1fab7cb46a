// SPDX-License-Identifier: MPL-2.0
//! Image viewer: state, input handling and the drawing surface.

pub mod component;
pub mod surface;
