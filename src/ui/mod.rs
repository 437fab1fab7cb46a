// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod state;
pub mod viewer;
