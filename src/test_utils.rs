// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and process-wide state.
//!
//! Re-exports the `approx` crate's assertion macros, which handle
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::sync::Mutex;

/// Serializes tests that touch the process environment.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());
