// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macro for float comparison,
//! which properly handles floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::media::ImageData;

/// Builds an opaque black test image of the given size.
pub fn solid_image(width: u32, height: u32) -> ImageData {
    ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
}
