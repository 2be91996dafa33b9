// SPDX-License-Identifier: MPL-2.0
//! Native trackpad gestures.
//!
//! iced does not surface trackpad pinch/rotate events, so hosts that receive
//! them from the platform forward them as [`NativeGesture`] values.

use crate::config::{MAX_GESTURE_SCALE_FACTOR, MIN_GESTURE_SCALE_FACTOR};

/// A trackpad-originated gesture, distinct from raw touch points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeGesture {
    /// Pinch: delta added to the scale factor.
    Zoom(f32),
    /// Two-finger rotation: delta in degrees added to the rotation angle.
    Rotate(f32),
    /// Smart zoom (two-finger double tap): animated scale delta.
    SmartZoom(f32),
}

/// Applies a pinch delta to `current`, keeping the result in the gesture range.
#[must_use]
pub fn pinch_scale(current: f32, delta: f32) -> f32 {
    (current + delta).clamp(MIN_GESTURE_SCALE_FACTOR, MAX_GESTURE_SCALE_FACTOR)
}
