// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: fit margin and gesture clamp bounds
//! - **Animation**: transition durations
//! - **Input**: wheel, keyboard pan and zoom steps

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale factor of a freshly created view (1:1).
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// Margin subtracted from the fitted scale so the image never touches the edges.
pub const FIT_MARGIN: f32 = 0.02;

/// Lowest scale a fit computation may produce on very small widgets.
pub const MIN_FIT_SCALE_FACTOR: f32 = 0.01;

/// Lower bound applied to the scale during native pinch gestures.
pub const MIN_GESTURE_SCALE_FACTOR: f32 = 0.05;

/// Upper bound applied to the scale during native pinch gestures.
pub const MAX_GESTURE_SCALE_FACTOR: f32 = 4.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of zoom and reset transitions (milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

/// Duration of the smart-zoom transition (milliseconds).
pub const DEFAULT_SMART_ZOOM_DURATION_MS: u64 = 500;

/// Longest accepted transition (milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 5_000;

/// Interval between animation ticks (milliseconds), roughly 60 fps.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Multiplicative step applied by the zoom in/out shortcuts.
pub const DEFAULT_ZOOM_STEP: f32 = 1.25;

/// Smallest accepted zoom step.
pub const MIN_ZOOM_STEP: f32 = 1.01;

/// Largest accepted zoom step.
pub const MAX_ZOOM_STEP: f32 = 4.0;

/// Pixels panned per wheel line when the device reports line deltas.
pub const DEFAULT_WHEEL_LINE_PIXELS: f32 = 20.0;

/// Smallest accepted wheel line height.
pub const MIN_WHEEL_LINE_PIXELS: f32 = 1.0;

/// Largest accepted wheel line height.
pub const MAX_WHEEL_LINE_PIXELS: f32 = 200.0;

/// Pixels panned per arrow key press.
pub const DEFAULT_PAN_STEP_PIXELS: f32 = 40.0;

/// Smallest accepted arrow key pan step.
pub const MIN_PAN_STEP_PIXELS: f32 = 1.0;

/// Largest accepted arrow key pan step.
pub const MAX_PAN_STEP_PIXELS: f32 = 1_000.0;

/// Degrees rotated by the rotate shortcuts.
pub const ROTATION_STEP_DEGREES: f32 = 90.0;

/// Scale delta emitted by the keyboard stand-in for a trackpad pinch.
pub const KEYBOARD_PINCH_DELTA: f32 = 0.1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(FIT_MARGIN > 0.0);
    assert!(FIT_MARGIN < DEFAULT_SCALE_FACTOR);
    assert!(MIN_FIT_SCALE_FACTOR > 0.0);
    assert!(MIN_GESTURE_SCALE_FACTOR > 0.0);
    assert!(MIN_GESTURE_SCALE_FACTOR < DEFAULT_SCALE_FACTOR);
    assert!(MAX_GESTURE_SCALE_FACTOR > DEFAULT_SCALE_FACTOR);

    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(DEFAULT_SMART_ZOOM_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(ANIMATION_TICK_MS > 0);

    assert!(MIN_ZOOM_STEP > 1.0);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    assert!(MIN_WHEEL_LINE_PIXELS > 0.0);
    assert!(DEFAULT_WHEEL_LINE_PIXELS >= MIN_WHEEL_LINE_PIXELS);
    assert!(DEFAULT_WHEEL_LINE_PIXELS <= MAX_WHEEL_LINE_PIXELS);

    assert!(MIN_PAN_STEP_PIXELS > 0.0);
    assert!(DEFAULT_PAN_STEP_PIXELS >= MIN_PAN_STEP_PIXELS);
    assert!(DEFAULT_PAN_STEP_PIXELS <= MAX_PAN_STEP_PIXELS);
};
