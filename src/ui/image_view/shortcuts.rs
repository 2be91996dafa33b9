// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the image view.
//!
//! | Key | Action |
//! |-----|--------|
//! | `+` / `=` | Zoom in by one step (animated) |
//! | `-` | Zoom out by one step (animated) |
//! | `0` | Reset to fit (animated) |
//! | `r` / `Shift+R` | Rotate 90° clockwise / counter-clockwise |
//! | Arrows | Move the image in the arrow direction |
//! | `Ctrl` + `+` / `-` | Trackpad pinch stand-in |
//! | `Ctrl` + `r` / `Shift+R` | Trackpad rotate stand-in |
//! | `z` | Smart zoom stand-in |

use crate::config::{ViewSettings, KEYBOARD_PINCH_DELTA, ROTATION_STEP_DEGREES};
use crate::ui::state::NativeGesture;
use iced::keyboard::{self, key::Named, Key};
use iced::Vector;

/// Degrees per keyboard rotate gesture.
const KEYBOARD_ROTATE_DEGREES: f32 = 15.0;

/// Scale delta of the keyboard smart zoom.
const KEYBOARD_SMART_ZOOM_DELTA: f32 = 1.0;

/// A view action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
    Reset,
    /// Animated rotation by the given degrees.
    Rotate(f32),
    /// Pan by the given pixels.
    Pan(Vector),
    /// Feeds a native gesture, for hosts without a trackpad source.
    Gesture(NativeGesture),
}

/// Maps a key press to a shortcut.
#[must_use]
pub fn shortcut_for_key(
    key: &Key,
    modifiers: keyboard::Modifiers,
    settings: &ViewSettings,
) -> Option<Shortcut> {
    let step = settings.pan_step_pixels;

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Pan(Vector::new(-step, 0.0))),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Pan(Vector::new(step, 0.0))),
        Key::Named(Named::ArrowUp) => Some(Shortcut::Pan(Vector::new(0.0, -step))),
        Key::Named(Named::ArrowDown) => Some(Shortcut::Pan(Vector::new(0.0, step))),
        Key::Character(c) => character_shortcut(c, modifiers),
        _ => None,
    }
}

fn character_shortcut(c: &str, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    let counter_clockwise = modifiers.shift() || c == "R";

    if modifiers.command() {
        return match c {
            "+" | "=" => Some(Shortcut::Gesture(NativeGesture::Zoom(KEYBOARD_PINCH_DELTA))),
            "-" => Some(Shortcut::Gesture(NativeGesture::Zoom(-KEYBOARD_PINCH_DELTA))),
            "r" | "R" => {
                let degrees = if counter_clockwise {
                    -KEYBOARD_ROTATE_DEGREES
                } else {
                    KEYBOARD_ROTATE_DEGREES
                };
                Some(Shortcut::Gesture(NativeGesture::Rotate(degrees)))
            }
            _ => None,
        };
    }

    match c {
        "+" | "=" => Some(Shortcut::ZoomIn),
        "-" => Some(Shortcut::ZoomOut),
        "0" => Some(Shortcut::Reset),
        "r" | "R" => Some(Shortcut::Rotate(if counter_clockwise {
            -ROTATION_STEP_DEGREES
        } else {
            ROTATION_STEP_DEGREES
        })),
        "z" | "Z" => Some(Shortcut::Gesture(NativeGesture::SmartZoom(
            KEYBOARD_SMART_ZOOM_DELTA,
        ))),
        _ => None,
    }
}
