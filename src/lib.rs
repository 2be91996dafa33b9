// SPDX-License-Identifier: MPL-2.0
//! `iced_image_view` is an interactive image view widget for the Iced GUI framework.
//!
//! The view shows a single bitmap centred in its bounds and lets the user
//! pan with the wheel, zoom with trackpad pinches or two fingers, rotate,
//! and go back to a fitted view with a double click. Scale and rotation
//! changes can be animated and are reported back to the host as
//! notifications.
//!
//! The widget lives in [`ui::image_view`]; the renderer-independent transform
//! logic lives in [`ui::state`]. The [`app`] module is a small demo window.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
