// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The view follows the Elm-style "state down, messages up" pattern.
//!
//! - [`image_view`] - The image view component, its canvas and shortcuts
//! - [`state`] - Transform, animation and touch state without iced plumbing

pub mod image_view;
pub mod state;
