// SPDX-License-Identifier: MPL-2.0
//! Interactive image view: pan, zoom, rotate, touch pinch and animated reset.
//!
//! [`State`] holds the view and reacts to [`Message`]s; [`ImageCanvas`] draws
//! it and translates raw iced events into those messages.

pub mod canvas;
pub mod component;
pub mod shortcuts;

pub use canvas::ImageCanvas;
pub use component::{Message, Notification, State};
pub use shortcuts::{shortcut_for_key, Shortcut};
