// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the view-transform logic separated from the widget
//! and the iced plumbing, so it can be exercised without a renderer.

pub mod animation;
pub mod gesture;
pub mod touch;
pub mod transform;

// Re-export commonly used types for convenience
pub use animation::{Animation, Easing, Property, Track};
pub use gesture::NativeGesture;
pub use touch::{PinchUpdate, TouchTracker};
pub use transform::{RenderTransform, ViewState};
