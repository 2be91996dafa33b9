// SPDX-License-Identifier: MPL-2.0
//! View transform state
//!
//! This module owns everything that decides where the image lands on screen:
//! - The displayed image and the widget size it is shown in
//! - Scale factor, rotation angle and pan offsets
//! - The transient two-finger step scale
//! - The fit computation and the composed render transform

use crate::config::{DEFAULT_SCALE_FACTOR, FIT_MARGIN, MIN_FIT_SCALE_FACTOR};
use crate::media::ImageData;
use iced::{Point, Size, Vector};

/// Returns true when two values are indistinguishable for display purposes.
///
/// Exact equality always matches, which also covers comparisons against zero
/// where a purely relative tolerance never would.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fuzzy_eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() * 100_000.0 <= a.abs().min(b.abs())
}

/// Computes the scale that fits an image of `image` size into `widget`.
///
/// Returns 1.0 when the image already fits: fitting never upscales.
#[must_use]
pub fn fit_scale(widget: Size, image: Size) -> f32 {
    if image.width <= widget.width && image.height <= widget.height {
        return DEFAULT_SCALE_FACTOR;
    }

    let horizontal = widget.width / image.width;
    let vertical = widget.height / image.height;
    (horizontal.min(vertical) - FIT_MARGIN).clamp(MIN_FIT_SCALE_FACTOR, DEFAULT_SCALE_FACTOR)
}

/// The painter transform for one frame, in application order.
///
/// Widget centre, then pan offset, then rotation, then scale, then the
/// half-image shift. Zoom and rotation therefore pivot around the
/// pan-adjusted centre of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    /// Widget centre plus pan offsets.
    pub translation: Vector,
    /// Rotation in degrees, clockwise on screen.
    pub rotation_degrees: f32,
    /// Effective scale (step scale times scale factor).
    pub scale: f32,
    /// Image dimensions in pixels.
    pub image_size: Size,
}

impl RenderTransform {
    /// Rotation in radians.
    #[must_use]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    /// Maps a point in image pixel space to widget space.
    #[must_use]
    pub fn map_point(&self, image_point: Point) -> Point {
        let x = (image_point.x - self.image_size.width / 2.0) * self.scale;
        let y = (image_point.y - self.image_size.height / 2.0) * self.scale;

        let (sin, cos) = self.rotation_radians().sin_cos();
        let rotated_x = x * cos - y * sin;
        let rotated_y = x * sin + y * cos;

        Point::new(
            self.translation.x + rotated_x,
            self.translation.y + rotated_y,
        )
    }
}

/// Transform state of one image view.
#[derive(Debug, Clone)]
pub struct ViewState {
    image: ImageData,
    scale_factor: f32,
    rotation_angle: f32,
    horizontal_offset: f32,
    vertical_offset: f32,
    fit_to_widget: bool,
    current_step_scale_factor: f32,
    widget_size: Option<Size>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            image: ImageData::empty(),
            scale_factor: DEFAULT_SCALE_FACTOR,
            rotation_angle: 0.0,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            fit_to_widget: false,
            current_step_scale_factor: 1.0,
            widget_size: None,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Replaces the image and re-clamps the pan offsets against it.
    pub fn set_image(&mut self, image: ImageData) {
        self.image = image;
        self.clamp_offsets();
    }

    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Sets the scale factor. Returns false when the value is unchanged.
    pub fn set_scale_factor(&mut self, scale_factor: f32) -> bool {
        if fuzzy_eq(self.scale_factor, scale_factor) {
            return false;
        }
        self.scale_factor = scale_factor;
        self.clamp_offsets();
        true
    }

    #[must_use]
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Sets the rotation angle in degrees. Returns false when the value is unchanged.
    pub fn set_rotation_angle(&mut self, rotation_angle: f32) -> bool {
        if fuzzy_eq(self.rotation_angle, rotation_angle) {
            return false;
        }
        self.rotation_angle = rotation_angle;
        true
    }

    #[must_use]
    pub fn fit_to_widget(&self) -> bool {
        self.fit_to_widget
    }

    /// Returns false when the flag already had this value.
    pub fn set_fit_to_widget(&mut self, on: bool) -> bool {
        if self.fit_to_widget == on {
            return false;
        }
        self.fit_to_widget = on;
        true
    }

    #[must_use]
    pub fn current_step_scale_factor(&self) -> f32 {
        self.current_step_scale_factor
    }

    pub fn set_current_step_scale_factor(&mut self, step: f32) {
        self.current_step_scale_factor = step;
    }

    /// Scale actually used for drawing.
    #[must_use]
    pub fn effective_scale(&self) -> f32 {
        self.current_step_scale_factor * self.scale_factor
    }

    #[must_use]
    pub fn widget_size(&self) -> Option<Size> {
        self.widget_size
    }

    /// Records the widget size. Returns true when it differs from the previous one.
    pub fn set_widget_size(&mut self, size: Size) -> bool {
        if self.widget_size == Some(size) {
            return false;
        }
        self.widget_size = Some(size);
        true
    }

    /// Current pan offsets from the widget centre.
    #[must_use]
    pub fn offset(&self) -> Vector {
        Vector::new(self.horizontal_offset, self.vertical_offset)
    }

    /// Half of the scaled image extent: the furthest the image may be panned.
    #[must_use]
    pub fn max_offset(&self) -> Vector {
        let size = self.image.size();
        Vector::new(
            size.width * self.scale_factor.abs() / 2.0,
            size.height * self.scale_factor.abs() / 2.0,
        )
    }

    /// Pans by `delta` pixels, clamping each axis independently.
    pub fn pan_by(&mut self, delta: Vector) {
        self.horizontal_offset += delta.x;
        self.vertical_offset += delta.y;
        self.clamp_offsets();
    }

    fn clamp_offsets(&mut self) {
        let max = self.max_offset();
        self.horizontal_offset = self.horizontal_offset.clamp(-max.x, max.x);
        self.vertical_offset = self.vertical_offset.clamp(-max.y, max.y);
    }

    /// Scale that fits the image into the current widget, if both are known.
    #[must_use]
    pub fn fitted_scale(&self) -> Option<f32> {
        if !self.has_image() {
            return None;
        }
        let widget = self.widget_size?;
        Some(fit_scale(widget, self.image.size()))
    }

    /// Composes the render transform for a widget of the given size.
    #[must_use]
    pub fn render_transform(&self, widget: Size) -> RenderTransform {
        RenderTransform {
            translation: Vector::new(
                widget.width / 2.0 + self.horizontal_offset,
                widget.height / 2.0 + self.vertical_offset,
            ),
            rotation_degrees: self.rotation_angle,
            scale: self.effective_scale(),
            image_size: self.image.size(),
        }
    }
}
