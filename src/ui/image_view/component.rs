// SPDX-License-Identifier: MPL-2.0
//! Image view component encapsulating state and update logic.
//!
//! The host owns a [`State`], forwards [`Message`]s produced by the canvas (or
//! by its own input sources) to [`State::handle_message`], and renders the
//! result with [`State::view`]. Property changes are reported back as
//! [`Notification`]s so the host can bind to them.

use crate::config::{ViewSettings, ANIMATION_TICK_MS};
use crate::media::ImageData;
use crate::ui::image_view::canvas::ImageCanvas;
use crate::ui::image_view::shortcuts::Shortcut;
use crate::ui::state::gesture::pinch_scale;
use crate::ui::state::{
    Animation, Easing, NativeGesture, PinchUpdate, Property, RenderTransform, Track,
    TouchTracker, ViewState,
};
use iced::widget::Canvas;
use iced::{mouse, Element, Length, Point, Size, Subscription, Vector};
use std::time::{Duration, Instant};

/// Messages emitted by the image canvas or sent by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The widget was laid out with a new size.
    Resized(Size),
    WheelScrolled(mouse::ScrollDelta),
    NativeGesture(NativeGesture),
    FingerPressed {
        id: u64,
        position: Point,
    },
    FingerMoved {
        id: u64,
        position: Point,
    },
    /// A finger left the surface or was lost by the platform.
    FingerLifted {
        id: u64,
    },
    DoubleClicked,
    AnimationTick(Instant),
    Shortcut(Shortcut),
}

/// Change notifications for the observable properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    ScaleFactorChanged(f32),
    RotationAngleChanged(f32),
}

/// Image view state: transform, touch tracking and the running animation.
#[derive(Debug, Clone)]
pub struct State {
    view: ViewState,
    touch: TouchTracker,
    animation: Option<Animation>,
    settings: ViewSettings,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates a view with fit-to-widget off and default input settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(ViewSettings {
            fit_to_widget: false,
            ..ViewSettings::default()
        })
    }

    #[must_use]
    pub fn with_settings(settings: ViewSettings) -> Self {
        let mut view = ViewState::new();
        view.set_fit_to_widget(settings.fit_to_widget);
        Self {
            view,
            touch: TouchTracker::new(),
            animation: None,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn image(&self) -> &ImageData {
        self.view.image()
    }

    /// Replaces the displayed image. An empty image is accepted and draws nothing.
    pub fn set_image(&mut self, image: ImageData) -> Vec<Notification> {
        self.view.set_image(image);
        if self.view.fit_to_widget() {
            return self.reset(false);
        }
        Vec::new()
    }

    #[must_use]
    pub fn fit_to_widget(&self) -> bool {
        self.view.fit_to_widget()
    }

    pub fn set_fit_to_widget(&mut self, on: bool) {
        self.view.set_fit_to_widget(on);
        self.settings.fit_to_widget = on;
    }

    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.view.scale_factor()
    }

    /// Sets the scale factor, notifying only on a real change.
    pub fn set_scale_factor(&mut self, scale_factor: f32) -> Option<Notification> {
        self.view
            .set_scale_factor(scale_factor)
            .then_some(Notification::ScaleFactorChanged(scale_factor))
    }

    #[must_use]
    pub fn rotation_angle(&self) -> f32 {
        self.view.rotation_angle()
    }

    /// Sets the rotation angle in degrees, notifying only on a real change.
    pub fn set_rotation_angle(&mut self, rotation_angle: f32) -> Option<Notification> {
        self.view
            .set_rotation_angle(rotation_angle)
            .then_some(Notification::RotationAngleChanged(rotation_angle))
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.view.offset()
    }

    /// Scale used for drawing, including an in-progress pinch.
    #[must_use]
    pub fn effective_scale(&self) -> f32 {
        self.view.effective_scale()
    }

    #[must_use]
    pub fn render_transform(&self, widget: Size) -> RenderTransform {
        self.view.render_transform(widget)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Returns true if the finger is part of the current touch sequence.
    #[must_use]
    pub fn is_tracking_finger(&self, id: u64) -> bool {
        self.touch.contains(id)
    }

    /// Sets the absolute scale, optionally through an animation.
    ///
    /// Ignored when no image is loaded or the factor is not a positive number.
    pub fn zoom(&mut self, factor: f32, animated: bool) -> Vec<Notification> {
        if !self.view.has_image() {
            log::debug!("Ignoring zoom to {factor}: no image loaded");
            return Vec::new();
        }
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!("Ignoring zoom to invalid factor {factor}");
            return Vec::new();
        }

        if animated {
            let track = Track::new(
                Property::ScaleFactor,
                self.view.scale_factor(),
                factor,
                self.settings.animation_duration,
            );
            self.start_animation(Animation::new().with(track));
            Vec::new()
        } else {
            self.animation = None;
            self.set_scale_factor(factor).into_iter().collect()
        }
    }

    /// Fits the image into the widget and clears the rotation.
    ///
    /// Ignored until both an image and the widget size are known.
    pub fn reset(&mut self, animated: bool) -> Vec<Notification> {
        let Some(scale) = self.view.fitted_scale() else {
            log::debug!("Ignoring reset: no image or widget size yet");
            return Vec::new();
        };

        if animated {
            let duration = self.settings.animation_duration;
            let mut animation = Animation::new();
            let rotation = self.view.rotation_angle();
            if rotation != 0.0 {
                animation = animation.with(Track::new(
                    Property::RotationAngle,
                    rotation,
                    0.0,
                    duration,
                ));
            }
            animation = animation.with(Track::new(
                Property::ScaleFactor,
                self.view.scale_factor(),
                scale,
                duration,
            ));
            self.start_animation(animation);
            Vec::new()
        } else {
            self.animation = None;
            self.set_rotation_angle(0.0)
                .into_iter()
                .chain(self.set_scale_factor(scale))
                .collect()
        }
    }

    /// Handles a message and returns the property changes it caused.
    pub fn handle_message(&mut self, message: Message) -> Vec<Notification> {
        match message {
            Message::Resized(size) => {
                if self.view.set_widget_size(size) && self.view.fit_to_widget() {
                    return self.reset(false);
                }
                Vec::new()
            }
            Message::WheelScrolled(delta) => {
                let delta = match delta {
                    mouse::ScrollDelta::Pixels { x, y } => Vector::new(x, y),
                    mouse::ScrollDelta::Lines { x, y } => {
                        Vector::new(x, y) * self.settings.wheel_line_pixels
                    }
                };
                self.view.pan_by(delta);
                Vec::new()
            }
            Message::NativeGesture(gesture) => self.handle_gesture(gesture),
            Message::FingerPressed { id, position } => {
                let update = self.touch.press(id, position);
                self.apply_pinch(update)
            }
            Message::FingerMoved { id, position } => {
                let update = self.touch.moved(id, position);
                self.apply_pinch(update)
            }
            Message::FingerLifted { id } => {
                let update = self.touch.lift(id);
                self.apply_pinch(update)
            }
            Message::DoubleClicked => self.reset(true),
            Message::AnimationTick(now) => self.tick(now),
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
        }
    }

    /// Ticks the running animation while one exists.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.animation.is_some() {
            iced::time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    /// Canvas filling the available space.
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(ImageCanvas::new(self))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn handle_gesture(&mut self, gesture: NativeGesture) -> Vec<Notification> {
        match gesture {
            NativeGesture::Zoom(delta) => {
                self.animation = None;
                let scale = pinch_scale(self.view.scale_factor(), delta);
                self.set_scale_factor(scale).into_iter().collect()
            }
            NativeGesture::Rotate(delta) => {
                let angle = self.view.rotation_angle() + delta;
                self.set_rotation_angle(angle).into_iter().collect()
            }
            NativeGesture::SmartZoom(delta) => {
                let from = self.view.scale_factor();
                let track = Track::new(
                    Property::ScaleFactor,
                    from,
                    pinch_scale(from, delta),
                    self.settings.smart_zoom_duration,
                )
                .with_easing(Easing::OutCubic);
                self.start_animation(Animation::new().with(track));
                Vec::new()
            }
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Vec<Notification> {
        match shortcut {
            Shortcut::ZoomIn => {
                let target = self.target_of(Property::ScaleFactor) * self.settings.zoom_step;
                self.zoom(target, true)
            }
            Shortcut::ZoomOut => {
                let target = self.target_of(Property::ScaleFactor) / self.settings.zoom_step;
                self.zoom(target, true)
            }
            Shortcut::Reset => self.reset(true),
            Shortcut::Rotate(degrees) => {
                if !self.view.has_image() {
                    return Vec::new();
                }
                let target = self.target_of(Property::RotationAngle) + degrees;
                let track = Track::new(
                    Property::RotationAngle,
                    self.view.rotation_angle(),
                    target,
                    self.settings.animation_duration,
                );
                self.start_animation(Animation::new().with(track));
                Vec::new()
            }
            Shortcut::Pan(delta) => {
                self.view.pan_by(delta);
                Vec::new()
            }
            Shortcut::Gesture(gesture) => self.handle_gesture(gesture),
        }
    }

    /// Where a property is heading: the running track's end value, or its current value.
    fn target_of(&self, property: Property) -> f32 {
        let running = self
            .animation
            .as_ref()
            .and_then(|a| a.tracks().iter().find(|t| t.property == property))
            .map(|t| t.to);

        running.unwrap_or(match property {
            Property::ScaleFactor => self.view.scale_factor(),
            Property::RotationAngle => self.view.rotation_angle(),
        })
    }

    fn apply_pinch(&mut self, update: PinchUpdate) -> Vec<Notification> {
        match update {
            PinchUpdate::None => Vec::new(),
            PinchUpdate::Begin => {
                self.animation = None;
                self.view.set_current_step_scale_factor(1.0);
                Vec::new()
            }
            PinchUpdate::Ratio(ratio) => {
                self.view.set_current_step_scale_factor(ratio);
                Vec::new()
            }
            PinchUpdate::Settle => {
                let baked = self.view.effective_scale();
                self.view.set_current_step_scale_factor(1.0);
                self.set_scale_factor(baked).into_iter().collect()
            }
        }
    }

    fn start_animation(&mut self, animation: Animation) {
        if self.animation.is_some() {
            log::debug!("Superseding running view animation");
        }
        log::debug!("Starting view animation: {:?}", animation.tracks());
        self.animation = Some(animation);
    }

    fn tick(&mut self, now: Instant) -> Vec<Notification> {
        let Some(animation) = self.animation.as_mut() else {
            return Vec::new();
        };

        let step = animation.tick(now);
        if step.finished {
            log::debug!("View animation finished");
            self.animation = None;
        }

        step.values
            .into_iter()
            .filter_map(|(property, value)| match property {
                Property::ScaleFactor => self.set_scale_factor(value),
                Property::RotationAngle => self.set_rotation_angle(value),
            })
            .collect()
    }
}
