// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the image and turns raw input into view messages.

use super::component::{Message, State};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Detects double clicks from successive press instants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickDetector {
    last_click: Option<Instant>,
}

impl ClickDetector {
    /// Records a press at `now`. Returns true when it completes a double click.
    pub fn register(&mut self, now: Instant) -> bool {
        let is_double_click = self
            .last_click
            .is_some_and(|t| now.saturating_duration_since(t) <= DOUBLE_CLICK_THRESHOLD);

        // A completed double click starts over, so a third press is a single one.
        self.last_click = if is_double_click { None } else { Some(now) };
        is_double_click
    }
}

/// Per-widget input bookkeeping kept by iced between events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    clicks: ClickDetector,
    size: Option<Size>,
}

/// Draws the image of a view [`State`].
pub struct ImageCanvas<'a> {
    state: &'a State,
}

impl<'a> ImageCanvas<'a> {
    #[must_use]
    pub fn new(state: &'a State) -> Self {
        Self { state }
    }
}

impl canvas::Program<Message> for ImageCanvas<'_> {
    type State = Interaction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                Some(Action::publish(Message::WheelScrolled(*delta)).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)?;
                if interaction.clicks.register(Instant::now()) {
                    Some(Action::publish(Message::DoubleClicked).and_capture())
                } else {
                    None
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                Some(
                    Action::publish(Message::FingerPressed {
                        id: id.0,
                        position: local(*position, bounds),
                    })
                    .and_capture(),
                )
            }
            Event::Touch(touch::Event::FingerMoved { id, position })
                if self.state.is_tracking_finger(id.0) =>
            {
                Some(
                    Action::publish(Message::FingerMoved {
                        id: id.0,
                        position: local(*position, bounds),
                    })
                    .and_capture(),
                )
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) if self.state.is_tracking_finger(id.0) => {
                Some(Action::publish(Message::FingerLifted { id: id.0 }).and_capture())
            }
            // Canvas has no layout callback. Events the view does not consume,
            // redraw requests included, report the current size instead.
            _ => {
                if interaction.size == Some(bounds.size()) {
                    return None;
                }
                interaction.size = Some(bounds.size());
                Some(Action::publish(Message::Resized(bounds.size())))
            }
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let image = self.state.image();
        if !image.is_empty() {
            let transform = self.state.render_transform(bounds.size());
            let half = Vector::new(
                transform.image_size.width / 2.0,
                transform.image_size.height / 2.0,
            );

            frame.with_save(|frame| {
                frame.translate(transform.translation);
                frame.rotate(transform.rotation_radians());
                frame.scale(transform.scale);
                frame.translate(Vector::new(-half.x, -half.y));
                frame.draw_image(
                    Rectangle::new(Point::ORIGIN, transform.image_size),
                    canvas::Image::new(image.handle.clone()),
                );
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Converts a window position into widget coordinates.
fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}
