// SPDX-License-Identifier: MPL-2.0
//! Touch point tracking for two-finger pinch zoom.
//!
//! The tracker only reports what happened to the pinch; the view decides how
//! to fold the ratio into its scale.

use iced::Point;

/// Start distances shorter than this cannot produce a meaningful ratio.
const MIN_PINCH_DISTANCE: f32 = 1.0;

/// A finger currently in contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub start: Point,
    pub current: Point,
}

/// What a touch event means for the pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchUpdate {
    /// Nothing to do.
    None,
    /// Exactly two fingers are now down; the ratio restarts at 1.
    Begin,
    /// Live distance ratio of the two fingers.
    Ratio(f32),
    /// The pinch ended; the current ratio must be baked in.
    Settle,
}

/// Tracks fingers in press order.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    points: Vec<TouchPoint>,
}

impl TouchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fingers down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    /// Returns true while exactly two fingers are down.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.points.len() == 2
    }

    pub fn press(&mut self, id: u64, position: Point) -> PinchUpdate {
        if self.contains(id) {
            return self.moved(id, position);
        }

        let was_pinching = self.is_pinching();
        self.points.push(TouchPoint {
            id,
            start: position,
            current: position,
        });

        if was_pinching {
            PinchUpdate::Settle
        } else if self.is_pinching() {
            self.reanchor();
            PinchUpdate::Begin
        } else {
            PinchUpdate::None
        }
    }

    pub fn moved(&mut self, id: u64, position: Point) -> PinchUpdate {
        let Some(point) = self.points.iter_mut().find(|p| p.id == id) else {
            return PinchUpdate::None;
        };
        point.current = position;

        match self.ratio() {
            Some(ratio) => PinchUpdate::Ratio(ratio),
            None => PinchUpdate::None,
        }
    }

    pub fn lift(&mut self, id: u64) -> PinchUpdate {
        let Some(index) = self.points.iter().position(|p| p.id == id) else {
            return PinchUpdate::None;
        };

        let was_pinching = self.is_pinching();
        self.points.remove(index);

        if was_pinching {
            PinchUpdate::Settle
        } else if self.is_pinching() {
            self.reanchor();
            PinchUpdate::Begin
        } else {
            PinchUpdate::None
        }
    }

    /// Drops every finger, e.g. when the window loses focus.
    pub fn clear(&mut self) -> PinchUpdate {
        let was_pinching = self.is_pinching();
        self.points.clear();
        if was_pinching {
            PinchUpdate::Settle
        } else {
            PinchUpdate::None
        }
    }

    /// Current distance over start distance of the two fingers.
    #[must_use]
    pub fn ratio(&self) -> Option<f32> {
        let [first, second] = self.points.as_slice() else {
            return None;
        };

        let start = first.start.distance(second.start);
        if start < MIN_PINCH_DISTANCE {
            return None;
        }
        Some(first.current.distance(second.current) / start)
    }

    /// Restarts the pinch from where the fingers are now.
    fn reanchor(&mut self) {
        for point in &mut self.points {
            point.start = point.current;
        }
    }
}
