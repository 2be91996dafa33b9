// SPDX-License-Identifier: MPL-2.0
//! Property animations for the view transform.
//!
//! An [`Animation`] is a group of property tracks running in parallel. It is
//! driven by frame ticks and starts on the first tick it receives, so the
//! values it produces only depend on the tick instants.

use std::time::{Duration, Instant};

/// Animatable view properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    ScaleFactor,
    RotationAngle,
}

/// Interpolation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, gentle landing.
    OutCubic,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Interpolates one property from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Track {
    #[must_use]
    pub fn new(property: Property, from: f32, to: f32, duration: Duration) -> Self {
        Self {
            property,
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value after `elapsed`. Lands exactly on `to` once the duration is over.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Values produced by one animation tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub values: Vec<(Property, f32)>,
    pub finished: bool,
}

/// Parallel group of property tracks.
#[derive(Debug, Clone, Default)]
pub struct Animation {
    tracks: Vec<Track>,
    started_at: Option<Instant>,
}

impl Animation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a track, replacing any existing track for the same property.
    #[must_use]
    pub fn with(mut self, track: Track) -> Self {
        self.tracks.retain(|t| t.property != track.property);
        self.tracks.push(track);
        self
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[must_use]
    pub fn animates(&self, property: Property) -> bool {
        self.tracks.iter().any(|t| t.property == property)
    }

    /// Returns true once the first tick has been received.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Advances to `now` and returns the value of every track.
    pub fn tick(&mut self, now: Instant) -> Step {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        Step {
            values: self
                .tracks
                .iter()
                .map(|track| (track.property, track.value_at(elapsed)))
                .collect(),
            finished: self.tracks.iter().all(|track| track.is_finished(elapsed)),
        }
    }
}
