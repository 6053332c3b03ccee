// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! A pinch is followed incrementally: every update compares the new finger
//! pair against the previous one and yields a [`PinchStep`]. Applying the
//! step's pan and then zooming by its ratio around its anchor keeps the world
//! point that was under the old midpoint under the new midpoint.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use seatplan_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::new(Point::new(150.0, 200.0), Point::new(250.0, 200.0));
//! let step = pinch.update(Point::new(100.0, 200.0), Point::new(300.0, 200.0), 1.0);
//! assert_eq!(step.ratio, 2.0);
//! assert_eq!(step.pan, Vec2::ZERO);
//! assert_eq!(step.anchor, Point::new(200.0, 200.0));
//! ```

use kurbo::{Point, Vec2};

/// Distance and midpoint of the last seen finger pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    /// Distance between the two fingers.
    pub distance: f64,
    /// Point halfway between the two fingers.
    pub midpoint: Point,
}

/// The view change implied by one pinch update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Movement of the midpoint since the previous update.
    pub pan: Vec2,
    /// The new midpoint, to zoom around.
    pub anchor: Point,
    /// New distance over old distance; `1.0` when either is too small.
    pub ratio: f64,
}

impl PinchState {
    /// Captures a finger pair.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
        }
    }

    /// Moves to a new finger pair and returns the step from the previous one.
    pub fn update(&mut self, a: Point, b: Point, min_distance: f64) -> PinchStep {
        let next = Self::new(a, b);
        let ratio = if self.distance >= min_distance && next.distance >= min_distance {
            next.distance / self.distance
        } else {
            1.0
        };
        let step = PinchStep {
            pan: next.midpoint - self.midpoint,
            anchor: next.midpoint,
            ratio,
        };
        *self = next;
        step
    }
}
