// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: movement deltas plus how far the pointer has strayed.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragState::start`] at the initial position.
//! 2) On each move event, call [`DragState::update`] to get the delta since the last update.
//! 3) Ask [`DragState::exceeds`] whether the pointer has travelled far enough to be a drag.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use seatplan_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! let delta = drag.update(Point::new(13.0, 24.0)).unwrap();
//! assert_eq!(delta, Vec2::new(3.0, 4.0));
//! assert_eq!(drag.max_travel(), 5.0);
//! assert!(drag.exceeds(4.0));
//! assert!(!drag.exceeds(5.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single pointer or finger while it drags.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position the drag started at (or was last re-anchored at).
    pub start_pos: Option<Point>,
    /// Last recorded position.
    pub last_pos: Option<Point>,
    max_travel: f64,
}

impl DragState {
    /// Starts tracking a new drag from `pos`, forgetting any previous travel.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.max_travel = 0.0;
    }

    /// Moves the anchor to `pos` without reporting a delta.
    ///
    /// Used when a different finger takes over an ongoing drag. Travel
    /// recorded so far is kept.
    pub fn rebase(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position and returns the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        self.max_travel = self.max_travel.max((pos - start).hypot());
        Some(pos - last)
    }

    /// Offset of `current_pos` from the drag start.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Largest distance from the start seen so far.
    #[must_use]
    pub fn max_travel(&self) -> f64 {
        self.max_travel
    }

    /// Returns `true` once the pointer has strayed strictly further than `slop`.
    #[must_use]
    pub fn exceeds(&self, slop: f64) -> bool {
        self.max_travel > slop
    }
}
