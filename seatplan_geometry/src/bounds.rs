// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over all seat rectangles of a hall.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest left edge.
    pub min_x: f64,
    /// Largest right edge.
    pub max_x: f64,
    /// Smallest top edge.
    pub min_y: f64,
    /// Largest bottom edge.
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds covering exactly `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            min_x: rect.min_x(),
            max_x: rect.max_x(),
            min_y: rect.min_y(),
            max_y: rect.max_y(),
        }
    }

    /// Grows the bounds so that they also cover `rect`.
    pub fn include(&mut self, rect: Rect) {
        self.min_x = self.min_x.min(rect.min_x());
        self.max_x = self.max_x.max(rect.max_x());
        self.min_y = self.min_y.min(rect.min_y());
        self.max_y = self.max_y.max(rect.max_y());
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Returns the bounds as a kurbo rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Returns `true` if the box has a finite, strictly positive area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }
}
