// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::borrow::Borrow;
use core::fmt;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Identifier of a seat, unique within a hall.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SeatId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SeatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeatId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SeatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Availability of a seat as reported by the booking API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// The seat can be selected.
    Free,
    /// The seat is already sold or reserved.
    Taken,
}

/// A positioned seat in world coordinates.
///
/// `x`/`y` is the top-left corner of the seat rectangle; `w`/`h` is the fixed
/// seat size the geometry was built with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Unique identifier within the hall.
    pub id: SeatId,
    /// Left edge in world units.
    pub x: f64,
    /// Top edge in world units.
    pub y: f64,
    /// Width in world units.
    pub w: f64,
    /// Height in world units.
    pub h: f64,
    /// Row label, possibly empty.
    pub row: String,
    /// Seat label within the row, possibly empty.
    pub seat_label: String,
    /// Availability derived from the record's availability flag.
    pub status: SeatStatus,
    /// Ticket price for this seat.
    pub price: f64,
    /// Seat category label (for example a sector or sofa type), possibly empty.
    pub seat_type: String,
}

impl Seat {
    /// Returns the seat rectangle in world coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    /// Returns the center of the seat rectangle in world coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Returns `true` if `pt` lies inside the seat rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.w && pt.y >= self.y && pt.y <= self.y + self.h
    }

    /// Returns `true` if the seat can be selected.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.status == SeatStatus::Free
    }
}
