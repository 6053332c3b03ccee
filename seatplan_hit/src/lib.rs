// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Hit: which seat is under a screen point?
//!
//! Picking maps the screen point into world space with the inverse of the
//! viewport [`Transform`] and tests it against each seat rectangle, edges
//! included. Seats do not overlap in practice; if they do, the first seat in
//! layout order wins.
//!
//! With a non-zero [`HitParams::tolerance`], a point that misses every seat
//! still picks the nearest seat whose rectangle is within `tolerance` screen
//! pixels. This helps fingers on small screens, where seats are drawn a few
//! pixels wide.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
//! use seatplan_hit::{pick, toggle_target};
//! use seatplan_view::Transform;
//!
//! let geometry = Geometry::build(
//!     &[
//!         SeatRecord::place("free", "1", "1", 0.0, 0.0),
//!         SeatRecord::place("sold", "1", "2", 50.0, 0.0).taken(),
//!     ],
//!     &GeometryConfig::default(),
//! );
//! let transform = Transform { offset: Vec2::new(100.0, 100.0), scale: 2.0 };
//!
//! // World (20, 20) is screen (140, 140).
//! let hit = pick(Point::new(140.0, 140.0), &transform, geometry.seats());
//! assert_eq!(hit.map(|s| s.id.as_str()), Some("free"));
//!
//! // Taken seats are hit but never toggled.
//! let sold = Point::new(100.0 + 60.0 * 2.0, 120.0);
//! assert!(pick(sold, &transform, geometry.seats()).is_some());
//! assert!(toggle_target(sold, &transform, geometry.seats(), &Default::default()).is_none());
//! ```

use kurbo::{Point, Rect};
use seatplan_geometry::Seat;
use seatplan_view::Transform;

/// Tuning for a pick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitParams {
    /// Extra reach around each seat, in screen pixels.
    ///
    /// Zero means exact containment only.
    pub tolerance: f64,
}

impl HitParams {
    /// Parameters with the given screen-space tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

/// How a seat was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// The point lies inside the seat rectangle.
    Inside,
    /// The point lies outside, within the tolerance.
    Near,
}

/// A picked seat with its distance from the query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    /// The seat.
    pub seat: &'a Seat,
    /// Distance from the point to the seat rectangle in screen pixels; zero
    /// when inside.
    pub distance: f64,
    /// Whether the point was inside or only near.
    pub kind: HitKind,
}

/// Returns the seat whose rectangle contains `screen`, if any.
#[must_use]
pub fn pick<'a>(screen: Point, transform: &Transform, seats: &'a [Seat]) -> Option<&'a Seat> {
    hit_test(screen, transform, seats, &HitParams::default()).map(|hit| hit.seat)
}

/// Returns the seat a tap at `screen` should toggle.
///
/// This is the picked seat when it is free; taps on taken seats and on
/// empty space yield `None`.
#[must_use]
pub fn toggle_target<'a>(
    screen: Point,
    transform: &Transform,
    seats: &'a [Seat],
    params: &HitParams,
) -> Option<&'a Seat> {
    hit_test(screen, transform, seats, params)
        .map(|hit| hit.seat)
        .filter(|seat| seat.is_free())
}

/// Full hit test with tolerance.
///
/// A containing seat always wins over a merely near one. Among near seats
/// the closest wins; ties go to the earlier seat.
#[must_use]
pub fn hit_test<'a>(
    screen: Point,
    transform: &Transform,
    seats: &'a [Seat],
    params: &HitParams,
) -> Option<Hit<'a>> {
    if !transform.is_valid() {
        return None;
    }
    let world = transform.screen_to_world(screen);
    if !world.is_finite() {
        return None;
    }

    if let Some(seat) = seats.iter().find(|seat| seat.contains(world)) {
        return Some(Hit {
            seat,
            distance: 0.0,
            kind: HitKind::Inside,
        });
    }

    if params.tolerance.is_nan() || params.tolerance <= 0.0 {
        return None;
    }
    let reach = params.tolerance / transform.scale;
    let mut best: Option<(&Seat, f64)> = None;
    for seat in seats {
        let d = distance_to_rect(world, seat.rect());
        if d <= reach && best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((seat, d));
        }
    }
    best.map(|(seat, d)| Hit {
        seat,
        distance: d * transform.scale,
        kind: HitKind::Near,
    })
}

/// Euclidean distance from `pt` to the closest point of `rect`.
fn distance_to_rect(pt: Point, rect: Rect) -> f64 {
    let dx = (rect.x0 - pt.x).max(pt.x - rect.x1).max(0.0);
    let dy = (rect.y0 - pt.y).max(pt.y - rect.y1).max(0.0);
    dx.hypot(dy)
}
