// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The armchair drawn for each seat.
//!
//! The chair is designed on a 130 x 115 unit grid and scaled into the seat
//! rectangle after insetting it by [`HallStyle::seat_padding_ratio`]. It is a
//! filled and outlined rounded backrest plus an outlined U-shaped cushion
//! whose arms stick out slightly past the backrest.

use kurbo::{BezPath, Point, Rect, RoundedRect, Shape};
use seatplan_geometry::Seat;

use crate::HallStyle;

const DESIGN_WIDTH: f64 = 130.0;
const DESIGN_HEIGHT: f64 = 115.0;
const PATH_TOLERANCE: f64 = 0.1;

/// World-space outline of one seat.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatShape {
    /// Rounded backrest, filled and stroked.
    pub backrest: RoundedRect,
    /// Cushion and arms, stroked only.
    pub cushion: BezPath,
    /// Outline width.
    pub stroke_width: f64,
    /// Where the seat label goes when the seat is selected.
    pub label_anchor: Point,
    /// Font size of that label.
    pub label_size: f64,
}

impl SeatShape {
    /// The backrest as a path.
    #[must_use]
    pub fn backrest_path(&self) -> BezPath {
        self.backrest.to_path(PATH_TOLERANCE)
    }

    /// Everything the shape may paint, including half the outline width.
    #[must_use]
    pub fn paint_bounds(&self) -> Rect {
        self.backrest
            .rect()
            .union(self.cushion.bounding_box())
            .inflate(self.stroke_width * 0.5, self.stroke_width * 0.5)
    }
}

/// Lays out the chair for `seat`.
#[must_use]
pub fn seat_shape(seat: &Seat, style: &HallStyle) -> SeatShape {
    let padding = seat.w * style.seat_padding_ratio;
    let box_w = seat.w - padding * 2.0;
    let box_h = seat.h - padding * 2.0;
    let sx = box_w / DESIGN_WIDTH;
    let sy = box_h / DESIGN_HEIGHT;
    let origin = Point::new(seat.x + padding, seat.y + padding);
    let at = |u: f64, v: f64| Point::new(origin.x + u * sx, origin.y + v * sy);

    let back_min = at(15.0, 0.0);
    let back_max = at(115.0, 95.0);
    let backrest = RoundedRect::new(back_min.x, back_min.y, back_max.x, back_max.y, 35.0 * sx);

    let (left, right, mid) = (-7.0, 137.0, 65.0);
    let (top, bend, bottom) = (45.0, 70.0, 119.0);
    let mut cushion = BezPath::new();
    cushion.move_to(at(left, top));
    cushion.line_to(at(left, bend));
    cushion.curve_to(at(left, bottom), at(mid - 20.0, bottom), at(mid, bottom));
    cushion.curve_to(at(mid + 20.0, bottom), at(right, bottom), at(right, bend));
    cushion.line_to(at(right, top));

    SeatShape {
        backrest,
        cushion,
        stroke_width: box_w * style.seat_stroke_ratio,
        label_anchor: backrest.rect().center(),
        label_size: box_w * style.seat_label_ratio,
    }
}
