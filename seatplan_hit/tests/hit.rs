// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking through arbitrary viewport transforms.

use kurbo::Vec2;
use proptest::prelude::*;
use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
use seatplan_hit::{HitParams, pick, toggle_target};
use seatplan_view::Transform;

/// A `cols` x `rows` grid of 40px seats on a 50px pitch; every third seat is taken.
fn grid(cols: u32, rows: u32) -> Geometry {
    let mut records = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let id = format!("{r}-{c}");
            let record = SeatRecord::place(
                &id,
                &r.to_string(),
                &c.to_string(),
                f64::from(c) * 50.0,
                f64::from(r) * 50.0,
            );
            records.push(if (r * cols + c) % 3 == 0 { record.taken() } else { record });
        }
    }
    Geometry::build(&records, &GeometryConfig::default())
}

fn arb_transform() -> impl Strategy<Value = Transform> {
    (-2000.0_f64..2000.0, -2000.0_f64..2000.0, 0.2_f64..4.0).prop_map(|(x, y, scale)| Transform {
        offset: Vec2::new(x, y),
        scale,
    })
}

proptest! {
    #[test]
    fn seat_centers_pick_their_seat(transform in arb_transform(), cols in 1_u32..12, rows in 1_u32..8) {
        let geometry = grid(cols, rows);
        for seat in geometry.seats() {
            let screen = transform.world_to_screen(seat.center());
            let hit = pick(screen, &transform, geometry.seats());
            prop_assert_eq!(hit.map(|s| &s.id), Some(&seat.id));
        }
    }

    #[test]
    fn taken_seats_are_never_toggled(
        transform in arb_transform(),
        tolerance in 0.0_f64..30.0,
        fx in 0.0_f64..1.0,
        fy in 0.0_f64..1.0,
    ) {
        let geometry = grid(6, 4);
        let params = HitParams::with_tolerance(tolerance);
        for seat in geometry.seats().iter().filter(|s| !s.is_free()) {
            let inside = kurbo::Point::new(seat.x + fx * seat.w, seat.y + fy * seat.h);
            let screen = transform.world_to_screen(inside);
            let target = toggle_target(screen, &transform, geometry.seats(), &params);
            prop_assert!(target.is_none_or(|s| s.is_free() && s.id != seat.id));
        }
    }
}

#[test]
fn free_seat_is_toggle_target() {
    let geometry = grid(3, 1);
    let transform = Transform {
        offset: Vec2::new(10.0, 10.0),
        scale: 1.5,
    };
    let second = geometry.seat("0-1").unwrap();
    let screen = transform.world_to_screen(second.center());
    let target = toggle_target(screen, &transform, geometry.seats(), &HitParams::default());
    assert_eq!(target.map(|s| s.id.as_str()), Some("0-1"));
}
