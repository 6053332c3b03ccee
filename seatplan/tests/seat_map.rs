// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of the `SeatMap` component.

use kurbo::{Point, Vec2};
use proptest::prelude::*;
use seatplan::{DrawCommand, GestureOutcome, SeatMap, SeatMapConfig, SeatMapError, TouchPoint};
use seatplan_geometry::{Rejection, Seat, SeatId};
use seatplan_render::{Invalidation, Palette};
use seatplan_selection::{BookingStore, Selection};
use seatplan_view::INTERACTIVE_ZOOM;

/// Ten seats in one row plus a scene object and a record without an id.
const ROW_JSON: &str = r#"[
    {"ObjectType": "Scene", "ID": 0, "CX": 0, "CY": -100},
    {"ID": 1,  "Row": 1, "Seat": 1,  "CX": 0,   "CY": 0, "avail": 1, "Price": 300},
    {"ID": 2,  "Row": 1, "Seat": 2,  "CX": 40,  "CY": 0, "avail": 0, "Price": 300},
    {"ID": 3,  "Row": 1, "Seat": 3,  "CX": 80,  "CY": 0, "avail": 1, "Price": 300},
    {"ID": 4,  "Row": 1, "Seat": 4,  "CX": 120, "CY": 0, "avail": 1, "Price": 300},
    {"ID": 5,  "Row": 1, "Seat": 5,  "CX": 160, "CY": 0, "avail": 1, "Price": 300},
    {"ID": 6,  "Row": 1, "Seat": 6,  "CX": 200, "CY": 0, "avail": 1, "Price": 300},
    {"ID": 7,  "Row": 1, "Seat": 7,  "CX": 240, "CY": 0, "avail": 1, "Price": 300},
    {"ID": 8,  "Row": 1, "Seat": 8,  "CX": 280, "CY": 0, "avail": 1, "Price": 300},
    {"ID": 9,  "Row": 1, "Seat": 9,  "CX": 320, "CY": 0, "avail": 1, "Price": 300},
    {"ID": 10, "Row": 1, "Seat": 10, "CX": 360, "CY": 0, "avail": 1, "Price": 300},
    {"Row": 2, "Seat": 1, "CX": 0, "CY": 50, "avail": 1}
]"#;

fn loaded() -> SeatMap {
    let mut map = SeatMap::default();
    map.load_json(ROW_JSON).unwrap();
    map.resize(800.0, 600.0);
    map
}

fn screen_of(map: &SeatMap, id: &str) -> Point {
    let seat = map.geometry().seat(id).unwrap();
    map.transform().world_to_screen(seat.center())
}

fn click(map: &mut SeatMap, at: Point, sink: &mut BookingStore) -> GestureOutcome {
    map.pointer_down(at);
    map.pointer_up(at, sink)
}

#[test]
fn load_keeps_places_and_reports_rejections() {
    let map = loaded();
    assert_eq!(map.geometry().len(), 10);
    assert_eq!(map.rejections().len(), 2);
    assert!(matches!(map.rejections()[0], Rejection::NotASeat { .. }));
    assert!(matches!(map.rejections()[1], Rejection::MissingId));
}

#[test]
fn ten_seat_row_fits_at_capped_scale() {
    let map = loaded();
    let t = map.transform();
    assert_eq!(t.scale, 1.5);
    assert_eq!(t.world_to_screen(Point::new(200.0, 20.0)), Point::new(400.0, 300.0));
}

#[test]
fn fit_waits_for_both_data_and_size() {
    let mut map = SeatMap::default();
    map.resize(800.0, 600.0);
    assert_eq!(map.transform().scale, 1.0);
    map.load_json(ROW_JSON).unwrap();
    assert_eq!(map.transform().scale, 1.5);

    // User zooms; a later resize does not refit.
    map.wheel(Point::new(400.0, 300.0), 100.0);
    let zoomed = map.transform();
    map.resize(1024.0, 768.0);
    assert_eq!(map.transform(), zoomed);

    // A new hall fits again.
    map.load_json(ROW_JSON).unwrap();
    assert_ne!(map.transform(), zoomed);
    assert!(map.viewport().is_centered());
}

#[test]
fn resize_floors_and_ignores_unusable_sizes() {
    let mut map = SeatMap::default();
    assert!(map.resize(640.7, 480.2));
    assert_eq!(map.viewport().view_size(), kurbo::Size::new(640.0, 480.0));
    assert!(!map.resize(640.9, 480.9));
    assert!(!map.resize(0.4, 300.0));
    assert!(!map.resize(-5.0, 300.0));
    assert!(!map.resize(f64::NAN, 300.0));
    assert_eq!(map.viewport().view_size(), kurbo::Size::new(640.0, 480.0));
}

#[test]
fn click_toggles_free_seats_only() {
    let mut map = loaded();
    let mut store = BookingStore::new();

    let free = screen_of(&map, "1");
    assert_eq!(click(&mut map, free, &mut store), GestureOutcome::Tap(free));
    assert!(store.is_selected("1"));

    let taken = screen_of(&map, "2");
    click(&mut map, taken, &mut store);
    assert!(!store.is_selected("2"));

    click(&mut map, free, &mut store);
    assert!(store.selected_seats().is_empty());
}

#[test]
fn drag_pans_without_toggling() {
    let mut map = loaded();
    let mut store = BookingStore::new();
    let start = screen_of(&map, "3");
    let before = map.transform();

    map.pointer_down(start);
    map.pointer_move(start + Vec2::new(30.0, 0.0));
    let outcome = map.pointer_up(start + Vec2::new(30.0, 0.0), &mut store);

    assert_eq!(outcome, GestureOutcome::Ignored);
    assert!(store.selected_seats().is_empty());
    assert_eq!(map.transform().offset, before.offset + Vec2::new(30.0, 0.0));
}

#[test]
fn touch_tap_toggles_through_a_closure() {
    let mut map = loaded();
    let mut tapped: Vec<SeatId> = Vec::new();
    let at = screen_of(&map, "5");

    map.touch_start(&[TouchPoint::new(3, at.x, at.y)]);
    let mut sink = |seat: &Seat| tapped.push(seat.id.clone());
    map.touch_end(&[], at, &mut sink);

    assert_eq!(tapped, [SeatId::new("5")]);
}

#[test]
fn recenter_restores_the_fit() {
    let mut map = loaded();
    let fitted = map.transform();
    map.wheel(Point::new(10.0, 10.0), -300.0);
    map.pointer_down(Point::new(100.0, 100.0));
    map.pointer_move(Point::new(250.0, 40.0));
    map.pointer_cancel();
    assert_ne!(map.transform(), fitted);

    assert!(map.recenter());
    assert_eq!(map.transform(), fitted);
}

#[test]
fn frames_are_coalesced() {
    let mut map = loaded();
    let selection = Selection::<SeatId>::new();
    assert!(map.needs_frame());
    assert!(map.frame(&selection).is_some());
    assert!(map.frame(&selection).is_none());

    for _ in 0..5 {
        map.wheel(Point::new(400.0, 300.0), -20.0);
    }
    assert!(map.needs_frame());
    assert!(map.frame(&selection).is_some());
    assert!(!map.needs_frame());

    // Same selection revision as last drawn: nothing to do.
    assert!(!map.sync_selection(&selection));
    assert!(map.frame(&selection).is_none());
}

#[test]
fn no_frame_without_a_size() {
    let mut map = SeatMap::default();
    map.load_json(ROW_JSON).unwrap();
    assert!(map.needs_frame());
    assert!(map.frame(&Selection::<SeatId>::new()).is_none());
}

#[test]
fn empty_hall_draws_background_only() {
    let mut map = SeatMap::default();
    map.load_json("[]").unwrap();
    map.resize(320.0, 200.0);
    let frame = map.frame(&Selection::<SeatId>::new()).unwrap();
    assert_eq!(frame, [DrawCommand::Clear(map.palette().background)]);
    assert!(!map.recenter());
}

#[test]
fn malformed_json_keeps_the_current_hall() {
    let mut map = loaded();
    let err = map.load_json("{not json").unwrap_err();
    assert!(matches!(err, SeatMapError::Geometry(_)));
    assert!(err.to_string().starts_with("malformed seat list"));
    assert_eq!(map.geometry().len(), 10);
}

#[test]
fn one_badly_typed_record_does_not_lose_the_hall() {
    let mut map = loaded();
    map.load_json(
        r#"[
            {"ID": 1, "Row": 1, "Seat": 1, "CX": 0, "CY": 0, "avail": 1},
            {"ID": 2, "Row": 1, "Seat": 2, "CX": 40, "CY": 0, "avail": 1, "ObjectType": 7}
        ]"#,
    )
    .unwrap();
    assert_eq!(map.geometry().len(), 1);
    assert!(map.geometry().seat("1").is_some());
    assert!(matches!(
        map.rejections(),
        [Rejection::Malformed { index: 1, .. }]
    ));
}

#[test]
fn palette_change_redraws_for_style() {
    let mut map = loaded();
    let store = BookingStore::new();
    assert!(map.frame(&store).is_some());

    map.set_palette(Palette::default());
    assert!(!map.needs_frame());

    map.set_palette(Palette {
        background: peniko::Color::WHITE,
        ..Palette::default()
    });
    assert_eq!(map.pending_redraw(), Invalidation::STYLE);
    let frame = map.frame(&store).unwrap();
    assert_eq!(frame[0], DrawCommand::Clear(peniko::Color::WHITE));
}

#[test]
fn config_round_trips_and_rejects_garbage() {
    let config = SeatMapConfig {
        tap_tolerance: 6.0,
        ..SeatMapConfig::default()
    };
    let json = config.to_json_string().unwrap();
    assert_eq!(SeatMapConfig::from_json_str(&json).unwrap(), config);

    let err = SeatMapConfig::from_json_str(r#"{"zoom": {"min": "small"}}"#).unwrap_err();
    assert!(matches!(err, SeatMapError::Config(_)));
    assert!(err.to_string().starts_with("invalid seat map config"));
}

#[test]
fn tap_tolerance_reaches_nearby_seats() {
    let config = SeatMapConfig {
        tap_tolerance: 10.0,
        ..SeatMapConfig::default()
    };
    let mut map = SeatMap::new(config);
    map.load_json(ROW_JSON).unwrap();
    map.resize(800.0, 600.0);
    let mut store = BookingStore::new();

    // 5px below the bottom edge of seat 4.
    let seat = map.geometry().seat("4").unwrap();
    let below = map.transform().world_to_screen(Point::new(seat.center().x, seat.y + seat.h)) + Vec2::new(0.0, 5.0);
    click(&mut map, below, &mut store);
    assert!(store.is_selected("4"));
}

#[derive(Clone, Debug)]
enum Event {
    Wheel(f64, f64, f64),
    Drag(f64, f64),
    Pinch(f64, f64),
    Recenter,
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0.0_f64..800.0, 0.0_f64..600.0, -2000.0_f64..2000.0).prop_map(|(x, y, d)| Event::Wheel(x, y, d)),
        (-400.0_f64..400.0, -400.0_f64..400.0).prop_map(|(dx, dy)| Event::Drag(dx, dy)),
        (1.0_f64..300.0, 1.0_f64..300.0).prop_map(|(a, b)| Event::Pinch(a, b)),
        Just(Event::Recenter),
    ]
}

proptest! {
    #[test]
    fn scale_stays_in_bounds(events in prop::collection::vec(arb_event(), 0..30)) {
        let mut map = loaded();
        let mut store = BookingStore::new();
        for event in events {
            match event {
                Event::Wheel(x, y, d) => { map.wheel(Point::new(x, y), d); }
                Event::Drag(dx, dy) => {
                    map.pointer_down(Point::new(400.0, 300.0));
                    map.pointer_move(Point::new(400.0 + dx, 300.0 + dy));
                    map.pointer_up(Point::new(400.0 + dx, 300.0 + dy), &mut store);
                }
                Event::Pinch(from, to) => {
                    map.touch_start(&[TouchPoint::new(0, 400.0 - from / 2.0, 300.0), TouchPoint::new(1, 400.0 + from / 2.0, 300.0)]);
                    map.touch_move(&[TouchPoint::new(0, 400.0 - to / 2.0, 300.0), TouchPoint::new(1, 400.0 + to / 2.0, 300.0)]);
                    map.touch_end(&[TouchPoint::new(1, 400.0 + to / 2.0, 300.0)], Point::new(400.0 - to / 2.0, 300.0), &mut store);
                    map.touch_end(&[], Point::new(400.0 + to / 2.0, 300.0), &mut store);
                }
                Event::Recenter => { map.recenter(); }
            }
            let scale = map.transform().scale;
            prop_assert!(INTERACTIVE_ZOOM.contains(scale), "scale {} out of range", scale);
            prop_assert!(map.transform().is_valid());
        }
    }
}
