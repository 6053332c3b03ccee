// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan: an interactive cinema seat map.
//!
//! [`SeatMap`] puts the `seatplan_*` crates together into one component a
//! host can mount on a drawing surface:
//!
//! - `seatplan_geometry` turns booking API records into seats, bounds and
//!   row labels;
//! - `seatplan_view` holds the pan/zoom transform and fits the hall once per
//!   load;
//! - `seatplan_gesture` turns mouse, wheel and touch input into pans, zooms
//!   and taps;
//! - `seatplan_hit` finds the free seat under a tap;
//! - `seatplan_render` draws the frame as plain commands and coalesces
//!   redraws;
//! - `seatplan_selection` provides the booking store the taps toggle.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use seatplan::{SeatMap, SeatMapConfig};
//! use seatplan_selection::BookingStore;
//!
//! let mut map = SeatMap::new(SeatMapConfig::default());
//! map.load_json(r#"[
//!     {"ID": 1, "Row": 1, "Seat": 1, "CX": 0,  "CY": 0, "avail": 1, "Price": 350},
//!     {"ID": 2, "Row": 1, "Seat": 2, "CX": 44, "CY": 0, "avail": 1, "Price": 350}
//! ]"#).unwrap();
//! map.resize(800.0, 600.0);
//!
//! // Click the middle of the first seat.
//! let mut store = BookingStore::new();
//! let target = map.transform().world_to_screen(Point::new(20.0, 20.0));
//! map.pointer_down(target);
//! map.pointer_up(target, &mut store);
//! assert!(store.is_selected("1"));
//!
//! // The change is picked up by the next frame.
//! map.sync_selection(&store);
//! assert!(map.needs_frame());
//! let commands = map.frame(&store).unwrap();
//! assert!(!commands.is_empty());
//! assert!(map.frame(&store).is_none());
//! ```

mod config;
mod error;
mod seat_map;

pub use config::SeatMapConfig;
pub use error::SeatMapError;
pub use seat_map::SeatMap;

pub use seatplan_gesture::{GestureOutcome, GesturePhase, TouchPoint};
pub use seatplan_render::{DrawCommand, LegendItem, Palette};
