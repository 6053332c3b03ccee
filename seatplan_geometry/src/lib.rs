// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Geometry: seat records in, positioned seat rectangles out.
//!
//! The booking API delivers a hall as a loosely typed list of place records.
//! This crate turns that list into an immutable [`Geometry`] snapshot:
//! - Every retained record becomes a [`Seat`] with a fixed-size world
//!   rectangle, a [`SeatStatus`] and its labels.
//! - The axis-aligned [`Bounds`] of all seat rectangles are accumulated once.
//! - Each distinct row gets a [`RowLabel`] at its vertical center.
//!
//! Ingestion is an explicit validation step: [`SeatRecord::validate`] yields
//! either a [`Seat`] or a [`Rejection`]. Rejected records are simply left out
//! of the snapshot; a hall with zero valid seats produces an empty geometry
//! whose [`Geometry::bounds`] is `None`, which callers treat as "not ready".
//!
//! ## Minimal example
//!
//! ```rust
//! use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
//!
//! let records = [
//!     SeatRecord::place("a1", "1", "1", 0.0, 0.0),
//!     SeatRecord::place("a2", "1", "2", 40.0, 0.0).taken(),
//! ];
//! let geometry = Geometry::build(&records, &GeometryConfig::default());
//!
//! assert_eq!(geometry.len(), 2);
//! let bounds = geometry.bounds().unwrap();
//! assert_eq!(bounds.max_x, 80.0);
//! assert!(!geometry.seat("a2").unwrap().is_free());
//! ```
//!
//! Selection is deliberately not a seat field. Seats are never mutated after
//! a snapshot is built; the selected set lives with the booking store.

mod bounds;
mod geometry;
mod record;
mod seat;

pub use bounds::Bounds;
pub use geometry::{Geometry, GeometryConfig, GeometryError, RowLabel, SeatAnchor};
pub use record::{Rejection, Scalar, SeatRecord};
pub use seat::{Seat, SeatId, SeatStatus};

/// Default edge length of a seat in world units.
pub const DEFAULT_SEAT_SIZE: f64 = 40.0;
