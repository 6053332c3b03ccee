// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Selection: which seats the user has picked.
//!
//! The seat map itself never owns the selection. It reads it through
//! [`SelectionSource`] to highlight seats, and sends toggle requests to a
//! [`ToggleSink`] when the user taps a free seat. This crate provides the
//! pieces on both sides:
//!
//! - [`Selection`]: a small ordered set of keys with a revision counter that
//!   bumps only on real change.
//! - [`BookingStore`]: an observable store of selected seats with a running
//!   total price and a cap on how many seats one order may hold. Listeners
//!   subscribed with [`BookingStore::subscribe`] run after every change.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
//! use seatplan_selection::{BookingStore, SelectionSource, ToggleSink};
//! use std::{cell::Cell, rc::Rc};
//!
//! let geometry = Geometry::build(
//!     &[SeatRecord::place("7", "1", "7", 0.0, 0.0).with_price(350.0)],
//!     &GeometryConfig::default(),
//! );
//! let seat = geometry.seat("7").unwrap();
//!
//! let mut store = BookingStore::new();
//! let changes = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&changes);
//! store.subscribe(move |_| seen.set(seen.get() + 1));
//!
//! store.toggle(seat);
//! assert!(store.is_selected("7"));
//! assert_eq!(store.total_price(), 350.0);
//!
//! store.toggle(seat);
//! assert!(!store.is_selected("7"));
//! assert_eq!(changes.get(), 2);
//! ```

mod selection;
mod sink;
mod store;

pub use selection::Selection;
pub use sink::{SelectionSource, ToggleSink};
pub use store::{BookingError, BookingStore, DEFAULT_MAX_SEATS, SubscriptionId};
