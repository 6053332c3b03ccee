// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The observable booking store.

use core::fmt;

use seatplan_geometry::{Seat, SeatId};
use thiserror::Error;
use tracing::trace;

/// How many seats one order may hold unless configured otherwise.
pub const DEFAULT_MAX_SEATS: usize = 5;

/// Why a seat could not be added to the booking.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The order already holds the maximum number of seats.
    #[error("cannot select more than {max} seats")]
    Full {
        /// The configured maximum.
        max: usize,
    },
    /// The seat is already part of the order.
    #[error("seat {id} is already selected")]
    AlreadySelected {
        /// The seat id.
        id: SeatId,
    },
    /// The seat is sold or reserved.
    #[error("seat {id} is not available")]
    Unavailable {
        /// The seat id.
        id: SeatId,
    },
}

/// Handle returned by [`BookingStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BookingStore)>;

/// Selected seats for one order, with a running total and change listeners.
///
/// Every mutation that actually changes the store bumps
/// [`BookingStore::revision`] and then calls each listener once with the
/// updated store. Rejected or no-op mutations notify nobody.
pub struct BookingStore {
    seats: Vec<Seat>,
    total_price: f64,
    max_seats: usize,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingStore")
            .field("seats", &self.seats)
            .field("total_price", &self.total_price)
            .field("max_seats", &self.max_seats)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    /// Creates an empty store allowing [`DEFAULT_MAX_SEATS`] seats.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_seats(DEFAULT_MAX_SEATS)
    }

    /// Creates an empty store allowing `max_seats` seats.
    #[must_use]
    pub fn with_max_seats(max_seats: usize) -> Self {
        Self {
            seats: Vec::new(),
            total_price: 0.0,
            max_seats,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Selected seats in the order they were added.
    #[must_use]
    pub fn selected_seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Sum of the prices of the selected seats.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Maximum number of seats in one order.
    #[must_use]
    pub fn max_seats(&self) -> usize {
        self.max_seats
    }

    /// Returns `true` if no further seat can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.seats.len() >= self.max_seats
    }

    /// Returns `true` if the seat with this id is selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Counter bumped on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds `seat` to the order.
    ///
    /// Fails without side effects when the order is full, the seat is
    /// already selected, or the seat is taken.
    pub fn add_seat(&mut self, seat: &Seat) -> Result<(), BookingError> {
        if !seat.is_free() {
            return Err(BookingError::Unavailable {
                id: seat.id.clone(),
            });
        }
        if self.is_selected(seat.id.as_str()) {
            return Err(BookingError::AlreadySelected {
                id: seat.id.clone(),
            });
        }
        if self.is_full() {
            return Err(BookingError::Full {
                max: self.max_seats,
            });
        }
        self.seats.push(seat.clone());
        self.changed();
        Ok(())
    }

    /// Removes the seat with this id. Returns `true` if it was selected.
    pub fn remove_seat(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.seats.remove(idx);
        self.changed();
        true
    }

    /// Removes `seat` if selected, otherwise adds it.
    ///
    /// Returns whether the seat is selected afterwards.
    pub fn toggle_seat(&mut self, seat: &Seat) -> Result<bool, BookingError> {
        if self.remove_seat(seat.id.as_str()) {
            return Ok(false);
        }
        self.add_seat(seat)?;
        Ok(true)
    }

    /// Deselects every seat.
    pub fn clear_seats(&mut self) {
        if self.seats.is_empty() {
            return;
        }
        self.seats.clear();
        self.changed();
    }

    /// Changes the seat cap.
    ///
    /// Seats already selected beyond a lowered cap stay selected; only new
    /// additions are refused.
    pub fn set_max_seats(&mut self, max_seats: usize) {
        if self.max_seats == max_seats {
            return;
        }
        self.max_seats = max_seats;
        self.changed();
    }

    /// Registers a listener called after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Self) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.seats.iter().position(|seat| seat.id.as_str() == id)
    }

    fn changed(&mut self) {
        self.total_price = self.seats.iter().map(|seat| seat.price).sum();
        self.revision = self.revision.wrapping_add(1);
        trace!(
            seats = self.seats.len(),
            total = self.total_price,
            revision = self.revision,
            "booking changed"
        );

        let mut listeners = core::mem::take(&mut self.listeners);
        for (_, listener) in &mut listeners {
            listener(self);
        }
        self.listeners = listeners;
    }
}
