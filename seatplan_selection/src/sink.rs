// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use seatplan_geometry::{Seat, SeatId};

use crate::{BookingStore, Selection};

/// Read access to the set of selected seats.
pub trait SelectionSource {
    /// Returns `true` if the seat with this id is selected.
    fn is_selected(&self, id: &str) -> bool;

    /// A counter that changes whenever the selection changes.
    ///
    /// Readers compare it against the last value they saw to decide whether
    /// to redraw.
    fn revision(&self) -> u64;
}

impl SelectionSource for Selection<SeatId> {
    fn is_selected(&self, id: &str) -> bool {
        self.iter().any(|selected| selected.as_str() == id)
    }

    fn revision(&self) -> u64 {
        Self::revision(self)
    }
}

impl SelectionSource for BookingStore {
    fn is_selected(&self, id: &str) -> bool {
        Self::is_selected(self, id)
    }

    fn revision(&self) -> u64 {
        Self::revision(self)
    }
}

/// Receiver of toggle requests for free seats the user tapped.
///
/// Whether a toggle is honoured (for example when the order is full) is up to
/// the sink.
pub trait ToggleSink {
    /// The user asked to flip the selection state of `seat`.
    fn toggle(&mut self, seat: &Seat);
}

impl ToggleSink for BookingStore {
    fn toggle(&mut self, seat: &Seat) {
        if let Err(err) = self.toggle_seat(seat) {
            tracing::debug!(seat = %seat.id, %err, "toggle refused");
        }
    }
}

impl ToggleSink for Selection<SeatId> {
    fn toggle(&mut self, seat: &Seat) {
        Self::toggle(self, seat.id.clone());
    }
}

impl<F: FnMut(&Seat)> ToggleSink for F {
    fn toggle(&mut self, seat: &Seat) {
        self(seat);
    }
}
