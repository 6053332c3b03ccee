// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing.
//!
//! Any number of state changes between two frames produce one redraw. The
//! host asks for an animation frame only when [`RedrawScheduler::invalidate`]
//! returns `true`, then drains the accumulated reasons with
//! [`RedrawScheduler::take_frame`] when the frame callback fires.
//!
//! ```
//! use seatplan_render::{Invalidation, RedrawScheduler};
//!
//! let mut scheduler = RedrawScheduler::new();
//! assert!(scheduler.invalidate(Invalidation::TRANSFORM));
//! assert!(!scheduler.invalidate(Invalidation::SELECTION));
//!
//! let reasons = scheduler.take_frame().unwrap();
//! assert_eq!(reasons, Invalidation::TRANSFORM | Invalidation::SELECTION);
//! assert!(scheduler.take_frame().is_none());
//! ```

bitflags::bitflags! {
    /// Why a redraw is needed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// The seat list was replaced.
        const GEOMETRY  = 0b0000_0001;
        /// The pan/zoom transform changed.
        const TRANSFORM = 0b0000_0010;
        /// The surface was resized.
        const VIEWPORT  = 0b0000_0100;
        /// The set of selected seats changed.
        const SELECTION = 0b0000_1000;
        /// Colors or other presentation settings changed.
        const STYLE     = 0b0001_0000;
    }
}

/// Accumulates [`Invalidation`]s until the next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawScheduler {
    pending: Invalidation,
    frames: u64,
}

impl RedrawScheduler {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Invalidation::empty(),
            frames: 0,
        }
    }

    /// Records a reason to redraw.
    ///
    /// Returns `true` only for the first non-empty invalidation since the
    /// last frame, which is when the host should request a frame.
    pub fn invalidate(&mut self, reasons: Invalidation) -> bool {
        let was_idle = self.pending.is_empty();
        self.pending |= reasons;
        was_idle && !self.pending.is_empty()
    }

    /// Returns `true` if a frame is owed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Reasons accumulated so far, without draining them.
    #[must_use]
    pub fn pending(&self) -> Invalidation {
        self.pending
    }

    /// Drains the pending reasons for the frame about to be drawn.
    ///
    /// Returns `None` if nothing changed since the previous frame.
    pub fn take_frame(&mut self) -> Option<Invalidation> {
        if self.pending.is_empty() {
            return None;
        }
        self.frames += 1;
        Some(core::mem::replace(&mut self.pending, Invalidation::empty()))
    }

    /// Number of frames handed out so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_invalidation_requests_nothing() {
        let mut scheduler = RedrawScheduler::new();
        assert!(!scheduler.invalidate(Invalidation::empty()));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn one_request_per_frame() {
        let mut scheduler = RedrawScheduler::new();
        let requests = (0..10)
            .filter(|_| scheduler.invalidate(Invalidation::TRANSFORM))
            .count();
        assert_eq!(requests, 1);
        assert!(scheduler.take_frame().is_some());
        assert!(scheduler.invalidate(Invalidation::VIEWPORT));
        assert_eq!(scheduler.take_frame(), Some(Invalidation::VIEWPORT));
        assert_eq!(scheduler.frames(), 2);
    }
}
