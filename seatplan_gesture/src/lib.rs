// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Gesture: input recognition for a pan/zoom seat map.
//!
//! This crate turns raw input into changes of a [`seatplan_view::Viewport`]
//! and into taps:
//!
//! - [`drag`]: single pointer tracking with movement deltas and travel.
//! - [`pinch`]: incremental two-finger zoom.
//! - [`GestureController`]: the state machine that combines both with
//!   wheel zoom and tap detection.
//!
//! Events are plain screen-space values; the crate does not depend on any
//! windowing or DOM layer. A [`GestureOutcome::Tap`] carries the screen point
//! only. Deciding what was tapped is the job of `seatplan_hit`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use seatplan_gesture::{GestureController, GestureOutcome, TouchPoint};
//! use seatplan_view::Viewport;
//!
//! let mut view = Viewport::new();
//! view.set_view_size(Size::new(800.0, 600.0));
//! let mut gestures = GestureController::default();
//!
//! // Spread two fingers from 100px to 200px apart around (400, 300).
//! gestures.touch_start(&[TouchPoint::new(0, 350.0, 300.0), TouchPoint::new(1, 450.0, 300.0)]);
//! let outcome = gestures.touch_move(
//!     &mut view,
//!     &[TouchPoint::new(0, 300.0, 300.0), TouchPoint::new(1, 500.0, 300.0)],
//! );
//! assert_eq!(outcome, GestureOutcome::ViewChanged);
//! assert_eq!(view.scale(), 2.0);
//!
//! // Lifting both fingers after a pinch never counts as a tap.
//! gestures.touch_end(&[TouchPoint::new(1, 500.0, 300.0)], Point::new(300.0, 300.0));
//! assert_eq!(gestures.touch_end(&[], Point::new(500.0, 300.0)), GestureOutcome::Ignored);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
pub mod drag;
pub mod pinch;

pub use config::GestureConfig;
pub use controller::{GestureController, GestureOutcome, GesturePhase, TouchId, TouchPoint};
