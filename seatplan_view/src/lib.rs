// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan View: the pan/zoom viewport of a seat map.
//!
//! This crate provides a small, headless model of the on-screen view of a
//! hall plan. It focuses on:
//! - The world → screen [`Transform`] (`screen = world * scale + offset`).
//! - Coordinate conversion in both directions, for drawing and picking.
//! - Zooming around an anchor so the point under the cursor or between the
//!   fingers stays put.
//! - Fitting the hall into the surface with padding, once automatically per
//!   loaded hall and again when the user asks to recenter.
//!
//! It does **not** interpret input events. Gesture recognition lives in
//! `seatplan_gesture`, which drives a [`Viewport`] through
//! [`Viewport::apply_pan`] and [`Viewport::apply_zoom`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use seatplan_view::{AUTO_FIT_ZOOM, Viewport};
//!
//! let mut view = Viewport::new();
//! view.set_view_size(Size::new(800.0, 600.0));
//!
//! // A single row of ten 40px seats is small: the fit is capped.
//! let hall = Rect::new(0.0, 0.0, 400.0, 40.0);
//! assert!(view.auto_fit(hall));
//! assert_eq!(view.scale(), AUTO_FIT_ZOOM.max);
//!
//! // Zoom in around the cursor; the world point under it does not move.
//! let cursor = Point::new(200.0, 300.0);
//! let before = view.screen_to_world(cursor);
//! view.apply_zoom(cursor, 1.25);
//! let after = view.screen_to_world(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Zoom limits
//!
//! Two ranges are kept apart on purpose: [`INTERACTIVE_ZOOM`] bounds what the
//! user can reach by wheel or pinch, while [`AUTO_FIT_ZOOM`] bounds the
//! automatic fit so small halls do not open over-magnified.
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod viewport;

pub use limits::{AUTO_FIT_ZOOM, FitConfig, INTERACTIVE_ZOOM, ZoomLimits};
pub use viewport::{Transform, Viewport, ViewportDebugInfo};
