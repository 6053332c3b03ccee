// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Tuning for gesture recognition.
///
/// All distances are in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Furthest a pointer may travel between press and release and still
    /// count as a tap.
    pub tap_slop: f64,
    /// Scale change per unit of wheel delta.
    ///
    /// A wheel event with vertical delta `d` multiplies the scale by
    /// `1 - d * wheel_zoom_intensity`, so scrolling up (negative `d`) zooms in.
    pub wheel_zoom_intensity: f64,
    /// Finger separation below which a pinch produces no zoom.
    ///
    /// Guards the distance ratio against division by (nearly) zero when two
    /// touches land on the same spot.
    pub min_pinch_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_slop: 4.0,
            wheel_zoom_intensity: 0.0015,
            min_pinch_distance: 1.0,
        }
    }
}
