// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use seatplan_geometry::GeometryConfig;
use seatplan_gesture::GestureConfig;
use seatplan_render::HallStyle;
use seatplan_view::{FitConfig, ZoomLimits};
use serde::{Deserialize, Serialize};

use crate::SeatMapError;

/// All tunables of a [`SeatMap`](crate::SeatMap).
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides:
///
/// ```
/// use seatplan::SeatMapConfig;
///
/// let config = SeatMapConfig::from_json_str(r#"{ "gestures": { "tap_slop": 8.0 } }"#).unwrap();
/// assert_eq!(config.gestures.tap_slop, 8.0);
/// assert_eq!(config.geometry.seat_size, 40.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatMapConfig {
    /// Seat size and coordinate anchor.
    pub geometry: GeometryConfig,
    /// Padding and scale range of the automatic fit.
    pub fit: FitConfig,
    /// Scale range reachable by wheel and pinch.
    pub zoom: ZoomLimits,
    /// Tap slop, wheel sensitivity and pinch guard.
    pub gestures: GestureConfig,
    /// Layout constants of the drawing.
    pub style: HallStyle,
    /// How far from a seat, in screen pixels, a tap still selects it.
    pub tap_tolerance: f64,
}

impl SeatMapConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, SeatMapError> {
        serde_json::from_str(json).map_err(SeatMapError::Config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SeatMapError> {
        serde_json::to_string_pretty(self).map_err(SeatMapError::Config)
    }
}
