// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Inclusive range of allowed scale factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

/// Limits for scale changes driven by the user (wheel and pinch).
pub const INTERACTIVE_ZOOM: ZoomLimits = ZoomLimits { min: 0.2, max: 4.0 };

/// Limits for the automatic fit.
///
/// The cap is lower than [`INTERACTIVE_ZOOM`] so that a small hall does not
/// open blown up; the user can still zoom further in by hand.
pub const AUTO_FIT_ZOOM: ZoomLimits = ZoomLimits { min: 0.2, max: 1.5 };

impl ZoomLimits {
    /// Clamps `scale` into the range.
    ///
    /// A NaN input maps to `min`.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies within the range.
    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }

    /// Swaps the bounds if needed and replaces unusable values.
    ///
    /// Non-finite or non-positive bounds fall back to [`INTERACTIVE_ZOOM`].
    #[must_use]
    pub fn normalized(self) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let min = if usable(self.min) { self.min } else { INTERACTIVE_ZOOM.min };
        let max = if usable(self.max) { self.max } else { INTERACTIVE_ZOOM.max };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns the overlap of two ranges, or `outer` if they do not overlap.
    #[must_use]
    pub fn intersect(self, outer: Self) -> Self {
        let min = self.min.max(outer.min);
        let max = self.max.min(outer.max);
        if min <= max { Self { min, max } } else { outer }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        INTERACTIVE_ZOOM
    }
}

/// Parameters for fitting content into the surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Total horizontal padding in screen pixels, split evenly left and right.
    pub padding_x: f64,
    /// Total vertical padding in screen pixels, split evenly top and bottom.
    ///
    /// Larger than the horizontal padding to leave room for the screen
    /// indicator above the seats and the legend below.
    pub padding_y: f64,
    /// Scale range for the fit.
    pub limits: ZoomLimits,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            padding_x: 80.0,
            padding_y: 160.0,
            limits: AUTO_FIT_ZOOM,
        }
    }
}
