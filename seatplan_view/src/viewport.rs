// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::{FitConfig, INTERACTIVE_ZOOM, ZoomLimits};

/// Uniform world → screen mapping: `screen = world * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Screen-space translation applied after scaling.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Transform {
    /// The identity mapping.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Maps a world point to screen space.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset.x,
            pt.y * self.scale + self.offset.y,
        )
    }

    /// Maps a screen point back to world space.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }

    /// Returns the mapping as an affine transform, for renderers.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Returns `true` if offset and scale are finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.offset.x.is_finite()
            && self.offset.y.is_finite()
            && self.scale.is_finite()
            && self.scale > 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pan/zoom viewport over a hall plan.
///
/// `Viewport` tracks the size of the on-screen surface and a uniform
/// pan+zoom [`Transform`] mapping world coordinates into it. It can be used
/// to:
/// - Convert points and rectangles between world and screen coordinates.
/// - Pan by screen deltas and zoom around a screen anchor.
/// - Fit content into the surface, once automatically per loaded hall and
///   again on request.
///
/// Every mutation is validated: an update that would produce a non-finite
/// transform is dropped and the previous transform stays in place.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_size: Size,
    transform: Transform,
    zoom_limits: ZoomLimits,
    fit: FitConfig,
    centered: bool,
}

impl Viewport {
    /// Creates a viewport with an identity transform and zero size.
    ///
    /// Interactive zoom is limited to [`INTERACTIVE_ZOOM`] and fitting uses
    /// [`FitConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(INTERACTIVE_ZOOM, FitConfig::default())
    }

    /// Creates a viewport with explicit zoom limits and fit parameters.
    ///
    /// The fit limits are intersected with the interactive limits so that a
    /// fitted scale is always reachable interactively.
    #[must_use]
    pub fn with_config(zoom_limits: ZoomLimits, fit: FitConfig) -> Self {
        let zoom_limits = zoom_limits.normalized();
        let fit = FitConfig {
            limits: fit.limits.normalized().intersect(zoom_limits),
            ..fit
        };
        Self {
            view_size: Size::ZERO,
            transform: Transform {
                scale: zoom_limits.clamp(1.0),
                ..Transform::IDENTITY
            },
            zoom_limits,
            fit,
            centered: false,
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Returns the interactive zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    /// Returns the fit parameters.
    #[must_use]
    pub fn fit_config(&self) -> FitConfig {
        self.fit
    }

    /// Returns the current surface size in screen pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Returns `true` once the surface has a non-zero size.
    #[must_use]
    pub fn has_known_size(&self) -> bool {
        self.view_size.width > 0.0 && self.view_size.height > 0.0
    }

    /// Sets the surface size, returning `true` if it changed.
    ///
    /// Non-positive or non-finite sizes are ignored; a surface that collapses
    /// during layout keeps its last known size.
    pub fn set_view_size(&mut self, size: Size) -> bool {
        let valid = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        if !valid || self.view_size == size {
            return false;
        }
        self.view_size = size;
        true
    }

    /// Returns `true` if the viewport has been fitted to the current content.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Forgets the automatic fit so the next [`Viewport::auto_fit`] runs again.
    ///
    /// Call this whenever the content changes. The transform itself is kept
    /// until the new content is fitted.
    pub fn reset_centering(&mut self) {
        self.centered = false;
    }

    /// Fits `content` once per content change, as soon as the size is known.
    ///
    /// Returns `true` if a fit was applied. Later calls are no-ops until
    /// [`Viewport::reset_centering`] is called.
    pub fn auto_fit(&mut self, content: Rect) -> bool {
        if self.centered || !self.has_known_size() {
            return false;
        }
        let fitted = self.fit_to_screen(content);
        if fitted {
            self.centered = true;
        }
        fitted
    }

    /// Fits the world rectangle `content` into the surface and centers it.
    ///
    /// The scale is the largest that fits `content` into the surface minus
    /// the configured padding, capped at the fit maximum and floored at the
    /// fit minimum. Returns `true` if the content is now fitted, and `false`
    /// with the transform untouched for an unknown surface size, empty
    /// content or non-finite results.
    pub fn fit_to_screen(&mut self, content: Rect) -> bool {
        match self.fitted_transform(content) {
            Some(fitted) => {
                self.replace(fitted);
                true
            }
            None => false,
        }
    }

    /// Pans by a delta in screen space.
    ///
    /// Pan does not depend on the scale. Returns `true` if the transform
    /// changed.
    pub fn apply_pan(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.replace(Transform {
            offset: self.transform.offset + delta,
            ..self.transform
        })
    }

    /// Zooms by `factor` around `anchor` in screen coordinates.
    ///
    /// The world point under `anchor` before the zoom stays under `anchor`
    /// afterwards. The new scale is clamped into the interactive limits; a
    /// non-positive or non-finite factor is ignored. Returns `true` if the
    /// transform changed.
    pub fn apply_zoom(&mut self, anchor: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let old = self.transform;
        let scale = self.zoom_limits.clamp(old.scale * factor);
        if (scale - old.scale).abs() < f64::EPSILON {
            return false;
        }

        let world = old.screen_to_world(anchor);
        self.replace(Transform {
            offset: anchor.to_vec2() - world.to_vec2() * scale,
            scale,
        })
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.transform.world_to_screen(pt)
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.transform.screen_to_world(pt)
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_screen(rect.origin()),
            self.world_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the world-space rectangle currently visible on the surface.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        Rect::from_points(
            self.screen_to_world(Point::ORIGIN),
            self.screen_to_world(Point::new(self.view_size.width, self.view_size.height)),
        )
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_size: self.view_size,
            transform: self.transform,
            visible_world_rect: self.visible_world_rect(),
            zoom_limits: self.zoom_limits,
            fit: self.fit,
            centered: self.centered,
        }
    }

    fn fitted_transform(&self, content: Rect) -> Option<Transform> {
        if !self.has_known_size() {
            return None;
        }
        let (width, height) = (content.width(), content.height());
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return None;
        }

        let sx = (self.view_size.width - self.fit.padding_x) / width;
        let sy = (self.view_size.height - self.fit.padding_y) / height;
        let scale = self.fit.limits.clamp(sx.min(sy));

        let view_center = Vec2::new(self.view_size.width * 0.5, self.view_size.height * 0.5);
        let fitted = Transform {
            offset: view_center - content.center().to_vec2() * scale,
            scale,
        };
        fitted.is_valid().then_some(fitted)
    }

    fn replace(&mut self, next: Transform) -> bool {
        if !next.is_valid() || next == self.transform {
            return false;
        }
        self.transform = next;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Surface size in screen pixels.
    pub view_size: Size,
    /// Current world → screen transform.
    pub transform: Transform,
    /// World-space rectangle currently visible.
    pub visible_world_rect: Rect,
    /// Interactive zoom limits.
    pub zoom_limits: ZoomLimits,
    /// Fit parameters.
    pub fit: FitConfig,
    /// Whether the automatic fit already ran for the current content.
    pub centered: bool,
}
