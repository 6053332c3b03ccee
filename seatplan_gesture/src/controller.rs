// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns raw mouse, wheel and touch events into viewport changes and taps.

use kurbo::Point;
use seatplan_view::Viewport;
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::drag::DragState;
use crate::pinch::PinchState;

/// Identifier of a touch contact, stable for the lifetime of the contact.
pub type TouchId = u64;

/// One active touch contact in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Contact identifier.
    pub id: TouchId,
    /// Position in screen pixels.
    pub position: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: TouchId, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// What the controller is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer pressed and no finger down.
    #[default]
    Idle,
    /// One pointer or finger is dragging the view.
    Panning,
    /// Two fingers are pinching.
    Pinching,
}

/// Result of feeding one event to a [`GestureController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing visible changed.
    Ignored,
    /// The viewport transform changed and a redraw is due.
    ViewChanged,
    /// A press/release pair with negligible travel, at this screen point.
    Tap(Point),
}

impl GestureOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed { Self::ViewChanged } else { Self::Ignored }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Pointer,
    Touch,
}

/// Recognizes pan, wheel zoom, pinch zoom and taps.
///
/// Mouse and touch share the same tap rule: a gesture is a tap only if it
/// never pinched and the pointer never travelled further than
/// [`GestureConfig::tap_slop`] from where it was pressed. For touch, the tap
/// fires when the last finger lifts.
///
/// Touch handlers take the full list of contacts currently on the surface.
/// The first two are tracked; further fingers are ignored.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    config: GestureConfig,
    phase: GesturePhase,
    source: Option<Source>,
    drag: DragState,
    pinch: Option<PinchState>,
    tracked: SmallVec<[TouchPoint; 2]>,
    moved: bool,
    pinched: bool,
}

impl GestureController {
    /// Creates a controller with the given tuning.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` if the current gesture can no longer end in a tap.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved || self.pinched
    }

    /// Abandons any gesture in progress.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Primary mouse button pressed at `pos`.
    ///
    /// Ignored while a touch gesture is active.
    pub fn pointer_down(&mut self, pos: Point) -> GestureOutcome {
        if self.source == Some(Source::Touch) {
            return GestureOutcome::Ignored;
        }
        self.begin(Source::Pointer);
        self.phase = GesturePhase::Panning;
        self.drag.start(pos);
        GestureOutcome::Ignored
    }

    /// Mouse moved to `pos`; pans the view while the button is held.
    pub fn pointer_move(&mut self, viewport: &mut Viewport, pos: Point) -> GestureOutcome {
        if self.source != Some(Source::Pointer) || self.phase != GesturePhase::Panning {
            return GestureOutcome::Ignored;
        }
        self.pan_to(viewport, pos)
    }

    /// Primary mouse button released at `pos`.
    ///
    /// The release itself does not pan; its distance from the press still
    /// counts toward the tap slop.
    pub fn pointer_up(&mut self, pos: Point) -> GestureOutcome {
        if self.source != Some(Source::Pointer) {
            return GestureOutcome::Ignored;
        }
        self.finish(pos)
    }

    /// The pointer left the surface or the press was cancelled.
    pub fn pointer_cancel(&mut self) -> GestureOutcome {
        if self.source == Some(Source::Pointer) {
            self.reset();
        }
        GestureOutcome::Ignored
    }

    /// One or more fingers touched down; `touches` lists every contact now
    /// on the surface.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> GestureOutcome {
        if touches.is_empty() || self.source == Some(Source::Pointer) {
            return GestureOutcome::Ignored;
        }
        if self.source.is_none() {
            self.begin(Source::Touch);
            self.drag.start(touches[0].position);
        }
        self.retrack(touches);
        GestureOutcome::Ignored
    }

    /// Fingers moved; `touches` lists every contact now on the surface.
    pub fn touch_move(&mut self, viewport: &mut Viewport, touches: &[TouchPoint]) -> GestureOutcome {
        if self.source != Some(Source::Touch) {
            return GestureOutcome::Ignored;
        }
        let ids: SmallVec<[TouchId; 2]> = self.tracked.iter().map(|t| t.id).collect();
        let current: Option<SmallVec<[TouchPoint; 2]>> =
            ids.iter().map(|&id| find(touches, id)).collect();
        let Some(current) = current else {
            self.retrack(touches);
            return GestureOutcome::Ignored;
        };
        self.tracked.clone_from(&current);

        match (self.phase, current.as_slice()) {
            (GesturePhase::Panning, [finger]) => self.pan_to(viewport, finger.position),
            (GesturePhase::Pinching, [a, b]) => {
                let Some(pinch) = self.pinch.as_mut() else {
                    return GestureOutcome::Ignored;
                };
                let step = pinch.update(a.position, b.position, self.config.min_pinch_distance);
                let panned = viewport.apply_pan(step.pan);
                let zoomed = viewport.apply_zoom(step.anchor, step.ratio);
                GestureOutcome::from_changed(panned | zoomed)
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// A finger lifted at `released`; `remaining` lists the contacts still down.
    ///
    /// When fingers remain, the gesture continues with them, re-anchored so
    /// that no jump is applied. When none remain, the gesture ends and may
    /// report a tap.
    pub fn touch_end(&mut self, remaining: &[TouchPoint], released: Point) -> GestureOutcome {
        if self.source != Some(Source::Touch) {
            return GestureOutcome::Ignored;
        }
        if remaining.is_empty() {
            return self.finish(released);
        }
        self.retrack(remaining);
        GestureOutcome::Ignored
    }

    /// The platform cancelled the touch sequence; no tap is reported.
    pub fn touch_cancel(&mut self) -> GestureOutcome {
        if self.source == Some(Source::Touch) {
            self.reset();
        }
        GestureOutcome::Ignored
    }

    /// Wheel scrolled by `delta_y` with the cursor at `cursor`.
    ///
    /// Zooms around the cursor. A single event changes the scale by at most
    /// a factor of two either way, so coarse line-based deltas stay usable.
    pub fn wheel(&mut self, viewport: &mut Viewport, cursor: Point, delta_y: f64) -> GestureOutcome {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return GestureOutcome::Ignored;
        }
        let factor = (1.0 - delta_y * self.config.wheel_zoom_intensity).clamp(0.5, 2.0);
        GestureOutcome::from_changed(viewport.apply_zoom(cursor, factor))
    }

    fn begin(&mut self, source: Source) {
        self.reset();
        self.source = Some(source);
    }

    fn pan_to(&mut self, viewport: &mut Viewport, pos: Point) -> GestureOutcome {
        let Some(delta) = self.drag.update(pos) else {
            return GestureOutcome::Ignored;
        };
        if self.drag.exceeds(self.config.tap_slop) {
            self.moved = true;
        }
        GestureOutcome::from_changed(viewport.apply_pan(delta))
    }

    /// Follows the first one or two contacts, re-anchoring drag or pinch state.
    fn retrack(&mut self, touches: &[TouchPoint]) {
        self.tracked = touches.iter().take(2).copied().collect();
        match self.tracked.as_slice() {
            [] => {
                self.phase = GesturePhase::Idle;
                self.pinch = None;
            }
            [only] => {
                self.phase = GesturePhase::Panning;
                self.pinch = None;
                self.drag.rebase(only.position);
            }
            [a, b, ..] => {
                self.phase = GesturePhase::Pinching;
                self.pinched = true;
                self.pinch = Some(PinchState::new(a.position, b.position));
            }
        }
    }

    fn finish(&mut self, released: Point) -> GestureOutcome {
        let within_slop = self
            .drag
            .total_offset(released)
            .is_some_and(|offset| offset.hypot() <= self.config.tap_slop);
        let tap = self.phase == GesturePhase::Panning
            && within_slop
            && !self.moved
            && !self.pinched;
        self.reset();
        if tap {
            GestureOutcome::Tap(released)
        } else {
            GestureOutcome::Ignored
        }
    }
}

fn find(touches: &[TouchPoint], id: TouchId) -> Option<TouchPoint> {
    touches.iter().find(|t| t.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Size, Vec2};

    fn viewport() -> Viewport {
        let mut vp = Viewport::new();
        vp.set_view_size(Size::new(800.0, 600.0));
        vp
    }

    #[test]
    fn click_without_motion_is_a_tap() {
        let mut vp = viewport();
        let mut gc = GestureController::default();
        gc.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(gc.phase(), GesturePhase::Panning);
        let outcome = gc.pointer_up(Point::new(12.0, 11.0));
        assert_eq!(outcome, GestureOutcome::Tap(Point::new(12.0, 11.0)));
        assert_eq!(gc.phase(), GesturePhase::Idle);
        assert_eq!(vp.transform().offset, Vec2::ZERO);
        assert_eq!(gc.pointer_move(&mut vp, Point::new(50.0, 50.0)), GestureOutcome::Ignored);
    }

    #[test]
    fn drag_pans_and_suppresses_tap() {
        let mut vp = viewport();
        let mut gc = GestureController::default();
        gc.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(
            gc.pointer_move(&mut vp, Point::new(40.0, 20.0)),
            GestureOutcome::ViewChanged
        );
        assert_eq!(vp.transform().offset, Vec2::new(30.0, 10.0));

        // Coming back near the start does not make it a tap again.
        gc.pointer_move(&mut vp, Point::new(11.0, 10.0));
        assert_eq!(gc.pointer_up(Point::new(11.0, 10.0)), GestureOutcome::Ignored);
    }

    #[test]
    fn release_far_from_press_is_not_a_tap() {
        let mut gc = GestureController::default();
        gc.pointer_down(Point::new(0.0, 0.0));
        assert_eq!(gc.pointer_up(Point::new(10.0, 0.0)), GestureOutcome::Ignored);
    }

    #[test]
    fn pointer_cancel_drops_the_gesture() {
        let mut gc = GestureController::default();
        gc.pointer_down(Point::new(0.0, 0.0));
        gc.pointer_cancel();
        assert_eq!(gc.phase(), GesturePhase::Idle);
        assert_eq!(gc.pointer_up(Point::new(0.0, 0.0)), GestureOutcome::Ignored);
    }

    #[test]
    fn wheel_up_zooms_in_around_cursor() {
        let mut vp = viewport();
        let mut gc = GestureController::default();
        let cursor = Point::new(300.0, 200.0);
        let before = vp.screen_to_world(cursor);

        assert_eq!(gc.wheel(&mut vp, cursor, -100.0), GestureOutcome::ViewChanged);
        assert!((vp.scale() - 1.15).abs() < 1e-12);
        assert!((vp.screen_to_world(cursor) - before).hypot() < 1e-9);

        assert_eq!(gc.wheel(&mut vp, cursor, 0.0), GestureOutcome::Ignored);
        assert_eq!(gc.wheel(&mut vp, cursor, f64::NAN), GestureOutcome::Ignored);
    }

    #[test]
    fn huge_wheel_delta_is_bounded() {
        let mut vp = viewport();
        let mut gc = GestureController::default();
        gc.wheel(&mut vp, Point::ORIGIN, 10_000.0);
        assert_eq!(vp.scale(), 0.5);
    }

    #[test]
    fn single_finger_tap_and_pan() {
        let mut vp = viewport();
        let mut gc = GestureController::default();
        let finger = TouchPoint::new(7, 100.0, 100.0);
        gc.touch_start(&[finger]);
        assert_eq!(gc.touch_end(&[], Point::new(101.0, 100.0)), GestureOutcome::Tap(Point::new(101.0, 100.0)));

        gc.touch_start(&[finger]);
        assert_eq!(
            gc.touch_move(&mut vp, &[TouchPoint::new(7, 120.0, 90.0)]),
            GestureOutcome::ViewChanged
        );
        assert_eq!(vp.transform().offset, Vec2::new(20.0, -10.0));
        assert_eq!(gc.touch_end(&[], Point::new(120.0, 90.0)), GestureOutcome::Ignored);
    }

    #[test]
    fn touch_cancel_never_taps() {
        let mut gc = GestureController::default();
        gc.touch_start(&[TouchPoint::new(1, 5.0, 5.0)]);
        gc.touch_cancel();
        assert_eq!(gc.touch_end(&[], Point::new(5.0, 5.0)), GestureOutcome::Ignored);
    }

    #[test]
    fn mouse_is_ignored_during_touch() {
        let mut gc = GestureController::default();
        gc.touch_start(&[TouchPoint::new(1, 5.0, 5.0)]);
        gc.pointer_down(Point::new(50.0, 50.0));
        assert_eq!(gc.pointer_up(Point::new(50.0, 50.0)), GestureOutcome::Ignored);
        assert_eq!(gc.touch_end(&[], Point::new(5.0, 5.0)), GestureOutcome::Tap(Point::new(5.0, 5.0)));
    }
}
