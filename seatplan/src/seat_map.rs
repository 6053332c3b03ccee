// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use seatplan_geometry::{Geometry, Rejection, SeatRecord};
use seatplan_gesture::{GestureController, GestureOutcome, TouchPoint};
use seatplan_hit::{HitParams, toggle_target};
use seatplan_render::{
    DrawCommand, Invalidation, LegendItem, Palette, RedrawScheduler, RenderInput, legend, render,
};
use seatplan_selection::{SelectionSource, ToggleSink};
use seatplan_view::{Transform, Viewport};
use tracing::{debug, trace};

use crate::{SeatMapConfig, SeatMapError};

/// The interactive seat map.
///
/// Owns the hall geometry, the viewport, the gesture state and the redraw
/// scheduler. The selection lives outside: it is read through a
/// [`SelectionSource`] when drawing and changed through a [`ToggleSink`]
/// when the user taps a free seat.
///
/// A host wires it up like this:
/// - feed seat data with [`SeatMap::set_records`] or [`SeatMap::load_json`];
/// - report the surface size with [`SeatMap::resize`];
/// - forward input events to the pointer, touch and wheel handlers;
/// - call [`SeatMap::sync_selection`] when the store reports a change;
/// - when [`SeatMap::needs_frame`] turns `true`, request an animation frame
///   and replay the commands from [`SeatMap::frame`] in the callback.
#[derive(Debug)]
pub struct SeatMap {
    config: SeatMapConfig,
    palette: Palette,
    geometry: Geometry,
    rejections: Vec<Rejection>,
    viewport: Viewport,
    gestures: GestureController,
    scheduler: RedrawScheduler,
    selection_revision: Option<u64>,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new(SeatMapConfig::default())
    }
}

impl SeatMap {
    /// Creates an empty seat map.
    #[must_use]
    pub fn new(config: SeatMapConfig) -> Self {
        Self {
            config,
            palette: Palette::default(),
            geometry: Geometry::empty(),
            rejections: Vec::new(),
            viewport: Viewport::with_config(config.zoom.normalized(), config.fit),
            gestures: GestureController::new(config.gestures),
            scheduler: RedrawScheduler::new(),
            selection_revision: None,
        }
    }

    /// Replaces the colors.
    pub fn set_palette(&mut self, palette: Palette) {
        if self.palette != palette {
            self.palette = palette;
            self.scheduler.invalidate(Invalidation::STYLE);
        }
    }

    /// Replaces the hall with a new list of records.
    ///
    /// Invalid records are dropped; see [`SeatMap::rejections`]. The view is
    /// fitted to the new hall as soon as the surface size is known.
    pub fn set_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a SeatRecord>,
    {
        let (geometry, rejections) = Geometry::build_with_rejections(records, &self.config.geometry);
        self.install(geometry, rejections);
    }

    /// Parses a JSON array of place records and loads it.
    ///
    /// Elements that are not valid records are dropped and reported through
    /// [`SeatMap::rejections`]. If the payload is not a JSON array the current
    /// hall is kept.
    pub fn load_json(&mut self, json: &str) -> Result<(), SeatMapError> {
        let (geometry, rejections) =
            Geometry::from_json_with_rejections(json, &self.config.geometry)?;
        self.install(geometry, rejections);
        Ok(())
    }

    fn install(&mut self, geometry: Geometry, rejections: Vec<Rejection>) {
        debug!(
            seats = geometry.len(),
            rejected = rejections.len(),
            "loaded hall"
        );
        self.geometry = geometry;
        self.rejections = rejections;
        self.gestures.reset();
        self.viewport.reset_centering();
        self.scheduler.invalidate(Invalidation::GEOMETRY);
        self.try_auto_fit();
    }

    /// Reports the surface size in pixels.
    ///
    /// Sizes are floored to whole pixels. Sizes that are not positive after
    /// flooring are ignored. Returns `true` if the size changed.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let size = Size::new(width.floor(), height.floor());
        if !(size.width > 0.0 && size.height > 0.0) {
            debug!(width, height, "ignoring unusable surface size");
            return false;
        }
        if !self.viewport.set_view_size(size) {
            return false;
        }
        debug!(width = size.width, height = size.height, "surface resized");
        self.scheduler.invalidate(Invalidation::VIEWPORT);
        self.try_auto_fit();
        true
    }

    /// Fits the whole hall into the surface again.
    ///
    /// Returns `false` when there is nothing to fit or the size is unknown.
    pub fn recenter(&mut self) -> bool {
        let Some(bounds) = self.geometry.bounds() else {
            return false;
        };
        if !self.viewport.fit_to_screen(bounds.to_rect()) {
            return false;
        }
        debug!(scale = self.viewport.scale(), "recentered");
        self.scheduler.invalidate(Invalidation::TRANSFORM);
        true
    }

    /// Primary mouse button pressed.
    pub fn pointer_down(&mut self, pos: Point) -> GestureOutcome {
        self.gestures.pointer_down(pos)
    }

    /// Mouse moved.
    pub fn pointer_move(&mut self, pos: Point) -> GestureOutcome {
        let outcome = self.gestures.pointer_move(&mut self.viewport, pos);
        self.after_gesture(outcome, None)
    }

    /// Primary mouse button released; a click toggles the free seat under it.
    pub fn pointer_up(&mut self, pos: Point, sink: &mut dyn ToggleSink) -> GestureOutcome {
        let outcome = self.gestures.pointer_up(pos);
        self.after_gesture(outcome, Some(sink))
    }

    /// Mouse press abandoned, for example because the pointer left the window.
    pub fn pointer_cancel(&mut self) -> GestureOutcome {
        self.gestures.pointer_cancel()
    }

    /// Fingers touched down; `touches` lists all contacts on the surface.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> GestureOutcome {
        self.gestures.touch_start(touches)
    }

    /// Fingers moved; `touches` lists all contacts on the surface.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> GestureOutcome {
        let outcome = self.gestures.touch_move(&mut self.viewport, touches);
        self.after_gesture(outcome, None)
    }

    /// A finger lifted at `released`; a tap toggles the free seat under it.
    pub fn touch_end(
        &mut self,
        remaining: &[TouchPoint],
        released: Point,
        sink: &mut dyn ToggleSink,
    ) -> GestureOutcome {
        let outcome = self.gestures.touch_end(remaining, released);
        self.after_gesture(outcome, Some(sink))
    }

    /// The platform cancelled the touch sequence.
    pub fn touch_cancel(&mut self) -> GestureOutcome {
        self.gestures.touch_cancel()
    }

    /// Wheel scrolled; zooms around the cursor.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64) -> GestureOutcome {
        let outcome = self.gestures.wheel(&mut self.viewport, cursor, delta_y);
        self.after_gesture(outcome, None)
    }

    /// Notes a possible selection change.
    ///
    /// Returns `true` if the selection differs from the one last drawn and a
    /// redraw was scheduled.
    pub fn sync_selection(&mut self, selection: &dyn SelectionSource) -> bool {
        if self.selection_revision == Some(selection.revision()) {
            return false;
        }
        self.scheduler.invalidate(Invalidation::SELECTION);
        true
    }

    /// Returns `true` if something changed since the last frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Reasons accumulated for the next frame.
    #[must_use]
    pub fn pending_redraw(&self) -> Invalidation {
        self.scheduler.pending()
    }

    /// Produces the pending frame, if any.
    ///
    /// Returns `None` when nothing changed since the previous frame or the
    /// surface size is still unknown.
    pub fn frame(&mut self, selection: &dyn SelectionSource) -> Option<Vec<DrawCommand>> {
        let reasons = self.scheduler.take_frame()?;
        if !self.viewport.has_known_size() {
            return None;
        }
        let commands = self.draw(selection);
        trace!(?reasons, commands = commands.len(), "frame");
        Some(commands)
    }

    /// Draws the current state unconditionally, bypassing the scheduler.
    pub fn draw(&mut self, selection: &dyn SelectionSource) -> Vec<DrawCommand> {
        self.selection_revision = Some(selection.revision());
        render(&RenderInput {
            geometry: &self.geometry,
            transform: self.viewport.transform(),
            view_size: self.viewport.view_size(),
            selection,
            palette: &self.palette,
            style: &self.config.style,
        })
    }

    /// Legend entries for the seat states, in display order.
    #[must_use]
    pub fn legend(&self) -> [LegendItem; 3] {
        legend(&self.palette)
    }

    /// The current hall.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Records dropped by the last load.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current world to screen transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.viewport.transform()
    }

    /// The gesture state.
    #[must_use]
    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// The configuration this map was created with.
    #[must_use]
    pub fn config(&self) -> &SeatMapConfig {
        &self.config
    }

    /// The colors in use.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn try_auto_fit(&mut self) {
        let Some(bounds) = self.geometry.bounds() else {
            return;
        };
        if self.viewport.auto_fit(bounds.to_rect()) {
            debug!(scale = self.viewport.scale(), "fitted hall to surface");
            self.scheduler.invalidate(Invalidation::TRANSFORM);
        }
    }

    fn after_gesture(
        &mut self,
        outcome: GestureOutcome,
        sink: Option<&mut dyn ToggleSink>,
    ) -> GestureOutcome {
        match outcome {
            GestureOutcome::ViewChanged => {
                self.scheduler.invalidate(Invalidation::TRANSFORM);
            }
            GestureOutcome::Tap(pos) => {
                let params = HitParams::with_tolerance(self.config.tap_tolerance);
                let target = toggle_target(
                    pos,
                    &self.viewport.transform(),
                    self.geometry.seats(),
                    &params,
                );
                match (target, sink) {
                    (Some(seat), Some(sink)) => {
                        debug!(seat = %seat.id, "toggle");
                        sink.toggle(seat);
                    }
                    _ => trace!(x = pos.x, y = pos.y, "tap hit no free seat"),
                }
            }
            GestureOutcome::Ignored => {}
        }
        outcome
    }
}
