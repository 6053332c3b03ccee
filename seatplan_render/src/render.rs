// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Cap, Join, Point, Rect, Size, Stroke};
use seatplan_geometry::{Bounds, Geometry, Seat};
use seatplan_selection::SelectionSource;
use seatplan_view::Transform;
use tracing::trace;

use crate::command::{DrawCommand, Glow, TextAlign};
use crate::shape::seat_shape;
use crate::style::{HallStyle, Palette, SeatVisual};

/// Everything one frame depends on.
#[derive(Clone, Copy)]
pub struct RenderInput<'a> {
    /// Seats, bounds and rows.
    pub geometry: &'a Geometry,
    /// World to screen mapping.
    pub transform: Transform,
    /// Surface size in pixels.
    pub view_size: Size,
    /// Which seats are selected.
    pub selection: &'a dyn SelectionSource,
    /// Colors.
    pub palette: &'a Palette,
    /// Layout constants.
    pub style: &'a HallStyle,
}

impl core::fmt::Debug for RenderInput<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderInput")
            .field("seats", &self.geometry.len())
            .field("transform", &self.transform)
            .field("view_size", &self.view_size)
            .field("selection_revision", &self.selection.revision())
            .field("palette", &self.palette)
            .field("style", &self.style)
            .finish()
    }
}

/// Draws one frame.
///
/// Output order: background, then inside a world transform the screen arc,
/// the seats in layout order and the row labels on both sides.
///
/// - An unknown (zero) surface size or an unusable transform yields no
///   commands at all.
/// - A hall without seats yields the background only.
/// - Seats whose drawing lies entirely outside the surface are skipped.
#[must_use]
pub fn render(input: &RenderInput<'_>) -> Vec<DrawCommand> {
    let size = input.view_size;
    if !(size.width > 0.0 && size.height > 0.0) || !input.transform.is_valid() {
        return Vec::new();
    }

    let palette = input.palette;
    let style = input.style;
    let mut out = vec![DrawCommand::Clear(palette.background)];
    let Some(bounds) = input.geometry.bounds() else {
        trace!("no seats, background only");
        return out;
    };

    out.push(DrawCommand::PushTransform(input.transform.to_affine()));
    out.push(screen_indicator(&bounds, style, palette));

    let visible = visible_world_rect(&input.transform, size);
    let mut culled = 0_usize;
    for seat in input.geometry.seats() {
        if !draw_seat(seat, input, visible, &mut out) {
            culled += 1;
        }
    }

    for row in input.geometry.rows() {
        if row.label.is_empty() {
            continue;
        }
        for (x, align) in [
            (bounds.min_x - style.row_label_margin, TextAlign::Right),
            (bounds.max_x + style.row_label_margin, TextAlign::Left),
        ] {
            out.push(DrawCommand::Text {
                text: row.label.clone(),
                position: Point::new(x, row.center_y),
                size: style.row_label_size,
                bold: true,
                align,
                color: palette.text,
            });
        }
    }
    out.push(DrawCommand::PopTransform);

    trace!(commands = out.len(), culled, "rendered frame");
    out
}

/// The curved line above the seats that marks where the screen is.
fn screen_indicator(bounds: &Bounds, style: &HallStyle, palette: &Palette) -> DrawCommand {
    let center_x = (bounds.min_x + bounds.max_x) * 0.5;
    let half_width = bounds.width() * style.screen_width_ratio * 0.5;
    let apex_y = bounds.min_y - style.screen_offset;

    let mut path = BezPath::new();
    path.move_to((center_x - half_width, apex_y + style.screen_curve));
    path.quad_to(
        (center_x, apex_y),
        (center_x + half_width, apex_y + style.screen_curve),
    );

    DrawCommand::StrokePath {
        path,
        color: palette.screen,
        stroke: Stroke::new(style.screen_line_width).with_caps(Cap::Round),
        glow: Some(Glow {
            color: palette.screen,
            blur: style.screen_glow_blur,
        }),
    }
}

/// Appends the commands for one seat. Returns `false` if it was culled.
fn draw_seat(seat: &Seat, input: &RenderInput<'_>, visible: Rect, out: &mut Vec<DrawCommand>) -> bool {
    let shape = seat_shape(seat, input.style);
    if !overlaps(shape.paint_bounds(), visible) {
        return false;
    }

    let selected = input.selection.is_selected(seat.id.as_str());
    let visual = if selected {
        SeatVisual::Selected
    } else if seat.is_free() {
        SeatVisual::Free
    } else {
        SeatVisual::Taken
    };
    let color = input.palette.seat_color(visual);
    let stroke = Stroke::new(shape.stroke_width)
        .with_caps(Cap::Round)
        .with_join(Join::Round);

    let backrest = shape.backrest_path();
    out.push(DrawCommand::FillPath {
        path: backrest.clone(),
        color,
    });
    out.push(DrawCommand::StrokePath {
        path: backrest,
        color,
        stroke: stroke.clone(),
        glow: None,
    });
    out.push(DrawCommand::StrokePath {
        path: shape.cushion,
        color,
        stroke,
        glow: None,
    });

    if selected && !seat.seat_label.is_empty() {
        out.push(DrawCommand::Text {
            text: seat.seat_label.clone(),
            position: shape.label_anchor,
            size: shape.label_size,
            bold: true,
            align: TextAlign::Center,
            color: input.palette.selected_label,
        });
    }
    true
}

fn visible_world_rect(transform: &Transform, size: Size) -> Rect {
    let a = transform.screen_to_world(Point::ORIGIN);
    let b = transform.screen_to_world(Point::new(size.width, size.height));
    Rect::from_points(a, b)
}

/// Closed-interval overlap, so shapes touching the surface edge still draw.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}
