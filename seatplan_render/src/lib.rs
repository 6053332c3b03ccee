// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Render: seat maps as plain draw commands.
//!
//! [`render`] is a pure function from a [`RenderInput`] (geometry, transform,
//! surface size, selection, colors and layout) to a list of
//! [`DrawCommand`]s. The commands form a tiny imaging IR that any 2D backend
//! with paths, strokes, a transform stack and text can replay: a browser
//! canvas, Vello, tiny-skia, or a test that inspects them.
//!
//! The picture is, back to front:
//! 1. the background;
//! 2. a glowing arc above the seats that marks the screen;
//! 3. one armchair per seat ([`seat_shape`]) in the free, taken or selected
//!    color, with the seat label on selected seats;
//! 4. row labels in the left and right margins.
//!
//! [`RedrawScheduler`] coalesces the reasons to redraw between frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use seatplan_geometry::{Geometry, GeometryConfig, SeatId, SeatRecord};
//! use seatplan_render::{DrawCommand, HallStyle, Palette, RenderInput, render};
//! use seatplan_selection::Selection;
//! use seatplan_view::Transform;
//!
//! let geometry = Geometry::build(
//!     &[SeatRecord::place("1", "A", "1", 0.0, 0.0)],
//!     &GeometryConfig::default(),
//! );
//! let selection = Selection::<SeatId>::new();
//! let commands = render(&RenderInput {
//!     geometry: &geometry,
//!     transform: Transform::IDENTITY,
//!     view_size: Size::new(320.0, 240.0),
//!     selection: &selection,
//!     palette: &Palette::default(),
//!     style: &HallStyle::default(),
//! });
//!
//! assert!(matches!(commands[0], DrawCommand::Clear(_)));
//! assert_eq!(commands.last(), Some(&DrawCommand::PopTransform));
//! ```

mod command;
mod render;
mod scheduler;
mod shape;
mod style;

pub use command::{DrawCommand, Glow, TextAlign};
pub use render::{RenderInput, render};
pub use scheduler::{Invalidation, RedrawScheduler};
pub use shape::{SeatShape, seat_shape};
pub use style::{HallStyle, LegendItem, Palette, SeatVisual, legend};
