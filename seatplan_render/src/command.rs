// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Point, Stroke};
use peniko::Color;

/// Horizontal text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// The position is the left edge of the text.
    Left,
    /// The position is the horizontal center of the text.
    Center,
    /// The position is the right edge of the text.
    Right,
}

/// A blurred halo drawn behind a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Halo color.
    pub color: Color,
    /// Blur radius in screen pixels.
    pub blur: f64,
}

/// One drawing operation.
///
/// Geometry is in the coordinate space set up by the enclosing
/// [`DrawCommand::PushTransform`], or in screen pixels outside any.
/// Text is vertically centred on its position.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Color),
    /// Concatenate a transform onto the current one.
    ///
    /// Must be matched by a [`DrawCommand::PopTransform`].
    PushTransform(Affine),
    /// Restore the transform in effect before the matching push.
    PopTransform,
    /// Fill a closed path.
    FillPath {
        /// The path.
        path: BezPath,
        /// Fill color.
        color: Color,
    },
    /// Stroke a path.
    StrokePath {
        /// The path.
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Width, caps and joins.
        stroke: Stroke,
        /// Optional halo.
        glow: Option<Glow>,
    },
    /// Draw a single line of text.
    Text {
        /// The text.
        text: String,
        /// Anchor point, see `align`.
        position: Point,
        /// Font size.
        size: f64,
        /// Bold weight.
        bold: bool,
        /// Horizontal alignment.
        align: TextAlign,
        /// Text color.
        color: Color,
    },
}
