// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Colors of a seat map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Surface background.
    pub background: Color,
    /// Seats that can be selected.
    pub free: Color,
    /// Seats in the current selection.
    pub selected: Color,
    /// Sold or reserved seats.
    pub taken: Color,
    /// Row labels.
    pub text: Color,
    /// Seat label drawn on selected seats.
    pub selected_label: Color,
    /// The screen indicator and its glow.
    pub screen: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x12, 0x12, 0x12),
            free: Color::from_rgb8(0x0d, 0x76, 0xff),
            selected: Color::from_rgb8(0xfc, 0x75, 0x4a),
            taken: Color::from_rgb8(0x33, 0x33, 0x33),
            text: Color::from_rgb8(0x66, 0x66, 0x66),
            selected_label: Color::from_rgb8(0xff, 0xff, 0xff),
            screen: Color::from_rgb8(0xfc, 0x75, 0x4a),
        }
    }
}

/// The three ways a seat can look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatVisual {
    /// Selectable.
    Free,
    /// Sold or reserved.
    Taken,
    /// In the current selection.
    Selected,
}

impl SeatVisual {
    /// Legend caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Taken => "Taken",
            Self::Selected => "Selected",
        }
    }
}

impl Palette {
    /// Returns the fill and stroke color for a seat state.
    #[must_use]
    pub fn seat_color(&self, visual: SeatVisual) -> Color {
        match visual {
            SeatVisual::Free => self.free,
            SeatVisual::Taken => self.taken,
            SeatVisual::Selected => self.selected,
        }
    }
}

/// One entry of the seat legend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendItem {
    /// Which seat state this entry explains.
    pub visual: SeatVisual,
    /// Caption.
    pub label: &'static str,
    /// Swatch color.
    pub color: Color,
}

/// Legend entries in display order.
#[must_use]
pub fn legend(palette: &Palette) -> [LegendItem; 3] {
    [SeatVisual::Free, SeatVisual::Taken, SeatVisual::Selected].map(|visual| LegendItem {
        visual,
        label: visual.label(),
        color: palette.seat_color(visual),
    })
}

/// Layout constants of the hall drawing, in world units unless noted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HallStyle {
    /// Depth of the screen arc.
    pub screen_curve: f64,
    /// Distance from the top of the seats to the apex of the screen arc.
    pub screen_offset: f64,
    /// Screen width as a fraction of the seating width.
    pub screen_width_ratio: f64,
    /// Stroke width of the screen arc.
    pub screen_line_width: f64,
    /// Glow radius of the screen arc, in screen pixels.
    pub screen_glow_blur: f64,
    /// Inset of the seat drawing inside its rectangle, as a fraction of the seat width.
    pub seat_padding_ratio: f64,
    /// Seat outline width as a fraction of the inset seat width.
    pub seat_stroke_ratio: f64,
    /// Seat label size as a fraction of the inset seat width.
    pub seat_label_ratio: f64,
    /// Gap between the seating and the row labels on either side.
    pub row_label_margin: f64,
    /// Font size of the row labels.
    pub row_label_size: f64,
}

impl Default for HallStyle {
    fn default() -> Self {
        Self {
            screen_curve: 40.0,
            screen_offset: 80.0,
            screen_width_ratio: 0.9,
            screen_line_width: 6.0,
            screen_glow_blur: 25.0,
            seat_padding_ratio: 0.05,
            seat_stroke_ratio: 0.12,
            seat_label_ratio: 0.38,
            row_label_margin: 30.0,
            row_label_size: 16.0,
        }
    }
}
