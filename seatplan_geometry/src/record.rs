// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw place records as delivered by the booking API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{GeometryConfig, SeatAnchor};
use crate::seat::{Seat, SeatId, SeatStatus};

/// Object type carried by records that describe a seat.
const PLACE_OBJECT_TYPE: &str = "Place";

/// A loosely typed scalar as found in raw place records.
///
/// The booking API is not consistent about types: identifiers and labels may
/// arrive as numbers or strings, coordinates as numbers or numeric strings and
/// the availability flag as a boolean or `0`/`1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON boolean.
    Bool(bool),
    /// A JSON integer.
    Int(i64),
    /// A JSON number with a fractional part.
    Float(f64),
    /// A JSON string.
    Text(String),
}

impl Scalar {
    /// Renders the scalar as a label.
    ///
    /// Integral floats render without a fractional part, so `12.0` and `12`
    /// produce the same label.
    #[must_use]
    pub fn to_label(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "checked to be integral and in range"
                )]
                let i = *f as i64;
                i.to_string()
            }
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Interprets the scalar as a number.
    ///
    /// Strings are trimmed and parsed; an empty string counts as zero.
    /// Returns `None` for strings that are not numbers.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    Some(0.0)
                } else {
                    s.parse().ok()
                }
            }
        }
    }

    /// Interprets the scalar as a flag.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One raw record of a hall plan.
///
/// Field names follow the booking API (`ID`, `Row`, `Seat`, `CX`, `CY`,
/// `avail`, `Price`, `Name_sec`, `ObjectType`); lowercase aliases are accepted
/// for the fields that have them upstream. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    /// Seat identifier.
    #[serde(rename = "ID", alias = "id", default)]
    pub id: Option<Scalar>,
    /// Row label.
    #[serde(rename = "Row", alias = "row", default)]
    pub row: Option<Scalar>,
    /// Seat label within the row.
    #[serde(rename = "Seat", alias = "seat", default)]
    pub seat: Option<Scalar>,
    /// Horizontal coordinate.
    #[serde(rename = "CX", alias = "x", default)]
    pub x: Option<Scalar>,
    /// Vertical coordinate.
    #[serde(rename = "CY", alias = "y", default)]
    pub y: Option<Scalar>,
    /// Availability flag; missing means taken.
    #[serde(default)]
    pub avail: Option<Scalar>,
    /// Ticket price.
    #[serde(rename = "Price", alias = "price", default)]
    pub price: Option<Scalar>,
    /// Seat category label.
    #[serde(rename = "Name_sec", alias = "name_sec", default)]
    pub seat_type: Option<Scalar>,
    /// Object discriminator; only `"Place"` (or nothing) describes a seat.
    #[serde(rename = "ObjectType", default)]
    pub object_type: Option<String>,
}

/// Why a raw record was left out of a geometry snapshot.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Rejection {
    /// The record describes something other than a seat (an aisle, a label, ...).
    #[error("record is a `{object_type}`, not a seat")]
    NotASeat {
        /// The record's object type.
        object_type: String,
    },
    /// The record has no usable identifier.
    #[error("record has no identifier")]
    MissingId,
    /// A coordinate is missing a numeric interpretation or is not finite.
    #[error("seat `{id}` has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending seat.
        id: SeatId,
    },
    /// The identifier was already used by an earlier record of the same hall.
    #[error("seat `{id}` repeats an earlier identifier")]
    DuplicateId {
        /// The repeated identifier.
        id: SeatId,
    },
    /// The list element does not have the shape of a place record.
    #[error("record {index} is malformed: {reason}")]
    Malformed {
        /// Position of the element in the list.
        index: usize,
        /// What the decoder complained about.
        reason: String,
    },
}

impl SeatRecord {
    /// Creates an available seat record with the given id, labels and coordinates.
    pub fn place(id: &str, row: &str, seat: &str, x: f64, y: f64) -> Self {
        Self {
            id: Some(id.into()),
            row: Some(row.into()),
            seat: Some(seat.into()),
            x: Some(x.into()),
            y: Some(y.into()),
            avail: Some(true.into()),
            price: None,
            seat_type: None,
            object_type: Some(PLACE_OBJECT_TYPE.to_owned()),
        }
    }

    /// Marks the record as unavailable.
    #[must_use]
    pub fn taken(mut self) -> Self {
        self.avail = Some(false.into());
        self
    }

    /// Sets the ticket price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Sets the seat category label.
    #[must_use]
    pub fn with_seat_type(mut self, seat_type: &str) -> Self {
        self.seat_type = Some(seat_type.into());
        self
    }

    /// Sets the object discriminator.
    #[must_use]
    pub fn with_object_type(mut self, object_type: &str) -> Self {
        self.object_type = Some(object_type.to_owned());
        self
    }

    /// Resolves the record's identifier, if it has a non-empty one.
    #[must_use]
    pub fn seat_id(&self) -> Option<SeatId> {
        let label = self.id.as_ref()?.to_label();
        (!label.is_empty()).then(|| SeatId::new(label))
    }

    /// Returns `true` if the record describes a seat.
    ///
    /// A missing or empty object type counts as a seat.
    #[must_use]
    pub fn is_place(&self) -> bool {
        match self.object_type.as_deref() {
            None | Some("") => true,
            Some(t) => t == PLACE_OBJECT_TYPE,
        }
    }

    /// Validates the record and positions it as a [`Seat`].
    ///
    /// Uniqueness of the identifier is a property of the whole list and is
    /// checked by [`Geometry::build`](crate::Geometry::build), not here.
    pub fn validate(&self, config: &GeometryConfig) -> Result<Seat, Rejection> {
        if !self.is_place() {
            return Err(Rejection::NotASeat {
                object_type: self.object_type.clone().unwrap_or_default(),
            });
        }
        let id = self.seat_id().ok_or(Rejection::MissingId)?;

        let coord = |value: &Option<Scalar>| match value {
            None => Some(0.0),
            Some(v) => v.to_f64().filter(|f| f.is_finite()),
        };
        let (Some(raw_x), Some(raw_y)) = (coord(&self.x), coord(&self.y)) else {
            return Err(Rejection::NonFiniteCoordinate { id });
        };

        let size = config.seat_size;
        let (x, y) = match config.anchor {
            SeatAnchor::TopLeft => (raw_x, raw_y),
            SeatAnchor::Center => (raw_x - size * 0.5, raw_y - size * 0.5),
        };

        let label = |value: &Option<Scalar>| value.as_ref().map(Scalar::to_label).unwrap_or_default();
        let available = self.avail.as_ref().is_some_and(Scalar::is_truthy);
        let price = self
            .price
            .as_ref()
            .and_then(Scalar::to_f64)
            .filter(|p| p.is_finite())
            .unwrap_or(0.0);

        Ok(Seat {
            id,
            x,
            y,
            w: size,
            h: size,
            row: label(&self.row),
            seat_label: label(&self.seat),
            status: if available {
                SeatStatus::Free
            } else {
                SeatStatus::Taken
            },
            price,
            seat_type: label(&self.seat_type),
        })
    }
}
