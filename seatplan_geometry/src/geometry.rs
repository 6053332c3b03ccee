// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::bounds::Bounds;
use crate::record::{Rejection, SeatRecord};
use crate::seat::{Seat, SeatId};
use crate::DEFAULT_SEAT_SIZE;

/// How a record's coordinate maps onto the seat rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatAnchor {
    /// The coordinate is the top-left corner of the seat.
    ///
    /// This is what the booking API sends today.
    #[default]
    TopLeft,
    /// The coordinate is the center of the seat.
    Center,
}

/// Parameters for turning records into seats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Edge length of every seat in world units.
    pub seat_size: f64,
    /// Interpretation of record coordinates.
    pub anchor: SeatAnchor,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            seat_size: DEFAULT_SEAT_SIZE,
            anchor: SeatAnchor::default(),
        }
    }
}

/// A row label placed at the vertical center of its row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowLabel {
    /// The row label as shown to the user.
    pub label: String,
    /// Vertical center of the row's first seat, in world units.
    pub center_y: f64,
}

/// Errors from parsing a serialized seat list.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The payload is not a JSON array of place records.
    #[error("malformed seat list: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable snapshot of a hall's seats.
///
/// Built once per seat list; rebuilding from the same list yields identical
/// seat positions and bounds.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    seats: Vec<Seat>,
    bounds: Option<Bounds>,
    rows: Vec<RowLabel>,
    index: HashMap<SeatId, usize>,
}

impl Geometry {
    /// Creates an empty, not-ready geometry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from raw records, silently dropping invalid ones.
    pub fn build<'a, I>(records: I, config: &GeometryConfig) -> Self
    where
        I: IntoIterator<Item = &'a SeatRecord>,
    {
        Self::build_with_rejections(records, config).0
    }

    /// Builds a snapshot from raw records and reports every dropped record.
    ///
    /// Rejections are listed in input order. Only the first record with a
    /// given identifier is kept.
    pub fn build_with_rejections<'a, I>(records: I, config: &GeometryConfig) -> (Self, Vec<Rejection>)
    where
        I: IntoIterator<Item = &'a SeatRecord>,
    {
        Self::assemble(records.into_iter().map(|record| record.validate(config)))
    }

    /// Parses a JSON array of place records and builds a snapshot from it.
    ///
    /// Elements that do not decode as a record are dropped like any other
    /// invalid record.
    pub fn from_json(json: &str, config: &GeometryConfig) -> Result<Self, GeometryError> {
        Ok(Self::from_json_with_rejections(json, config)?.0)
    }

    /// Like [`Geometry::from_json`], also reporting every dropped element.
    ///
    /// Only a payload that is not a JSON array at all is an error.
    pub fn from_json_with_rejections(
        json: &str,
        config: &GeometryConfig,
    ) -> Result<(Self, Vec<Rejection>), GeometryError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self::assemble(values.into_iter().enumerate().map(
            |(index, value)| match SeatRecord::deserialize(value) {
                Ok(record) => record.validate(config),
                Err(err) => Err(Rejection::Malformed {
                    index,
                    reason: err.to_string(),
                }),
            },
        )))
    }

    fn assemble<I>(validated: I) -> (Self, Vec<Rejection>)
    where
        I: IntoIterator<Item = Result<Seat, Rejection>>,
    {
        let mut geometry = Self::default();
        let mut rejections = Vec::new();
        let mut seen_rows: HashSet<String> = HashSet::new();

        for validated in validated {
            let seat = match validated {
                Ok(seat) => seat,
                Err(rejection) => {
                    debug!(%rejection, "dropping seat record");
                    rejections.push(rejection);
                    continue;
                }
            };
            if geometry.index.contains_key(&seat.id) {
                let rejection = Rejection::DuplicateId { id: seat.id };
                debug!(%rejection, "dropping seat record");
                rejections.push(rejection);
                continue;
            }

            let rect = seat.rect();
            match geometry.bounds.as_mut() {
                Some(bounds) => bounds.include(rect),
                None => geometry.bounds = Some(Bounds::from_rect(rect)),
            }
            if seen_rows.insert(seat.row.clone()) {
                geometry.rows.push(RowLabel {
                    label: seat.row.clone(),
                    center_y: seat.y + seat.h * 0.5,
                });
            }
            geometry.index.insert(seat.id.clone(), geometry.seats.len());
            geometry.seats.push(seat);
        }

        debug!(
            seats = geometry.seats.len(),
            rows = geometry.rows.len(),
            rejected = rejections.len(),
            "built hall geometry"
        );
        (geometry, rejections)
    }

    /// All seats, in input order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Bounding box of all seats, or `None` when there are no seats.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// One label per distinct row, in order of first appearance.
    #[must_use]
    pub fn rows(&self) -> &[RowLabel] {
        &self.rows
    }

    /// Looks up a seat by identifier.
    #[must_use]
    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.index.get(id).map(|&idx| &self.seats[idx])
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Returns `true` if the snapshot holds no seats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Returns `true` once there is at least one seat to draw and hit test.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.bounds.is_some()
    }
}
