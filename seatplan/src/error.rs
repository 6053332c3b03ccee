// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use seatplan_geometry::GeometryError;
use thiserror::Error;

/// Errors at the outer surface of a [`SeatMap`](crate::SeatMap).
///
/// Interaction itself never fails; only loading data and configuration can.
#[derive(Debug, Error)]
pub enum SeatMapError {
    /// The configuration document could not be read or written.
    #[error("invalid seat map config: {0}")]
    Config(#[source] serde_json::Error),
    /// The seat list could not be parsed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
