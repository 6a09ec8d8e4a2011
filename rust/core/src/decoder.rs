// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan tensor to room polygon decoding
//!
//! Padding rows are dropped, the remaining rows are grouped by the argmax of
//! their room-index block, and each group becomes one polygon whose ring is
//! the group's rows in input order. Coordinates move from the `[-1, 1]`
//! model space onto a 256x256 canvas.

use crate::palette::{room_color, RoomColor};
use crate::tensor::{HouseTensor, ROOM_INDEX_COLUMNS, ROOM_TYPE_COLUMNS};
use crate::types::Point2D;
use serde::Serialize;
use std::collections::BTreeMap;

/// Side length of the canvas decoded coordinates are mapped onto
pub const CANVAS_SIZE: f64 = 256.0;

/// One decoded room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomPolygon {
    /// Room-index category shared by every corner of this room
    pub cluster: usize,
    /// Room-type category of the cluster's first corner
    pub room_type: usize,
    pub color: RoomColor,
    /// Ring in canvas coordinates, not closed
    pub points: Vec<Point2D>,
}

impl RoomPolygon {
    /// Fewer than 3 corners: a point or a segment rather than an area
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

/// Map a model-space coordinate in `[-1, 1]` to canvas pixels
#[inline]
pub fn to_canvas(c: f64) -> f64 {
    (c / 2.0 + 0.5) * CANVAS_SIZE
}

/// Decode every room of `tensor`, ordered by ascending cluster id
///
/// Clusters with fewer than 3 corners are still emitted (and logged) so the
/// caller can decide how to draw them.
pub fn decode_polygons(tensor: &HouseTensor) -> Vec<RoomPolygon> {
    let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for row in (0..tensor.rows()).filter(|&r| tensor.is_valid(r)) {
        clusters
            .entry(tensor.argmax(row, ROOM_INDEX_COLUMNS))
            .or_default()
            .push(row);
    }

    tracing::debug!(
        rows = tensor.rows(),
        clusters = clusters.len(),
        "Decoding floorplan tensor"
    );

    clusters
        .into_iter()
        .map(|(cluster, rows)| {
            let room_type = tensor.argmax(rows[0], ROOM_TYPE_COLUMNS);
            let points: Vec<Point2D> = rows
                .iter()
                .map(|&r| {
                    let (x, y) = tensor.coords(r);
                    Point2D::new(to_canvas(x), to_canvas(y))
                })
                .collect();
            let polygon = RoomPolygon {
                cluster,
                room_type,
                color: room_color(room_type),
                points,
            };
            if polygon.is_degenerate() {
                tracing::warn!(
                    cluster,
                    corners = polygon.points.len(),
                    "Room has fewer than 3 corners, emitting degenerate polygon"
                );
            }
            polygon
        })
        .collect()
}
