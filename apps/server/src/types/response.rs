// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use floorplan_lite_core::{MaskMatrix, Point2D, RoomPolygon};
use serde::Serialize;

/// Mask generation response: the three matrices plus base64 PNG heat maps.
#[derive(Debug, Clone, Serialize)]
pub struct MasksResponse {
    pub boundary_mask: MaskMatrix,
    pub self_mask: MaskMatrix,
    pub gen_mask: MaskMatrix,
    pub boundary_mask_image: String,
    pub self_mask_image: String,
    pub gen_mask_image: String,
    /// Corner positions in corner-index order.
    pub corners: Vec<Point2D>,
}

/// Decoded polygons, for clients that draw their own canvas.
#[derive(Debug, Clone, Serialize)]
pub struct PolygonsResponse {
    pub canvas_size: f64,
    pub polygons: Vec<RoomPolygon>,
}
