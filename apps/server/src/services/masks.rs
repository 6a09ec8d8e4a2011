// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mask generation with rendered heat maps.

use crate::error::ApiError;
use crate::types::MasksResponse;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use floorplan_lite_core::{build_masks_for, MaskMatrix, MaskRequest};
use floorplan_lite_render::{matrix_png, MatrixStyle};
use std::time::Instant;

/// Build all masks for `request` and render each one as a base64 PNG.
pub fn generate_masks(request: &MaskRequest, style: &MatrixStyle) -> Result<MasksResponse, ApiError> {
    let start = Instant::now();
    let masks = build_masks_for(request)?;

    let encode = |matrix: &MaskMatrix| -> Result<String, ApiError> {
        Ok(STANDARD.encode(matrix_png(matrix, style)?))
    };
    let boundary_mask_image = encode(&masks.boundary_mask)?;
    let self_mask_image = encode(&masks.self_mask)?;
    let gen_mask_image = encode(&masks.gen_mask)?;

    tracing::info!(
        rooms = request.rooms.len(),
        connections = request.connections.len(),
        corners = masks.gen_mask.dim(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Generated masks"
    );

    Ok(MasksResponse {
        boundary_mask: masks.boundary_mask,
        self_mask: masks.self_mask,
        gen_mask: masks.gen_mask,
        boundary_mask_image,
        self_mask_image,
        gen_mask_image,
        corners: masks.corners,
    })
}
