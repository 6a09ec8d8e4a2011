// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mask generation endpoint.

use crate::error::ApiError;
use crate::services::generate_masks;
use crate::types::MasksResponse;
use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use floorplan_lite_core::MaskRequest;
use floorplan_lite_render::MatrixStyle;

/// POST /generate_masks - Build masks from `{Rooms, Connectivity, Boundary}`.
///
/// The body is parsed here rather than through the `Json` extractor so that
/// malformed rooms surface as validation errors with the offending index.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Json<MasksResponse>, ApiError> {
    let request = MaskRequest::from_json(&body)?;
    tracing::debug!(
        rooms = request.rooms.len(),
        connections = request.connections.len(),
        "Mask request"
    );

    let style = MatrixStyle {
        colormap: state.config.mask_colormap,
        cell_px: state.config.mask_cell_px,
        ..Default::default()
    };

    let response = tokio::task::spawn_blocking(move || generate_masks(&request, &style)).await??;
    Ok(Json(response))
}
