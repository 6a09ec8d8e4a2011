// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan tensor visualization endpoints.

use crate::error::ApiError;
use crate::services::read_houses;
use crate::types::PolygonsResponse;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use floorplan_lite_core::{decode_polygons, Error as CoreError, HouseTensor, CANVAS_SIZE};
use floorplan_lite_render::polygons_png;

const UPLOAD_FIELD: &str = "npz_file";

/// Extract the npz upload from a multipart request.
async fn extract_npz(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default();
        tracing::debug!(field_name = %field_name, "Processing multipart field");

        if field_name == UPLOAD_FIELD || field_name == "file" {
            let bytes = field.bytes().await?;
            tracing::debug!(size = bytes.len(), "Extracted npz from multipart");
            return Ok(bytes.to_vec());
        }
    }

    tracing::warn!("No '{}' field found in multipart request", UPLOAD_FIELD);
    Err(ApiError::MissingFile { field: UPLOAD_FIELD })
}

/// POST /plot_polygons - Render sample 0 of an uploaded `houses` batch as PNG.
pub async fn plot(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response, ApiError> {
    let data = extract_npz(&mut multipart).await?;
    let canvas_size = state.config.canvas_size;

    let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ApiError> {
        let tensor = read_houses(&data)?;
        let polygons = decode_polygons(&tensor);
        tracing::info!(rooms = polygons.len(), "Decoded floorplan");
        Ok(polygons_png(&polygons, canvas_size)?)
    })
    .await??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// POST /api/v1/polygons/json - Decode a JSON `{"houses": [...]}` body to polygons.
pub async fn decode_json(body: Bytes) -> Result<Json<PolygonsResponse>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| CoreError::format(format!("invalid JSON body: {}", e)))?;

    let polygons = tokio::task::spawn_blocking(move || -> Result<_, ApiError> {
        let tensor = HouseTensor::from_json(&value)?;
        Ok(decode_polygons(&tensor))
    })
    .await??;

    Ok(Json(PolygonsResponse {
        canvas_size: CANVAS_SIZE,
        polygons,
    }))
}
