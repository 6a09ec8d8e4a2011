// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use floorplan_lite_core::Error as CoreError;
use floorplan_lite_render::RenderError;
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No {field} part in the request")]
    MissingFile { field: &'static str },

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error(transparent)]
    Input(#[from] CoreError),

    #[error("Invalid npz archive: {0}")]
    Npz(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingFile { .. } => (StatusCode::BAD_REQUEST, "MISSING_FILE"),
            // body-limit rejections surface here as 413
            ApiError::Multipart(e) => {
                let status = e.status();
                if status == StatusCode::PAYLOAD_TOO_LARGE {
                    (status, "FILE_TOO_LARGE")
                } else {
                    (status, "MULTIPART_ERROR")
                }
            }
            ApiError::Input(CoreError::Validation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
            }
            ApiError::Input(CoreError::RoomIndexOutOfRange { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ROOM_INDEX_OUT_OF_RANGE")
            }
            ApiError::Input(CoreError::Format(_)) => (StatusCode::BAD_REQUEST, "FORMAT_ERROR"),
            ApiError::Npz(_) => (StatusCode::BAD_REQUEST, "NPZ_ERROR"),
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_client_error() {
            tracing::warn!(code, error = %self, "Rejected request");
        } else {
            tracing::error!(code, error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
