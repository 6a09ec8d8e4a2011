// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rasterizing or encoding
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid canvas: {0}")]
    InvalidCanvas(String),

    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),
}
