// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raster rendering for floorplan tooling
//!
//! This crate turns the outputs of `floorplan-lite-core` into images:
//! 1. Corner mask matrices become heat maps with a colorbar
//! 2. Decoded room polygons become filled, outlined shapes on a square canvas
//!
//! # Usage
//!
//! ```rust,ignore
//! use floorplan_lite_render::{encode_png, render_matrix, render_polygons, MatrixStyle};
//!
//! let heat_map = render_matrix(&masks.gen_mask, &MatrixStyle::default())?;
//! let png = encode_png(&heat_map)?;
//!
//! let canvas = render_polygons(&decode_polygons(&tensor), 256)?;
//! ```

pub mod colormap;
pub mod error;
pub mod image_ops;
pub mod matrix;
pub mod polygons;

pub use colormap::Colormap;
pub use error::{RenderError, Result};
pub use image_ops::encode_png;
pub use matrix::{render_matrix, MatrixStyle};
pub use polygons::render_polygons;

use floorplan_lite_core::{MaskMatrix, RoomPolygon};

/// Render a mask heat map straight to PNG bytes
pub fn matrix_png(matrix: &MaskMatrix, style: &MatrixStyle) -> Result<Vec<u8>> {
    encode_png(&render_matrix(matrix, style)?)
}

/// Render decoded rooms straight to PNG bytes
pub fn polygons_png(polygons: &[RoomPolygon], canvas_size: u32) -> Result<Vec<u8>> {
    encode_png(&render_polygons(polygons, canvas_size)?)
}
