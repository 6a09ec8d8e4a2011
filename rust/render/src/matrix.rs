// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heat-map rendering of corner mask matrices

use crate::colormap::Colormap;
use crate::error::{RenderError, Result};
use crate::image_ops::filled;
use floorplan_lite_core::MaskMatrix;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Largest grid side the renderer will produce, in pixels
pub const MAX_GRID_PX: u32 = 4096;

const COLORBAR_GAP: u32 = 8;
const COLORBAR_WIDTH: u32 = 12;
/// Height of the colorbar when the matrix is empty
const MIN_COLORBAR_HEIGHT: u32 = 64;

/// Heat-map appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStyle {
    pub colormap: Colormap,
    /// Preferred side length of one matrix cell; shrunk for large matrices
    pub cell_px: u32,
    pub colorbar: bool,
}

impl Default for MatrixStyle {
    fn default() -> Self {
        Self {
            colormap: Colormap::Viridis,
            cell_px: 8,
            colorbar: true,
        }
    }
}

/// Render `matrix` as a heat map with an optional colorbar on the right
///
/// Values are normalized over the matrix's own min..max; a constant matrix
/// maps entirely to the low end of the scale. Matrices with more than
/// [`MAX_GRID_PX`] corners are downsampled: each grid pixel shows the entry
/// under its top-left corner.
pub fn render_matrix(matrix: &MaskMatrix, style: &MatrixStyle) -> Result<RgbaImage> {
    if style.cell_px == 0 {
        return Err(RenderError::InvalidCanvas("cell size must be positive".into()));
    }

    let dim = u32::try_from(matrix.dim())
        .map_err(|_| RenderError::InvalidCanvas(format!("matrix too large: {}", matrix.dim())))?;
    let cell = if dim == 0 {
        style.cell_px
    } else {
        style.cell_px.min(MAX_GRID_PX / dim).max(1)
    };
    let grid = (dim * cell).min(MAX_GRID_PX);

    let bar_height = grid.max(MIN_COLORBAR_HEIGHT);
    let (width, height) = if style.colorbar {
        (grid + COLORBAR_GAP + COLORBAR_WIDTH, bar_height)
    } else {
        (grid.max(1), grid.max(1))
    };

    let mut image = filled(width, height, Rgba([255, 255, 255, 255]));

    let entries = matrix.as_matrix();
    let (lo, hi) = entries
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = hi.saturating_sub(lo);
    let shade = |row: usize, col: usize| {
        let t = if span == 0 {
            0.0
        } else {
            (matrix.get(row, col) - lo) as f64 / span as f64
        };
        style.colormap.map(t)
    };

    if dim <= MAX_GRID_PX {
        for row in 0..matrix.dim() {
            for col in 0..matrix.dim() {
                let rect = Rect::at((col as u32 * cell) as i32, (row as u32 * cell) as i32).of_size(cell, cell);
                draw_filled_rect_mut(&mut image, rect, shade(row, col));
            }
        }
    } else {
        tracing::debug!(dim, grid, "Downsampling mask heat map");
        let sample = |px: u32| (px as u64 * dim as u64 / grid as u64) as usize;
        for py in 0..grid {
            for px in 0..grid {
                image.put_pixel(px, py, shade(sample(py), sample(px)));
            }
        }
    }

    if style.colorbar {
        let x0 = grid + COLORBAR_GAP;
        for y in 0..bar_height {
            // top of the bar is the high end of the scale
            let t = if bar_height > 1 {
                1.0 - y as f64 / (bar_height - 1) as f64
            } else {
                1.0
            };
            let color = style.colormap.map(t);
            for x in x0..x0 + COLORBAR_WIDTH {
                image.put_pixel(x, y, color);
            }
        }
    }

    tracing::debug!(dim, cell, width, height, "Rendered mask heat map");
    Ok(image)
}
