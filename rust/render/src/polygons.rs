// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canvas rendering of decoded room polygons

use crate::error::{RenderError, Result};
use crate::image_ops::{blend_masked, filled};
use floorplan_lite_core::{Point2D, RoomPolygon, CANVAS_SIZE};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

/// Opacity of room fills
pub const FILL_ALPHA: f32 = 0.7;

const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render `polygons` onto a white `canvas_size` x `canvas_size` image
///
/// Polygon coordinates are in decoder canvas units (0..256) with y pointing
/// up, and are scaled to `canvas_size`. Rooms are filled in order, so later
/// rooms sit on top. Degenerate rooms (fewer than 3 distinct corners) get an
/// outline only. Geometry is clipped to the canvas before rasterizing, and
/// non-finite points are skipped.
pub fn render_polygons(polygons: &[RoomPolygon], canvas_size: u32) -> Result<RgbaImage> {
    if canvas_size == 0 {
        return Err(RenderError::InvalidCanvas("canvas size must be positive".into()));
    }

    let mut image = filled(canvas_size, canvas_size, BACKGROUND);
    let scale = canvas_size as f64 / CANVAS_SIZE;
    let bounds = ClipBox::around(canvas_size);
    let to_pixel = |p: &Point2D| -> Option<(f64, f64)> {
        let pixel = (p.x * scale, canvas_size as f64 - p.y * scale);
        (pixel.0.is_finite() && pixel.1.is_finite()).then_some(pixel)
    };

    for polygon in polygons {
        let pixels: Vec<(f64, f64)> = polygon.points.iter().filter_map(to_pixel).collect();
        if pixels.len() < polygon.points.len() {
            tracing::warn!(cluster = polygon.cluster, "Skipping non-finite polygon points");
        }

        let ring = distinct_ring(&bounds.clip_ring(&pixels));
        if ring.len() >= 3 {
            let mut mask = GrayImage::new(canvas_size, canvas_size);
            draw_polygon_mut(&mut mask, &ring, Luma([255]));
            let [r, g, b] = polygon.color.rgb();
            blend_masked(&mut image, &mask, Rgba([r, g, b, 255]), FILL_ALPHA);
        } else if polygon.is_degenerate() {
            tracing::debug!(cluster = polygon.cluster, "Drawing degenerate room as outline");
        }

        draw_outline(&mut image, &pixels, &bounds);
    }

    Ok(image)
}

/// Pixel-space rectangle one pixel wider than the canvas on every side
#[derive(Debug, Clone, Copy)]
struct ClipBox {
    lo: f64,
    hi: f64,
}

impl ClipBox {
    fn around(canvas_size: u32) -> Self {
        Self {
            lo: -1.0,
            hi: canvas_size as f64 + 1.0,
        }
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        (self.lo..=self.hi).contains(&x) && (self.lo..=self.hi).contains(&y)
    }

    /// Sutherland-Hodgman against the four box edges
    fn clip_ring(&self, ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let edges: [(usize, f64, bool); 4] = [
            (0, self.lo, true),
            (0, self.hi, false),
            (1, self.lo, true),
            (1, self.hi, false),
        ];
        let mut out = ring.to_vec();
        for (axis, limit, keep_above) in edges {
            if out.is_empty() {
                break;
            }
            let inside = |p: (f64, f64)| {
                let v = if axis == 0 { p.0 } else { p.1 };
                if keep_above {
                    v >= limit
                } else {
                    v <= limit
                }
            };
            let cross = |a: (f64, f64), b: (f64, f64)| {
                let (va, vb) = if axis == 0 { (a.0, b.0) } else { (a.1, b.1) };
                let t = (limit - va) / (vb - va);
                let p = (a.0 + t * (b.0 - a.0), a.1 + t * (b.1 - a.1));
                if axis == 0 {
                    (limit, p.1)
                } else {
                    (p.0, limit)
                }
            };
            let input = std::mem::take(&mut out);
            for (i, &current) in input.iter().enumerate() {
                let previous = input[(i + input.len() - 1) % input.len()];
                match (inside(previous), inside(current)) {
                    (true, true) => out.push(current),
                    (true, false) => out.push(cross(previous, current)),
                    (false, true) => {
                        out.push(cross(previous, current));
                        out.push(current);
                    }
                    (false, false) => {}
                }
            }
        }
        out
    }

    /// Liang-Barsky; `None` when the segment misses the box
    fn clip_segment(&self, a: (f64, f64), b: (f64, f64)) -> Option<((f32, f32), (f32, f32))> {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [
            (-dx, a.0 - self.lo),
            (dx, self.hi - a.0),
            (-dy, a.1 - self.lo),
            (dy, self.hi - a.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }
        let at = |t: f64| ((a.0 + t * dx) as f32, (a.1 + t * dy) as f32);
        Some((at(t0), at(t1)))
    }
}

/// Integer ring with consecutive duplicates and the closing point removed
fn distinct_ring(pixels: &[(f64, f64)]) -> Vec<Point<i32>> {
    let mut ring: Vec<Point<i32>> = Vec::with_capacity(pixels.len());
    for &(x, y) in pixels {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn draw_outline(image: &mut RgbaImage, pixels: &[(f64, f64)], bounds: &ClipBox) {
    match pixels {
        [] => {}
        [p] => {
            if bounds.contains(*p) {
                draw_filled_circle_mut(image, (p.0.round() as i32, p.1.round() as i32), 1, OUTLINE);
            }
        }
        [a, b] => draw_clipped_segment(image, *a, *b, bounds),
        _ => {
            for (i, &start) in pixels.iter().enumerate() {
                draw_clipped_segment(image, start, pixels[(i + 1) % pixels.len()], bounds);
            }
        }
    }
}

fn draw_clipped_segment(image: &mut RgbaImage, a: (f64, f64), b: (f64, f64), bounds: &ClipBox) {
    if let Some((start, end)) = bounds.clip_segment(a, b) {
        draw_line_segment_mut(image, start, end, OUTLINE);
    }
}
