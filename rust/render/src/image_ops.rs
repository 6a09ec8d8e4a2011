// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pixel-level helpers shared by the renderers

use crate::error::Result;
use image::{GrayImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encode an RGBA image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Blend `color` onto every pixel of `target` where `mask` is set
///
/// `alpha` is the weight of `color` (0.0 keeps the target, 1.0 replaces it).
pub fn blend_masked(target: &mut RgbaImage, mask: &GrayImage, color: Rgba<u8>, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel.0[0] == 0 || x >= target.width() || y >= target.height() {
            continue;
        }
        let dst = target.get_pixel_mut(x, y);
        for c in 0..3 {
            let mixed = color.0[c] as f32 * alpha + dst.0[c] as f32 * (1.0 - alpha);
            dst.0[c] = mixed.round() as u8;
        }
        dst.0[3] = 255;
    }
}

/// Solid-color RGBA canvas
pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}
