// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scalar to color mapping for heat maps

use crate::error::RenderError;
use image::Rgba;
use std::str::FromStr;

/// Sampled viridis stops, evenly spaced over `[0, 1]`
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

/// Color scale used for matrix heat maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Grayscale,
}

impl Colormap {
    /// Color for `t`, clamped to `[0, 1]`
    pub fn map(&self, t: f64) -> Rgba<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Viridis => {
                let scaled = t * (VIRIDIS.len() - 1) as f64;
                let lo = scaled.floor() as usize;
                let hi = (lo + 1).min(VIRIDIS.len() - 1);
                let frac = scaled - lo as f64;
                let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
                let (a, b) = (VIRIDIS[lo], VIRIDIS[hi]);
                Rgba([lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]), 255])
            }
            Colormap::Grayscale => {
                let v = (t * 255.0).round() as u8;
                Rgba([v, v, v, 255])
            }
        }
    }
}

impl FromStr for Colormap {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Colormap::Grayscale),
            _ => Err(RenderError::UnknownColormap(s.to_string())),
        }
    }
}
