// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use floorplan_lite_render::Colormap;
use std::str::FromStr;

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum request body (JSON or upload) size in MB.
    pub max_upload_size_mb: usize,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Preferred side length of one mask cell in heat-map images.
    pub mask_cell_px: u32,
    /// Color scale of the mask heat maps (`viridis` or `grayscale`).
    pub mask_colormap: Colormap,
    /// Side length of the polygon canvas image.
    pub canvas_size: u32,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            max_upload_size_mb: env_or("MAX_UPLOAD_SIZE_MB", defaults.max_upload_size_mb),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            mask_cell_px: env_or("MASK_CELL_PX", defaults.mask_cell_px),
            mask_colormap: env_or("MASK_COLORMAP", defaults.mask_colormap),
            canvas_size: env_or("CANVAS_SIZE", defaults.canvas_size),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_size_mb * 1024 * 1024
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 4000,
            max_upload_size_mb: 50,
            request_timeout_secs: 60,
            mask_cell_px: 8,
            mask_colormap: Colormap::Viridis,
            canvas_size: 256,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
