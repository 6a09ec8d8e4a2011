// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reading generated floorplan batches from `.npz` uploads.

use crate::error::ApiError;
use floorplan_lite_core::tensor::HOUSES_KEY;
use floorplan_lite_core::{Error as CoreError, HouseTensor};
use ndarray::{Array3, Axis};
use ndarray_npy::NpzReader;
use std::io::Cursor;

/// Extract sample 0 of the `houses` array from an `.npz` archive.
///
/// Accepts `float64` and `float32` arrays of shape `(samples, slots, width)`.
pub fn read_houses(bytes: &[u8]) -> Result<HouseTensor, ApiError> {
    let mut npz = NpzReader::new(Cursor::new(bytes)).map_err(|e| ApiError::Npz(e.to_string()))?;
    let names = npz.names().map_err(|e| ApiError::Npz(e.to_string()))?;
    let entry = names
        .iter()
        .find(|n| n.as_str() == HOUSES_KEY || n.strip_suffix(".npy") == Some(HOUSES_KEY))
        .cloned()
        .ok_or_else(|| CoreError::format(format!("archive has no `{}` array", HOUSES_KEY)))?;

    let houses: Array3<f64> = match npz.by_name::<_, ndarray::Ix3>(&entry) {
        Ok(array) => array,
        Err(f64_err) => {
            let narrow: Array3<f32> = npz.by_name(&entry).map_err(|_| {
                ApiError::Npz(format!("`{}` is not a 3D float array: {}", HOUSES_KEY, f64_err))
            })?;
            narrow.mapv(f64::from)
        }
    };

    let (samples, rows, width) = houses.dim();
    tracing::debug!(samples, rows, width, "Read houses array");
    if samples == 0 {
        return Err(CoreError::format(format!("`{}` contains no samples", HOUSES_KEY)).into());
    }

    let sample: Vec<f64> = houses.index_axis(Axis(0), 0).iter().copied().collect();
    Ok(HouseTensor::from_row_major(rows, width, &sample)?)
}
