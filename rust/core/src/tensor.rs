// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Packed floorplan tensor layout
//!
//! Each row describes one corner slot of a generated floorplan:
//!
//! | columns   | content                              |
//! |-----------|--------------------------------------|
//! | `0..2`    | corner coordinates in `[-1, 1]`      |
//! | `2..27`   | room-type logits (25 categories)     |
//! | `58..90`  | room-index logits (32 categories)    |
//! | `91`      | padding flag (0 = real corner)       |
//!
//! The offsets belong to the upstream producer and must not change.

use crate::error::{Error, Result};
use nalgebra::DMatrix;
use serde_json::Value;
use std::ops::Range;

pub const COORD_COLUMNS: Range<usize> = 0..2;
pub const ROOM_TYPE_COLUMNS: Range<usize> = 2..27;
pub const ROOM_INDEX_COLUMNS: Range<usize> = 58..90;
pub const PADDING_COLUMN: usize = 91;
/// Narrowest row that still carries every field above
pub const MIN_WIDTH: usize = PADDING_COLUMN + 1;

/// Largest accepted `|x|` or `|y|` on a real corner; generous slack over `[-1, 1]`
pub const MAX_ABS_COORD: f64 = 16.0;

/// Key of the batch array in uploaded archives and JSON bodies
pub const HOUSES_KEY: &str = "houses";

/// One floorplan sample: `rows x width`, width checked against [`MIN_WIDTH`]
#[derive(Debug, Clone, PartialEq)]
pub struct HouseTensor {
    data: DMatrix<f64>,
}

impl HouseTensor {
    /// Build from row-major data
    pub fn from_row_major(rows: usize, width: usize, data: &[f64]) -> Result<Self> {
        if data.len() != rows * width {
            return Err(Error::format(format!(
                "expected {} values for a {}x{} tensor, got {}",
                rows * width,
                rows,
                width,
                data.len()
            )));
        }
        Self::validate_width(rows, width)?;
        let tensor = Self {
            data: DMatrix::from_row_slice(rows, width, data),
        };
        if let Some(row) = (0..rows).find(|&r| {
            let (x, y) = tensor.coords(r);
            tensor.is_valid(r) && !(in_range(x) && in_range(y))
        }) {
            let (x, y) = tensor.coords(row);
            return Err(Error::format(format!(
                "row {} has coordinates ({}, {}) outside [-{max}, {max}]",
                row,
                x,
                y,
                max = MAX_ABS_COORD
            )));
        }
        Ok(tensor)
    }

    /// Build from nested rows; all rows must share one width
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let width = rows.first().map_or(MIN_WIDTH, Vec::len);
        if let Some(pos) = rows.iter().position(|r| r.len() != width) {
            return Err(Error::format(format!(
                "row {} has {} columns, expected {}",
                pos,
                rows[pos].len(),
                width
            )));
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_row_major(rows.len(), width, &flat)
    }

    /// Take sample 0 of a `(samples, slots, width)` batch
    pub fn from_batch(houses: &[Vec<Vec<f64>>]) -> Result<Self> {
        let first = houses
            .first()
            .ok_or_else(|| Error::format("`houses` contains no samples"))?;
        Self::from_rows(first)
    }

    /// Parse `{"houses": [[[...]]]}`
    pub fn from_json(value: &Value) -> Result<Self> {
        let houses = value
            .get(HOUSES_KEY)
            .ok_or_else(|| Error::format(format!("missing `{}` key", HOUSES_KEY)))?;
        let houses: Vec<Vec<Vec<f64>>> = serde_json::from_value(houses.clone()).map_err(|e| {
            Error::format(format!("`{}` must be a 3D numeric array: {}", HOUSES_KEY, e))
        })?;
        Self::from_batch(&houses)
    }

    fn validate_width(rows: usize, width: usize) -> Result<()> {
        if rows > 0 && width < MIN_WIDTH {
            return Err(Error::format(format!(
                "tensor rows have {} columns, at least {} required",
                width, MIN_WIDTH
            )));
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// Whether row `row` is a real corner (padding flag exactly zero)
    pub fn is_valid(&self, row: usize) -> bool {
        self.data[(row, PADDING_COLUMN)] == 0.0
    }

    pub fn coords(&self, row: usize) -> (f64, f64) {
        (
            self.data[(row, COORD_COLUMNS.start)],
            self.data[(row, COORD_COLUMNS.start + 1)],
        )
    }

    /// Index of the largest value in `columns`, relative to `columns.start`
    ///
    /// Ties resolve to the lowest index. NaN counts as the maximum, so the
    /// first NaN wins, the same way numpy's `argmax` treats it.
    pub fn argmax(&self, row: usize, columns: Range<usize>) -> usize {
        let mut best = 0;
        let mut best_value = f64::NEG_INFINITY;
        for (i, col) in columns.enumerate() {
            let value = self.data[(row, col)];
            if value.is_nan() {
                return i;
            }
            if value > best_value {
                best = i;
                best_value = value;
            }
        }
        best
    }
}

fn in_range(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_ABS_COORD
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(flag: f64) -> Vec<f64> {
        let mut r = vec![0.0; MIN_WIDTH];
        r[PADDING_COLUMN] = flag;
        r
    }

    #[test]
    fn test_width_validated() {
        let err = HouseTensor::from_rows(&[vec![0.0; 91]]).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert!(HouseTensor::from_rows(&[row(0.0)]).is_ok());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = HouseTensor::from_rows(&[row(0.0), vec![0.0; 100]]).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_missing_key() {
        let err = HouseTensor::from_json(&json!({"rooms": []})).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_empty_batch() {
        let err = HouseTensor::from_json(&json!({"houses": []})).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_only_first_sample_used() {
        let tensor = HouseTensor::from_batch(&[vec![row(0.0)], vec![row(1.0), row(1.0)]]).unwrap();
        assert_eq!(tensor.rows(), 1);
        assert!(tensor.is_valid(0));
    }

    #[test]
    fn test_argmax_first_on_ties() {
        let mut r = row(0.0);
        r[ROOM_INDEX_COLUMNS.start + 3] = 1.0;
        r[ROOM_INDEX_COLUMNS.start + 7] = 1.0;
        let tensor = HouseTensor::from_rows(&[r]).unwrap();
        assert_eq!(tensor.argmax(0, ROOM_INDEX_COLUMNS), 3);
        assert_eq!(tensor.argmax(0, ROOM_TYPE_COLUMNS), 0);
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let mut r = row(0.0);
        r[0] = f64::NAN;
        assert!(HouseTensor::from_rows(&[r.clone()]).is_err());
        // padding rows are never decoded, so their contents do not matter
        r[PADDING_COLUMN] = 1.0;
        assert!(HouseTensor::from_rows(&[r]).is_ok());
    }

    #[test]
    fn test_far_off_coordinates_rejected() {
        let mut r = row(0.0);
        r[0] = 1e12;
        r[1] = -1e12;
        let err = HouseTensor::from_rows(&[r.clone()]).unwrap_err();
        assert!(matches!(err, Error::Format(_)));

        r[0] = MAX_ABS_COORD;
        r[1] = -MAX_ABS_COORD;
        assert!(HouseTensor::from_rows(&[r]).is_ok());
    }

    #[test]
    fn test_argmax_first_nan_wins() {
        let mut r = row(0.0);
        r[ROOM_TYPE_COLUMNS.start + 1] = 5.0;
        r[ROOM_TYPE_COLUMNS.start + 4] = f64::NAN;
        r[ROOM_TYPE_COLUMNS.start + 6] = f64::NAN;
        let tensor = HouseTensor::from_rows(&[r]).unwrap();
        assert_eq!(tensor.argmax(0, ROOM_TYPE_COLUMNS), 4);
    }

    #[test]
    fn test_row_major_length_checked() {
        assert!(HouseTensor::from_row_major(2, MIN_WIDTH, &[0.0; MIN_WIDTH]).is_err());
    }
}
