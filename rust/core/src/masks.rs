// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corner-adjacency mask construction
//!
//! Builds the three `(4n) x (4n)` constraint matrices used by layout
//! generation:
//!
//! - `boundary_mask`: all ones (the boundary does not constrain corners yet)
//! - `self_mask`: zero inside each room's own 4x4 block, one elsewhere
//! - `gen_mask`: elementwise max of the two, then forced to one between the
//!   corner blocks of every connected room pair
//!
//! Later steps only ever set entries to one, so `gen_mask` is never narrower
//! than either input mask.

use crate::corner::{Corner, CornerIndex};
use crate::error::{Error, Result};
use crate::types::{Boundary, Connection, MaskRequest, Point2D, Room};
use nalgebra::DMatrix;
use serde::ser::{Serialize, Serializer};

/// Square 0/1 matrix over corner pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskMatrix(DMatrix<u8>);

impl MaskMatrix {
    pub fn ones(corners: usize) -> Self {
        Self(DMatrix::from_element(corners, corners, 1))
    }

    pub fn zeros(corners: usize) -> Self {
        Self(DMatrix::zeros(corners, corners))
    }

    /// Side length (number of corners)
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[(row, col)]
    }

    /// Set every entry of the `rows x cols` block
    pub fn fill_block(&mut self, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>, value: u8) {
        for r in rows {
            for c in cols.clone() {
                self.0[(r, c)] = value;
            }
        }
    }

    pub fn elementwise_max(&self, other: &MaskMatrix) -> MaskMatrix {
        MaskMatrix(self.0.zip_map(&other.0, |a, b| a.max(b)))
    }

    pub fn as_matrix(&self) -> &DMatrix<u8> {
        &self.0
    }

    /// Row-major copy, as sent to JSON clients
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.0
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl Serialize for MaskMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_rows())
    }
}

/// Output of [`build_masks`]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MaskSet {
    pub boundary_mask: MaskMatrix,
    pub self_mask: MaskMatrix,
    pub gen_mask: MaskMatrix,
    /// Corner positions in corner-index order
    pub corners: Vec<Point2D>,
}

/// Build boundary, self and generative masks for `rooms`
///
/// All connection indices are checked before any matrix is allocated; an
/// index outside `[0, rooms.len())` fails with [`Error::RoomIndexOutOfRange`].
pub fn build_masks(rooms: &[Room], connections: &[Connection], boundary: &Boundary) -> Result<MaskSet> {
    let room_count = rooms.len();
    let resolved = resolve_connections(connections, room_count)?;
    let corner_count = CornerIndex::count(room_count);

    tracing::debug!(
        rooms = room_count,
        connections = resolved.len(),
        corners = corner_count,
        boundary_points = boundary.points().len(),
        "Building corner masks"
    );

    let boundary_mask = MaskMatrix::ones(corner_count);

    let mut self_mask = MaskMatrix::ones(corner_count);
    for room in 0..room_count {
        self_mask.fill_block(CornerIndex::block(room), CornerIndex::block(room), 0);
    }

    let mut gen_mask = boundary_mask.elementwise_max(&self_mask);
    for &(source, target) in &resolved {
        gen_mask.fill_block(CornerIndex::block(source), CornerIndex::block(target), 1);
        gen_mask.fill_block(CornerIndex::block(target), CornerIndex::block(source), 1);
    }

    let mut corners = vec![Point2D::new(0.0, 0.0); corner_count];
    for (index, room) in rooms.iter().enumerate() {
        for (corner, point) in Corner::ALL.into_iter().zip(room.corners()) {
            corners[CornerIndex::new(index, corner).get()] = point;
        }
    }

    Ok(MaskSet {
        boundary_mask,
        self_mask,
        gen_mask,
        corners,
    })
}

/// Convenience wrapper over [`build_masks`] for a parsed request
pub fn build_masks_for(request: &MaskRequest) -> Result<MaskSet> {
    build_masks(&request.rooms, &request.connections, &request.boundary)
}

fn resolve_connections(connections: &[Connection], room_count: usize) -> Result<Vec<(usize, usize)>> {
    let check = |connection: usize, index: i64| -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < room_count)
            .ok_or(Error::RoomIndexOutOfRange {
                connection,
                index,
                room_count,
            })
    };

    connections
        .iter()
        .enumerate()
        .map(|(i, c)| Ok((check(i, c.source.index)?, check(i, c.target.index)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms(n: usize) -> Vec<Room> {
        (0..n)
            .map(|i| Room::new(i as f64 * 10.0, 0.0, 2.0).unwrap())
            .collect()
    }

    #[test]
    fn test_shapes() {
        for n in 0..5 {
            let masks = build_masks(&rooms(n), &[], &Boundary::default()).unwrap();
            assert_eq!(masks.boundary_mask.dim(), 4 * n);
            assert_eq!(masks.self_mask.dim(), 4 * n);
            assert_eq!(masks.gen_mask.dim(), 4 * n);
            assert_eq!(masks.corners.len(), 4 * n);
        }
    }

    #[test]
    fn test_empty_input() {
        let masks = build_masks(&[], &[], &Boundary::default()).unwrap();
        assert!(masks.boundary_mask.is_empty());
        assert!(masks.self_mask.is_empty());
        assert!(masks.gen_mask.is_empty());
        assert!(masks.gen_mask.to_rows().is_empty());
    }

    #[test]
    fn test_self_mask_block_structure() {
        let masks = build_masks(&rooms(3), &[], &Boundary::default()).unwrap();
        for i in 0..12 {
            for j in 0..12 {
                let expected = if i / 4 == j / 4 { 0 } else { 1 };
                assert_eq!(masks.self_mask.get(i, j), expected, "entry ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_gen_mask_widens() {
        let masks = build_masks(&rooms(3), &[Connection::new(0, 2)], &Boundary::default()).unwrap();
        for i in 0..12 {
            for j in 0..12 {
                let floor = masks.boundary_mask.get(i, j).max(masks.self_mask.get(i, j));
                assert!(masks.gen_mask.get(i, j) >= floor);
            }
        }
    }

    #[test]
    fn test_connection_block_is_symmetric() {
        let masks = build_masks(&rooms(3), &[Connection::new(2, 0)], &Boundary::default()).unwrap();
        for s in CornerIndex::block(2) {
            for t in CornerIndex::block(0) {
                assert_eq!(masks.gen_mask.get(s, t), 1);
                assert_eq!(masks.gen_mask.get(t, s), 1);
            }
        }
    }

    #[test]
    fn test_self_connection_opens_own_block() {
        let masks = build_masks(&rooms(2), &[Connection::new(1, 1)], &Boundary::default()).unwrap();
        for i in CornerIndex::block(1) {
            for j in CornerIndex::block(1) {
                assert_eq!(masks.gen_mask.get(i, j), 1);
                assert_eq!(masks.self_mask.get(i, j), 0);
            }
        }
    }

    #[test]
    fn test_out_of_range_connection() {
        let err = build_masks(&rooms(2), &[Connection::new(0, 1), Connection::new(0, 2)], &Boundary::default())
            .unwrap_err();
        assert_eq!(
            err,
            Error::RoomIndexOutOfRange {
                connection: 1,
                index: 2,
                room_count: 2
            }
        );

        let err = build_masks(&rooms(2), &[Connection::new(-1, 0)], &Boundary::default()).unwrap_err();
        assert!(matches!(err, Error::RoomIndexOutOfRange { index: -1, .. }));
    }

    #[test]
    fn test_corners_follow_index_layout() {
        let masks = build_masks(&rooms(2), &[], &Boundary::default()).unwrap();
        // room 1 is centered at (10, 0) with size 2
        assert_eq!(masks.corners[4], Point2D::new(9.0, -1.0));
        assert_eq!(masks.corners[6], Point2D::new(11.0, 1.0));
        assert_eq!(masks.corners[7], Point2D::new(9.0, 1.0));
    }

    #[test]
    fn test_serializes_as_rows() {
        let masks = build_masks(&rooms(1), &[], &Boundary::default()).unwrap();
        let json = serde_json::to_value(&masks.self_mask).unwrap();
        assert_eq!(json, serde_json::json!([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
    }
}
