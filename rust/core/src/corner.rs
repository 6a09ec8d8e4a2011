// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corner addressing shared by every mask structure
//!
//! Every room owns exactly four corners. Corner `k` of room `r` lives at the
//! global index `r * 4 + k`; all mask matrices are addressed this way.

use std::ops::Range;

/// Number of corners each room contributes
pub const CORNERS_PER_ROOM: usize = 4;

/// One of the four bounding-square corners, in their fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    /// All corners in index order
    pub const ALL: [Corner; CORNERS_PER_ROOM] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    #[inline]
    pub fn offset(self) -> usize {
        self as usize
    }

    /// Unit direction of this corner relative to the room center
    #[inline]
    pub fn sign(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomRight => (1.0, 1.0),
            Corner::BottomLeft => (-1.0, 1.0),
        }
    }
}

/// Global corner index (`room * 4 + corner`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CornerIndex(usize);

impl CornerIndex {
    #[inline]
    pub fn new(room: usize, corner: Corner) -> Self {
        Self(room * CORNERS_PER_ROOM + corner.offset())
    }

    /// Index range covering all corners of `room`
    #[inline]
    pub fn block(room: usize) -> Range<usize> {
        let start = room * CORNERS_PER_ROOM;
        start..start + CORNERS_PER_ROOM
    }

    /// Total corner count for `room_count` rooms
    #[inline]
    pub fn count(room_count: usize) -> usize {
        room_count * CORNERS_PER_ROOM
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_formula() {
        assert_eq!(CornerIndex::new(0, Corner::TopLeft).get(), 0);
        assert_eq!(CornerIndex::new(2, Corner::BottomRight).get(), 10);
        assert_eq!(CornerIndex::new(3, Corner::BottomLeft).get(), 15);
    }

    #[test]
    fn test_block_matches_corner_indices() {
        let block: Vec<usize> = CornerIndex::block(1).collect();
        let expected: Vec<usize> = Corner::ALL
            .iter()
            .map(|&c| CornerIndex::new(1, c).get())
            .collect();
        assert_eq!(block, expected);
        assert_eq!(CornerIndex::count(3), 12);
    }
}
