// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floorplan-Lite Core
//!
//! Pure computations behind the floorplan tooling:
//!
//! - **Mask building**: pairwise corner constraint matrices (boundary, self
//!   and generative masks) from a room/connectivity description
//! - **Polygon decoding**: room polygons and fill colors from a packed,
//!   fixed-width floorplan tensor
//!
//! Both are synchronous, allocation-local functions with no shared state.
//!
//! ## Quick Start
//!
//! ```rust
//! use floorplan_lite_core::{build_masks, Boundary, Connection, Room};
//!
//! let rooms = vec![
//!     Room::new(0.0, 0.0, 2.0).unwrap(),
//!     Room::new(10.0, 0.0, 2.0).unwrap(),
//! ];
//! let masks = build_masks(&rooms, &[Connection::new(0, 1)], &Boundary::default()).unwrap();
//! assert_eq!(masks.gen_mask.dim(), 8);
//! assert_eq!(masks.gen_mask.get(0, 4), 1);
//! ```

pub mod corner;
pub mod decoder;
pub mod error;
pub mod masks;
pub mod palette;
pub mod tensor;
pub mod types;

pub use corner::{Corner, CornerIndex, CORNERS_PER_ROOM};
pub use decoder::{decode_polygons, to_canvas, RoomPolygon, CANVAS_SIZE};
pub use error::{Error, Result};
pub use masks::{build_masks, build_masks_for, MaskMatrix, MaskSet};
pub use palette::{room_color, RoomColor, FALLBACK_COLOR};
pub use tensor::HouseTensor;
pub use types::{Boundary, Connection, MaskRequest, Point2D, Room, RoomRef};
