// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input types for the mask builder

use crate::corner::Corner;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A 2D point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Room size as it arrives on the wire: a number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoomSize {
    Number(f64),
    Text(String),
}

impl RoomSize {
    fn resolve(&self) -> Option<f64> {
        match self {
            RoomSize::Number(v) => Some(*v),
            RoomSize::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Wire form of a room entry
#[derive(Debug, Clone, Deserialize)]
pub struct RoomSpec {
    pub x: f64,
    pub y: f64,
    pub size: RoomSize,
}

/// Square room centered at (x, y) with side length `size`
///
/// Rooms are always square; a single `size` drives both extents.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Room {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Room {
    pub fn new(x: f64, y: f64, size: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::validation(format!(
                "room center must be finite, got ({}, {})",
                x, y
            )));
        }
        if !size.is_finite() || size < 0.0 {
            return Err(Error::validation(format!(
                "room size must be a finite non-negative number, got {}",
                size
            )));
        }
        Ok(Self { x, y, size })
    }

    pub fn corner(&self, corner: Corner) -> Point2D {
        let half = self.size / 2.0;
        let (sx, sy) = corner.sign();
        Point2D::new(self.x + sx * half, self.y + sy * half)
    }

    /// The 4 corners in index order (top-left, top-right, bottom-right, bottom-left)
    pub fn corners(&self) -> [Point2D; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }
}

impl TryFrom<RoomSpec> for Room {
    type Error = Error;

    fn try_from(spec: RoomSpec) -> Result<Self> {
        let size = spec.size.resolve().ok_or_else(|| {
            Error::validation(format!("room size is not numeric: {:?}", spec.size))
        })?;
        Room::new(spec.x, spec.y, size)
    }
}

/// Reference to a room by its position in the room list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomRef {
    pub index: i64,
}

/// Undirected adjacency between two rooms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    pub source: RoomRef,
    pub target: RoomRef,
}

impl Connection {
    pub fn new(source: i64, target: i64) -> Self {
        Self {
            source: RoomRef { index: source },
            target: RoomRef { index: target },
        }
    }
}

/// Outer polygon of the floorplan
///
/// Accepted and validated, but it does not constrain any mask yet. It is kept
/// on the request so a boundary-aware rule can be added without changing the
/// interface.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Boundary {
    points: Vec<Point2D>,
}

impl Boundary {
    pub fn new(points: Vec<Point2D>) -> Result<Self> {
        if let Some(pos) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::validation(format!(
                "boundary point {} is not finite",
                pos
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Parsed `{Rooms, Connectivity, Boundary}` request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskRequest {
    pub rooms: Vec<Room>,
    pub connections: Vec<Connection>,
    pub boundary: Boundary,
}

impl MaskRequest {
    /// Parse a JSON body. Absent keys default to empty lists.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::validation(format!("invalid JSON body: {}", e)))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::validation("request body must be a JSON object"))?;

        let rooms = list_field(obj.get("Rooms"), "Rooms")?
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let spec: RoomSpec = serde_json::from_value(entry.clone())
                    .map_err(|e| Error::validation(format!("room {}: {}", i, e)))?;
                Room::try_from(spec).map_err(|e| match e {
                    Error::Validation(msg) => Error::Validation(format!("room {}: {}", i, msg)),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let connections = list_field(obj.get("Connectivity"), "Connectivity")?
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::from_value::<Connection>(entry.clone())
                    .map_err(|e| Error::validation(format!("connection {}: {}", i, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        let points = list_field(obj.get("Boundary"), "Boundary")?
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::from_value::<Point2D>(entry.clone())
                    .map_err(|e| Error::validation(format!("boundary point {}: {}", i, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rooms,
            connections,
            boundary: Boundary::new(points)?,
        })
    }
}

fn list_field<'a>(value: Option<&'a Value>, name: &str) -> Result<&'a [Value]> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(Error::validation(format!("`{}` must be a list", name))),
    }
}
