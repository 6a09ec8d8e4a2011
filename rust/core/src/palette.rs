// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-type color table

use serde::Serialize;

/// Fill color for a decoded room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomColor(&'static str);

/// Color for any type id not in the table
pub const FALLBACK_COLOR: RoomColor = RoomColor("#FFFFFF");

const ID_COLORS: [(usize, &str); 12] = [
    (1, "#EE4D4D"),
    (2, "#C67C7B"),
    (3, "#FFD274"),
    (4, "#BEBEBE"),
    (5, "#BFE3E8"),
    (6, "#7BA779"),
    (7, "#E87A90"),
    (8, "#FF8C69"),
    (10, "#1F849B"),
    (11, "#727171"),
    (12, "#D3A2C7"),
    (13, "#785A67"),
];

impl RoomColor {
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// RGB components of the hex string
    pub fn rgb(&self) -> [u8; 3] {
        let channel = |i: usize| {
            self.0
                .get(1 + 2 * i..3 + 2 * i)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(255)
        };
        [channel(0), channel(1), channel(2)]
    }
}

/// Resolve a room-type id to its color; unknown ids (including 0 and 9) map to white
pub fn room_color(type_id: usize) -> RoomColor {
    ID_COLORS
        .iter()
        .find(|(id, _)| *id == type_id)
        .map(|&(_, hex)| RoomColor(hex))
        .unwrap_or(FALLBACK_COLOR)
}
