// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for mask building and tensor decoding
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the mask builder and the polygon decoder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A room, connection or boundary entry is missing a field or carries a bad value
    #[error("Validation error: {0}")]
    Validation(String),

    /// A connection points at a room that does not exist
    #[error("Connection {connection} references room {index}, but only {room_count} rooms exist")]
    RoomIndexOutOfRange {
        connection: usize,
        index: i64,
        room_count: usize,
    },

    /// The floorplan tensor is missing a key or has the wrong shape
    #[error("Format error: {0}")]
    Format(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}
