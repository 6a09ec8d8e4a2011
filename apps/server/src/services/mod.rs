// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service modules wrapping the core computations.

pub mod masks;
pub mod npz;

pub use masks::generate_masks;
pub use npz::read_houses;
