//! Core data structures: the board grid and the value types it speaks in.

pub use self::{board::*, geometry::*};

pub(crate) mod board;
pub(crate) mod geometry;
