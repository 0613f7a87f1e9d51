//! Board model and automated players for a rectangle-placement puzzle.
//!
//! A fixed-size board accepts axis-aligned rectangular pieces; whenever a
//! row or column fills up completely it is cleared. [`Player`] decides where
//! each incoming piece goes, and [`GameSession`] drives a whole game from a
//! sequence of [`Shape`]s.

pub use self::{core::*, engine::*, piece_source::*};

pub mod core;
pub mod engine;
pub mod piece_source;
