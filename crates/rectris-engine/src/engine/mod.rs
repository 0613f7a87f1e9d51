//! Automated placement: strategies, scoring, and the game driver.
//!
//! - [`Player`] - owns a board and picks locations for incoming shapes,
//!   either first-fit ([`Strategy::Simple`]) or by scoring every legal
//!   placement ([`Strategy::Expert`])
//! - [`ScoreWeights`] - the tunable constants behind the expert heuristic
//! - [`GameSession`] - feeds a shape sequence to a player, stopping at the
//!   first shape that finds no room
//!
//! # Example
//!
//! ```
//! use rectris_engine::{GameSession, Player, Shape, Strategy};
//!
//! let player = Player::new(Shape::new(5, 5)?, Strategy::Expert);
//! let mut session = GameSession::new(player);
//!
//! let shapes = vec![Shape::new(2, 1)?, Shape::new(1, 3)?];
//! let placed = session.play_all(shapes)?;
//! assert_eq!(placed, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{player::*, session::*, weights::*};

pub(crate) mod heuristic;
pub(crate) mod player;
pub(crate) mod session;
pub(crate) mod weights;
