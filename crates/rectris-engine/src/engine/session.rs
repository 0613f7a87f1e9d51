use crate::{
    core::{
        board::BoardError,
        geometry::{Location, Shape},
    },
    engine::player::{IllegalShapeError, LinesCleared, Player},
};

/// Error surfaced while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    #[display("illegal shape: {_0}")]
    IllegalShape(IllegalShapeError),
    #[display("board rejected placement: {_0}")]
    Board(BoardError),
}

/// Result of feeding one shape to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The shape was placed and any completed lines were cleared.
    Placed {
        location: Location,
        cleared: LinesCleared,
    },
    /// No legal placement exists. The board is unchanged and the session is
    /// over; this is an ordinary outcome, not an error.
    NoRoom,
}

/// Drives a [`Player`] through a sequence of shapes.
///
/// The session stops consuming shapes at the first one for which the player
/// finds no location, and keeps a running count of successful placements and
/// cleared lines.
#[derive(Debug, Clone)]
pub struct GameSession {
    player: Player,
    placed: usize,
    cleared: LinesCleared,
}

impl GameSession {
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            player,
            placed: 0,
            cleared: LinesCleared::default(),
        }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Number of shapes placed so far.
    #[must_use]
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Lines cleared over the whole session.
    #[must_use]
    pub const fn lines_cleared(&self) -> LinesCleared {
        self.cleared
    }

    /// Plays a single shape: asks the player for a location and, if one
    /// exists, commits the placement.
    pub fn step(&mut self, shape: Shape) -> Result<StepOutcome, GameError> {
        let Some(location) = self.player.play(shape)? else {
            return Ok(StepOutcome::NoRoom);
        };
        let cleared = self.player.place_block(location, shape)?;
        self.placed += 1;
        self.cleared.rows += cleared.rows;
        self.cleared.columns += cleared.columns;
        Ok(StepOutcome::Placed { location, cleared })
    }

    /// Plays shapes until the sequence ends or one does not fit, returning
    /// the total number placed. Shapes after the first failure are not
    /// consumed.
    pub fn play_all<I>(&mut self, shapes: I) -> Result<usize, GameError>
    where
        I: IntoIterator<Item = Shape>,
    {
        for shape in shapes {
            if matches!(self.step(shape)?, StepOutcome::NoRoom) {
                break;
            }
        }
        Ok(self.placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::Strategy;

    fn shape(width: usize, height: usize) -> Shape {
        Shape::new(width, height).unwrap()
    }

    #[test]
    fn simple_player_places_five_dominoes_on_a_3x3_board() {
        // The third domino completes columns 0 and 1, which clear and make
        // room for the remaining two.
        let player = Player::new(shape(3, 3), Strategy::Simple);
        let mut session = GameSession::new(player);

        let placed = session.play_all(vec![shape(2, 1); 5]).unwrap();
        assert_eq!(placed, 5);
        assert_eq!(session.lines_cleared(), LinesCleared { rows: 0, columns: 2 });

        let board = session.player().board();
        assert_eq!(board.row_counters(), &[2, 2, 0]);
        assert_eq!(board.column_counters(), &[2, 2, 0]);
    }

    #[test]
    fn stops_at_first_unplaceable_shape() {
        let player = Player::new(shape(3, 3), Strategy::Simple);
        let mut session = GameSession::new(player);

        // One 2x2 fits; a second does not (the free cells form an L that
        // contains no 2x2), so the trailing unit square is never consumed.
        let placed = session
            .play_all(vec![shape(2, 2), shape(2, 2), Shape::UNIT])
            .unwrap();
        assert_eq!(placed, 1);
        assert_eq!(session.player().board().row_counters(), &[2, 2, 0]);
    }

    #[test]
    fn oversized_shape_is_an_error_not_a_stop() {
        let player = Player::new(shape(2, 2), Strategy::Simple);
        let mut session = GameSession::new(player);

        let err = session.step(shape(3, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalShape(IllegalShapeError {
                shape: shape(3, 1),
                board: shape(2, 2),
            }),
        );
        assert_eq!(session.placed(), 0);
    }

    #[test]
    fn step_reports_location_and_cleared_lines() {
        let player = Player::new(shape(4, 4), Strategy::Simple);
        let mut session = GameSession::new(player);

        let outcome = session.step(shape(4, 1)).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Placed {
                location: Location::new(0, 0),
                cleared: LinesCleared { rows: 1, columns: 0 },
            },
        );
        assert_eq!(session.placed(), 1);
    }
}
