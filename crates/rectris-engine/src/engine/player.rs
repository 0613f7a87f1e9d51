use crate::{
    core::{
        board::{Board, BoardError},
        geometry::{Location, Shape},
    },
    engine::{heuristic::score_placement, weights::ScoreWeights},
};

/// Placement strategy selector.
///
/// Parses case-insensitively from `"simple"` or `"expert"`; any other name
/// is rejected at parse time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Strategy {
    /// First raster-order empty fit.
    #[default]
    Simple,
    /// Highest-scoring placement under the weighted heuristic.
    Expert,
}

/// Error returned by [`Player::play`] for a shape exceeding the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("shape {shape} does not fit on a {board} board")]
pub struct IllegalShapeError {
    pub shape: Shape,
    pub board: Shape,
}

/// Rows and columns cleared by a single placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinesCleared {
    pub rows: usize,
    pub columns: usize,
}

impl LinesCleared {
    #[must_use]
    pub const fn total(self) -> usize {
        self.rows + self.columns
    }
}

/// An automated player owning one board for the duration of a game.
///
/// [`Player::play`] chooses a location for a shape without touching the
/// board; [`Player::place_block`] commits a placement and clears whatever
/// rows and columns it completed. The player keeps no state between calls
/// beyond the board itself and the scoring weights.
#[derive(Debug, Clone)]
pub struct Player {
    board: Board,
    strategy: Strategy,
    weights: ScoreWeights,
}

impl Player {
    /// Creates a player with an empty board of the given dimensions, using
    /// the tuned scoring weights.
    #[must_use]
    pub fn new(board_shape: Shape, strategy: Strategy) -> Self {
        Self {
            board: Board::new(board_shape),
            strategy,
            weights: ScoreWeights::TUNED,
        }
    }

    /// Replaces the scoring weights, for tuning or testing.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns true iff the shape fits within the board's dimensions.
    #[must_use]
    pub fn is_legal(&self, shape: Shape) -> bool {
        shape.fits_within(self.board.shape())
    }

    /// Chooses a location for the shape without mutating the board, or
    /// `None` if no legal placement exists.
    pub fn play(&self, shape: Shape) -> Result<Option<Location>, IllegalShapeError> {
        if !self.is_legal(shape) {
            return Err(IllegalShapeError {
                shape,
                board: self.board.shape(),
            });
        }
        let location = match self.strategy {
            Strategy::Simple => self.first_fit(shape),
            Strategy::Expert => self.best_fit(shape),
        };
        Ok(location)
    }

    /// First empty fit in raster order: rows ascending, then columns.
    /// Positions where the fit test itself runs out of bounds are skipped.
    fn first_fit(&self, shape: Shape) -> Option<Location> {
        for row in 0..self.board.height() {
            for column in 0..self.board.width() {
                let location = Location::new(row, column);
                if self.board.is_empty(location, shape) == Ok(true) {
                    return Some(location);
                }
            }
        }
        None
    }

    /// Highest-scoring empty placement among all in-bounds candidates. A
    /// strictly greater score replaces the incumbent, so ties keep the
    /// first-seen location in scan order.
    fn best_fit(&self, shape: Shape) -> Option<Location> {
        let mut best: Option<(f64, Location)> = None;
        for row in 0..=self.board.height() - shape.height() {
            for column in 0..=self.board.width() - shape.width() {
                let location = Location::new(row, column);
                if self.board.is_empty(location, shape) != Ok(true) {
                    continue;
                }
                let score = score_placement(&self.board, location, shape, &self.weights);
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, location));
                }
            }
        }
        best.map(|(_, location)| location)
    }

    /// Places the shape, then clears every row and column that is full
    /// afterwards. Both full-line sets are computed once, before any
    /// clearing, so a clear cannot unfill a line the placement completed.
    pub fn place_block(
        &mut self,
        location: Location,
        shape: Shape,
    ) -> Result<LinesCleared, BoardError> {
        self.board.put(location, shape)?;
        let full_columns = self.board.full_columns();
        let full_rows = self.board.full_rows();
        self.board.clear_rows(&full_rows);
        self.board.clear_columns(&full_columns);
        Ok(LinesCleared {
            rows: full_rows.len(),
            columns: full_columns.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    fn shape(width: usize, height: usize) -> Shape {
        Shape::new(width, height).unwrap()
    }

    fn loc(row: usize, column: usize) -> Location {
        Location::new(row, column)
    }

    mod strategy {
        use super::*;

        #[test]
        fn parses_known_names() {
            assert_eq!(Strategy::from_str("simple").unwrap(), Strategy::Simple);
            assert_eq!(Strategy::from_str("expert").unwrap(), Strategy::Expert);
        }

        #[test]
        fn rejects_unknown_names() {
            assert!(Strategy::from_str("genius").is_err());
            assert!(Strategy::from_str("").is_err());
        }
    }

    mod legality {
        use super::*;

        #[test]
        fn shape_within_board_is_legal() {
            let player = Player::new(shape(4, 3), Strategy::Simple);
            assert!(player.is_legal(shape(4, 3)));
            assert!(player.is_legal(Shape::UNIT));
            assert!(!player.is_legal(shape(5, 1)));
            assert!(!player.is_legal(shape(1, 4)));
        }

        #[test]
        fn play_rejects_oversized_shape() {
            let player = Player::new(shape(3, 3), Strategy::Expert);
            let err = player.play(shape(4, 1)).unwrap_err();
            assert_eq!(
                err,
                IllegalShapeError {
                    shape: shape(4, 1),
                    board: shape(3, 3),
                },
            );
        }
    }

    mod simple_strategy {
        use super::*;

        #[test]
        fn picks_first_raster_fit() {
            let mut player = Player::new(shape(3, 3), Strategy::Simple);
            assert_eq!(player.play(shape(2, 1)).unwrap(), Some(loc(0, 0)));

            player.place_block(loc(0, 0), shape(2, 1)).unwrap();
            // (0, 1) overlaps, (0, 2) would run out of bounds; next fit is
            // the start of row 1.
            assert_eq!(player.play(shape(2, 1)).unwrap(), Some(loc(1, 0)));
        }

        #[test]
        fn prefers_lower_rows_over_lower_columns() {
            let mut player = Player::new(shape(3, 3), Strategy::Simple);
            player.place_block(loc(0, 0), Shape::UNIT).unwrap();
            assert_eq!(player.play(Shape::UNIT).unwrap(), Some(loc(0, 1)));
        }

        #[test]
        fn returns_none_when_nothing_fits() {
            // Diagonal fill leaves no two horizontally adjacent empty cells.
            let mut player = Player::new(shape(2, 2), Strategy::Simple);
            player.place_block(loc(0, 0), Shape::UNIT).unwrap();
            player.place_block(loc(1, 1), Shape::UNIT).unwrap();
            assert_eq!(player.play(shape(2, 1)).unwrap(), None);
        }
    }

    mod expert_strategy {
        use super::*;

        #[test]
        fn unit_piece_on_empty_board_lands_on_the_border() {
            // Only border-adjacent candidates earn a nonzero edge term, so
            // the winner must touch a wall; the first-seen corner wins the
            // tie among corners.
            let player = Player::new(shape(5, 5), Strategy::Expert);
            let location = player.play(Shape::UNIT).unwrap().unwrap();
            assert_eq!(location, loc(0, 0));
        }

        #[test]
        fn prefers_completing_a_line() {
            let mut player = Player::new(shape(4, 4), Strategy::Expert);
            player.place_block(loc(0, 0), shape(3, 1)).unwrap();

            let location = player.play(Shape::UNIT).unwrap().unwrap();
            assert_eq!(location, loc(0, 3), "should finish row 0");
        }

        #[test]
        fn never_returns_an_occupied_location() {
            // Clearing keeps freeing cells, so bound the walk instead of
            // playing to saturation.
            let mut player = Player::new(shape(3, 3), Strategy::Expert);
            for _ in 0..20 {
                let Some(location) = player.play(Shape::UNIT).unwrap() else {
                    break;
                };
                assert_eq!(player.board().is_empty(location, Shape::UNIT), Ok(true));
                player.place_block(location, Shape::UNIT).unwrap();
            }
        }

        #[test]
        fn returns_none_when_no_candidate_is_empty() {
            let mut player = Player::new(shape(2, 2), Strategy::Expert);
            player.place_block(loc(0, 0), Shape::UNIT).unwrap();
            player.place_block(loc(1, 1), Shape::UNIT).unwrap();
            assert_eq!(player.play(shape(2, 1)).unwrap(), None);
        }
    }

    mod place_block {
        use super::*;

        #[test]
        fn clears_a_completed_row_and_updates_columns() {
            // 4x4 board, full-width piece on row 0: the row clears itself
            // and every column counter drops back by one.
            let mut player = Player::new(shape(4, 4), Strategy::Simple);
            let cleared = player.place_block(loc(0, 0), shape(4, 1)).unwrap();

            assert_eq!(cleared, LinesCleared { rows: 1, columns: 0 });
            assert_eq!(player.board().row_counters(), &[0, 0, 0, 0]);
            assert_eq!(player.board().column_counters(), &[0, 0, 0, 0]);
        }

        #[test]
        fn clears_rows_and_columns_completed_together() {
            // Fill all but the last cell of row 2 and column 2 on a 3x3
            // board, then place the corner piece completing both.
            let mut player = Player::new(shape(3, 3), Strategy::Simple);
            player.place_block(loc(2, 0), shape(2, 1)).unwrap();
            player.place_block(loc(0, 2), shape(1, 2)).unwrap();

            let cleared = player.place_block(loc(2, 2), Shape::UNIT).unwrap();
            assert_eq!(cleared, LinesCleared { rows: 1, columns: 1 });
            assert_eq!(
                player.board().is_empty(loc(0, 0), shape(3, 3)),
                Ok(true),
                "both completed lines should be gone",
            );
        }

        #[test]
        fn propagates_put_failures_unchanged() {
            let mut player = Player::new(shape(3, 3), Strategy::Simple);
            player.place_block(loc(0, 0), Shape::UNIT).unwrap();

            let err = player.place_block(loc(0, 0), Shape::UNIT).unwrap_err();
            assert_eq!(
                err,
                BoardError::NotEmpty {
                    location: loc(0, 0),
                    shape: Shape::UNIT,
                },
            );

            let err = player.place_block(loc(0, 2), shape(2, 1)).unwrap_err();
            assert_eq!(
                err,
                BoardError::OutOfBounds {
                    location: loc(0, 2),
                    shape: shape(2, 1),
                },
            );
        }
    }
}
