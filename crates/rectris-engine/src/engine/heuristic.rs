use crate::{
    core::{
        board::Board,
        geometry::{Location, Shape},
    },
    engine::weights::ScoreWeights,
};

/// Scores a candidate placement for the expert strategy.
///
/// The caller guarantees the rectangle lies fully inside the board and is
/// currently empty.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn score_placement(
    board: &Board,
    location: Location,
    shape: Shape,
    weights: &ScoreWeights,
) -> f64 {
    let Location { row, column } = location;
    // First row and column beyond the rectangle.
    let top = row + shape.height();
    let right = column + shape.width();
    let board_w = board.width();
    let board_h = board.height();

    let mut score = 0.0;

    // Edge support: each unit cell along the four sides contributes the
    // border weight when that side lies on the board boundary, or the
    // adjacency weight when the cell one step beyond it is filled.
    for i in 0..shape.width() {
        if row == 0 {
            score += weights.border;
        } else if board.filled(row - 1, column + i) {
            score += weights.adjacent;
        }
        if top == board_h {
            score += weights.border;
        } else if board.filled(top, column + i) {
            score += weights.adjacent;
        }
    }
    for i in 0..shape.height() {
        if column == 0 {
            score += weights.border;
        } else if board.filled(row + i, column - 1) {
            score += weights.adjacent;
        }
        if right == board_w {
            score += weights.border;
        } else if board.filled(row + i, right) {
            score += weights.adjacent;
        }
    }

    // A placement with no support on any edge never competes with a
    // supported one; the remaining terms are skipped entirely.
    if score == 0.0 {
        return 0.0;
    }

    // Diagonal pockets: subtract for each corner sitting on the boundary or
    // touching a filled diagonal neighbour.
    if row == 0 || column == 0 {
        score -= weights.diagonal;
    } else if board.filled(row - 1, column - 1) {
        score -= weights.diagonal;
    }
    if row == 0 || right == board_w {
        score -= weights.diagonal;
    } else if board.filled(row - 1, right) {
        score -= weights.diagonal;
    }
    if top == board_h || right == board_w {
        score -= weights.diagonal;
    } else if board.filled(top, right) {
        score -= weights.diagonal;
    }
    if top == board_h || column == 0 {
        score -= weights.diagonal;
    } else if board.filled(top, column - 1) {
        score -= weights.diagonal;
    }

    // Line completion: a spanned row whose counter equals width minus piece
    // width becomes full once the piece lands; reward it by its counter and
    // weigh the impact on the neighbouring lines. The neighbour window above
    // is bounded by the span length measured from index 0; the tuned weights
    // assume this exact rule.
    let row_counters = board.row_counters();
    for i in 0..shape.height() {
        let r = row + i;
        if row_counters[r] == board_w - shape.width() {
            score += row_counters[r] as f64 * weights.complete;
            if r > 0 {
                score += row_counters[r - 1] as f64 * weights.neighbor_complete;
            }
            if r < shape.height() - 1 {
                score += row_counters[r + 1] as f64 * weights.neighbor_complete;
            }
        } else {
            score += row_counters[r] as f64 * weights.near_complete;
        }
    }
    let column_counters = board.column_counters();
    for i in 0..shape.width() {
        let c = column + i;
        if column_counters[c] == board_h - shape.height() {
            score += column_counters[c] as f64 * weights.complete;
            if c > 0 {
                score += column_counters[c - 1] as f64 * weights.neighbor_complete;
            }
            if c < shape.width() - 1 {
                score += column_counters[c + 1] as f64 * weights.neighbor_complete;
            }
        } else {
            score += column_counters[c] as f64 * weights.near_complete;
        }
    }

    score
}
