use rectris_engine::Board;

const FILLED: char = '\u{2b1b}';
const EMPTY: char = '\u{2b1c}';

/// Renders the board one glyph per cell, highest row index first, so the
/// printed picture grows upward as pieces land.
pub(crate) fn board(board: &Board) -> String {
    // The glyphs are 3 bytes each in UTF-8.
    let mut out = String::with_capacity((3 * board.width() + 1) * board.height());
    for row in board.rows().rev() {
        for &cell in row {
            out.push(if cell { FILLED } else { EMPTY });
        }
        out.push('\n');
    }
    out
}
