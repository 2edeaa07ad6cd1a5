//! Path clearance for sliding pieces.

use crate::Board;
use board_core::Square;

/// Iterates over the squares strictly between `from` and `to`.
///
/// Yields nothing unless both squares are on the board and share a rank, a
/// file, or a diagonal.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (d_rank, d_file) = if from.is_on_board() && to.is_on_board() {
        (to.rank() - from.rank(), to.file() - from.file())
    } else {
        (0, 0)
    };
    let aligned = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
    let steps = if aligned {
        d_rank.abs().max(d_file.abs()) - 1
    } else {
        0
    };
    let (step_rank, step_file) = (d_rank.signum(), d_file.signum());
    (1..=steps.max(0)).map(move |i| from.offset(step_rank * i, step_file * i))
}

/// Returns true if no piece stands strictly between `from` and `to`.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| board.piece_at(sq).is_none())
}
