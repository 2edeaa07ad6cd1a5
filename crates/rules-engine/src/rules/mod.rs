//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, which separates move legality
//! from whoever holds the board and the turn. Rules are stateless: every call
//! is a pure decision over the board value it is given.

mod basic;
mod path;

pub use basic::BasicRules;
pub use path::{path_is_clear, squares_between};

use crate::Board;
use board_core::{Color, Move, Square};
use thiserror::Error;

/// Why a proposed move was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum IllegalMove {
    /// The source or destination lies outside the 8x8 grid.
    #[error("square is off the board")]
    OutOfBounds,

    /// There is no piece on the source square.
    #[error("no piece on the source square")]
    NoPieceAtSource,

    /// The piece on the source square belongs to the other side.
    #[error("piece belongs to the other side")]
    WrongColorPiece,

    /// The destination holds a piece of the mover's own color.
    #[error("destination holds a piece of the same color")]
    FriendlyFireCapture,

    /// The piece cannot move that way, or its path is blocked.
    #[error("piece cannot move there")]
    IllegalPieceMove,
}

/// Outcome of a legality check: `Ok(())` when the move is legal.
pub type MoveResult = Result<(), IllegalMove>;

/// Trait for move legality rules.
///
/// # Example
///
/// ```
/// use board_core::{Color, Square};
/// use rules_engine::rules::RuleSet;
/// use rules_engine::BasicRules;
///
/// let board = BasicRules.initial_board();
/// let next = BasicRules
///     .try_move(&board, Color::White, Square::new(6, 4), Square::new(4, 4))
///     .unwrap();
/// assert!(next.piece_at(Square::new(4, 4)).is_some());
/// ```
pub trait RuleSet {
    /// Returns the starting board for these rules.
    fn initial_board(&self) -> Board;

    /// Decides whether `mover` may move the piece on `from` to `to`.
    ///
    /// Never mutates the board.
    fn is_legal_move(&self, board: &Board, mover: Color, from: Square, to: Square) -> MoveResult;

    /// Moves the piece on `from` to `to` without validation.
    ///
    /// Any piece on `to` is removed. Only call this after
    /// [`is_legal_move`](RuleSet::is_legal_move) succeeded, or use
    /// [`try_move`](RuleSet::try_move).
    fn apply_move(&self, board: &Board, from: Square, to: Square) -> Board;

    /// Validates a move and, if legal, returns the resulting board.
    fn try_move(
        &self,
        board: &Board,
        mover: Color,
        from: Square,
        to: Square,
    ) -> Result<Board, IllegalMove> {
        self.is_legal_move(board, mover, from, to)?;
        Ok(self.apply_move(board, from, to))
    }

    /// Returns every legal move of the piece on `from`, in board index order.
    ///
    /// Empty when `from` does not hold one of `mover`'s pieces.
    fn legal_moves_from(&self, board: &Board, mover: Color, from: Square) -> Vec<Move> {
        Square::all()
            .filter(|&to| self.is_legal_move(board, mover, from, to).is_ok())
            .map(|to| Move::new(from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(IllegalMove::OutOfBounds.to_string(), "square is off the board");
        assert_eq!(
            IllegalMove::FriendlyFireCapture.to_string(),
            "destination holds a piece of the same color"
        );
    }

    #[test]
    fn try_move_returns_next_board() {
        let board = BasicRules.initial_board();
        let next = BasicRules
            .try_move(&board, Color::White, Square::new(7, 6), Square::new(5, 5))
            .unwrap();
        assert!(next.is_vacant(Square::new(7, 6)));
        assert_eq!(next.piece_at(Square::new(5, 5)), board.piece_at(Square::new(7, 6)));
    }

    #[test]
    fn try_move_leaves_input_untouched_on_failure() {
        let board = BasicRules.initial_board();
        let err = BasicRules
            .try_move(&board, Color::Black, Square::new(6, 4), Square::new(4, 4))
            .unwrap_err();
        assert_eq!(err, IllegalMove::WrongColorPiece);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn legal_moves_from_empty_square() {
        let board = BasicRules.initial_board();
        assert!(BasicRules
            .legal_moves_from(&board, Color::White, Square::new(4, 4))
            .is_empty());
    }
}
