//! Move legality rules over an 8x8 board.
//!
//! This crate provides:
//! - [`Board`] - 64 slots of optional pieces, rank 0 at the top
//! - [`RuleSet`] - the legality seam, implemented by [`BasicRules`]
//! - [`is_legal_move`], [`apply_move`], and [`try_move`] shortcuts
//! - [`Game`] - a board plus the side to move
//!
//! The rules hold no state. A caller passes a board and the color to move,
//! gets a verdict, and applies the move to obtain the next board.
//!
//! # Example
//!
//! ```
//! use board_core::{Color, Square};
//! use rules_engine::{apply_move, is_legal_move, Board, IllegalMove};
//!
//! let board = Board::initial();
//! let (e2, e4) = (Square::new(6, 4), Square::new(4, 4));
//! assert_eq!(is_legal_move(&board, Color::White, e2, e4), Ok(()));
//! let next = apply_move(&board, e2, e4);
//! assert!(next.is_vacant(e2));
//!
//! // Rook hemmed in by its own pawn.
//! let (a1, a3) = (Square::new(7, 0), Square::new(5, 0));
//! assert_eq!(
//!     is_legal_move(&board, Color::White, a1, a3),
//!     Err(IllegalMove::IllegalPieceMove)
//! );
//! ```

mod board;
mod game;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError};
pub use rules::{BasicRules, IllegalMove, MoveResult, RuleSet};

use board_core::{Color, Square};

/// Decides whether `mover` may move the piece on `from` to `to` under
/// [`BasicRules`].
pub fn is_legal_move(board: &Board, mover: Color, from: Square, to: Square) -> MoveResult {
    BasicRules.is_legal_move(board, mover, from, to)
}

/// Moves the piece on `from` to `to` without validation.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    BasicRules.apply_move(board, from, to)
}

/// Validates and applies a move under [`BasicRules`].
pub fn try_move(board: &Board, mover: Color, from: Square, to: Square) -> Result<Board, IllegalMove> {
    BasicRules.try_move(board, mover, from, to)
}
