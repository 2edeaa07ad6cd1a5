//! Turn tracking on top of the stateless rules.
//!
//! [`Game`] holds the board and the side to move for a caller that wants the
//! usual "validate, apply, switch sides" loop without writing it itself.

use crate::rules::{BasicRules, IllegalMove, RuleSet};
use crate::Board;
use board_core::{Color, Move, MoveParseError, Piece, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal for the side to move.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    /// The move text could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(#[from] MoveParseError),
}

/// A board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game at the starting position with White to move.
    pub fn new() -> Self {
        Game {
            board: BasicRules.initial_board(),
            side_to_move: Color::White,
        }
    }

    /// Creates a game from any board and side to move.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the legal moves of the piece on `from` for the side to move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        BasicRules.legal_moves_from(&self.board, self.side_to_move, from)
    }

    /// Plays a move for the side to move.
    ///
    /// On success the board is updated, the turn passes to the other side, and
    /// the captured piece (if any) is returned. On failure nothing changes.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>, GameError> {
        let mover = self.side_to_move;
        let next = match BasicRules.try_move(&self.board, mover, from, to) {
            Ok(next) => next,
            Err(reason) => {
                tracing::debug!(%mover, %from, %to, %reason, "move rejected");
                return Err(reason.into());
            }
        };

        let captured = self.board.piece_at(to);
        tracing::debug!(%mover, %from, %to, ?captured, "move played");
        self.board = next;
        self.side_to_move = mover.opposite();
        Ok(captured)
    }

    /// Plays a move given in coordinate notation (e.g. `"e2e4"`).
    pub fn play_notation(&mut self, notation: &str) -> Result<Option<Piece>, GameError> {
        let m = Move::from_coordinate(notation)?;
        self.play(m.from(), m.to())
    }
}
