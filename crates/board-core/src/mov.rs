//! Move representation.

use crate::Square;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing coordinate notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move: expected 4 characters like \"e2e4\", got {0}")]
    InvalidLength(usize),

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

/// A proposed move: a source square and a destination square.
///
/// A move carries no validity of its own; legality is decided against a board
/// and a color to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Rank distance travelled (`to.rank - from.rank`).
    #[inline]
    pub const fn rank_diff(self) -> i8 {
        self.to.rank() - self.from.rank()
    }

    /// File distance travelled (`to.file - from.file`).
    #[inline]
    pub const fn file_diff(self) -> i8 {
        self.to.file() - self.from.file()
    }

    /// Returns the coordinate notation (e.g. `"e2e4"`), or `None` if either
    /// square is off the board.
    pub fn to_coordinate(self) -> Option<String> {
        Some(format!("{}{}", self.from.to_algebraic()?, self.to.to_algebraic()?))
    }

    /// Parses a move from coordinate notation (e.g. `"e2e4"`).
    pub fn from_coordinate(s: &str) -> Result<Self, MoveParseError> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength(s.chars().count()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[0..2].to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[2..4].to_string()))?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
