//! Board representation.

use board_core::{
    parse_placement, write_placement, Color, Piece, PieceKind, PlacementError, Slots, Square,
};
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board is one array of 64 slots addressed by `rank * 8 + file`. It is a
/// small `Copy` value: the rules read it and return new boards rather than
/// mutating the caller's copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    slots: Slots,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board { slots: [None; 64] }
    }

    /// Creates the starting position: Black on ranks 0-1, White on ranks 6-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank();
            let pawns = color.home_rank();
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as i8;
                board.set(Square::new(back, file), Some(Piece::new(*kind, color)));
                board.set(
                    Square::new(pawns, file),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Creates a board from placement notation.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            slots: parse_placement(placement)?,
        })
    }

    /// Converts the board to placement notation.
    pub fn to_placement(&self) -> String {
        write_placement(&self.slots)
    }

    /// Returns the piece on the given square, if any.
    ///
    /// Off-board squares are always empty.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.slots[i])
    }

    /// Returns true if the square is on the board and holds no piece.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        sq.is_on_board() && self.piece_at(sq).is_none()
    }

    /// Puts a piece on (or clears) a square. Off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, sq: Square, slot: Option<Piece>) {
        if let Some(i) = sq.index() {
            self.slots[i] = slot;
        }
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.slots[i].take())
    }

    /// Iterates over occupied squares and their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// Prints a text diagram, top rank first, with `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.slots.chunks(8).enumerate() {
            write!(f, "{}", 8 - rank)?;
            for slot in row {
                let c = slot.map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
