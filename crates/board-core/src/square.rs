//! Board square representation.

use std::fmt;

/// A (rank, file) coordinate.
///
/// Rank 0 is the top of the board, where Black's back rank starts; rank 7 is
/// White's back rank. File 0 is the left-hand `a` file.
///
/// Coordinates are signed and unchecked so that callers can hand any pair to
/// the rules, which report off-board squares themselves. Use
/// [`is_on_board`](Square::is_on_board) or [`index`](Square::index) to test
/// validity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: i8,
    file: i8,
}

impl Square {
    /// Number of ranks and files.
    pub const SIZE: i8 = 8;

    /// Creates a square from rank and file, without bounds checking.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    /// Creates a square from a board index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square::new((index / 8) as i8, (index % 8) as i8))
        } else {
            None
        }
    }

    /// Parses a square from its algebraic name (e.g. `"e2"`).
    ///
    /// File letters map to file indices `a` = 0 through `h` = 7. Rank digits
    /// count from the bottom, so `'8'` is rank 0 and `'1'` is rank 7.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square::new((b'8' - rank) as i8, (file - b'a') as i8))
    }

    /// Returns the rank.
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns the file.
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Returns true if both coordinates lie in 0..8.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < Self::SIZE && self.file >= 0 && self.file < Self::SIZE
    }

    /// Returns the board index (`rank * 8 + file`), or `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.rank as usize * 8 + self.file as usize)
        } else {
            None
        }
    }

    /// Returns the square shifted by the given rank and file deltas.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Square::new(self.rank.wrapping_add(d_rank), self.file.wrapping_add(d_file))
    }

    /// Returns the algebraic name, or `None` off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'8' - self.rank as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    /// Iterates over all 64 board squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.rank, self.file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.rank, self.file),
        }
    }
}
