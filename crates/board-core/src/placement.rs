//! Piece-placement notation.
//!
//! This is the first field of FEN: eight `/`-separated segments, one per rank,
//! read from the top of the board (rank 0) downward. Uppercase letters are
//! White pieces, lowercase are Black, and a digit skips that many empty
//! squares.

use crate::Piece;
use thiserror::Error;

/// The 64 board slots, indexed `rank * 8 + file`.
pub type Slots = [Option<Piece>; 64];

/// The starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur when parsing placement notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidChar { ch: char, rank: usize },

    #[error("rank {rank} describes {width} squares, expected 8")]
    RankWidth { rank: usize, width: usize },
}

/// Parses placement notation into board slots.
pub fn parse_placement(placement: &str) -> Result<Slots, PlacementError> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::RankCount(ranks.len()));
    }

    let mut slots: Slots = [None; 64];
    for (rank, segment) in ranks.iter().enumerate() {
        let mut width = 0usize;
        for ch in segment.chars() {
            if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                width += skip as usize;
            } else if let Some(piece) = Piece::from_char(ch) {
                if width < 8 {
                    slots[rank * 8 + width] = Some(piece);
                }
                width += 1;
            } else {
                return Err(PlacementError::InvalidChar { ch, rank });
            }
        }
        if width != 8 {
            return Err(PlacementError::RankWidth { rank, width });
        }
    }

    Ok(slots)
}

/// Writes board slots as placement notation.
pub fn write_placement(slots: &Slots) -> String {
    let mut out = String::with_capacity(64 + 7);
    for (rank, row) in slots.chunks(8).enumerate() {
        if rank > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for slot in row {
            match slot {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out
}
