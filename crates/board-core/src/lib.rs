//! Value types for the board rules engine.
//!
//! This crate provides the plain data the rules operate on:
//! - [`Color`] for the two sides
//! - [`PieceKind`] and [`Piece`] for piece values
//! - [`Square`] for (rank, file) coordinates, rank 0 at the top
//! - [`Move`] for a from/to pair and its coordinate notation
//! - Piece-placement notation for writing boards as text

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use placement::{parse_placement, write_placement, PlacementError, Slots, STARTING_PLACEMENT};
pub use square::Square;
