//! Core chess types.
//!
//! This module contains the value types the rules engine is built from:
//! - `Alliance` - the two sides of the board
//! - `Square` - board coordinate 0..63 (a8 = 0)
//! - `PieceKind` and `Piece` - piece types and immutable piece values
//! - `Move`, `MoveKind` and `CastleRook` - one ply and its payload

mod alliance;
mod moves;
mod piece;
mod square;

pub use alliance::Alliance;
pub use moves::{CastleRook, Move, MoveKind};
pub use piece::{Piece, PieceKind};
pub use square::Square;

pub(crate) use square::{NUM_TILES, NUM_TILES_PER_ROW};
