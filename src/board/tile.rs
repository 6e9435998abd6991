//! Board cells.

use std::fmt;

use once_cell::sync::Lazy;

use super::{Piece, Square, NUM_TILES};

static EMPTY_TILES: Lazy<[Tile; NUM_TILES]> =
    Lazy::new(|| std::array::from_fn(|idx| Tile::Empty(Square::from_index(idx))));

/// One of the 64 cells of a board: empty, or holding exactly one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty(Square),
    Occupied(Square, Piece),
}

impl Tile {
    /// Occupied tile when a piece is given, otherwise the shared empty tile
    /// for that coordinate.
    #[must_use]
    pub fn create(coordinate: Square, piece: Option<Piece>) -> Tile {
        match piece {
            Some(piece) => Tile::Occupied(coordinate, piece),
            None => EMPTY_TILES[coordinate.index()],
        }
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Square {
        match self {
            Tile::Empty(sq) | Tile::Occupied(sq, _) => *sq,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(*piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => f.pad("-"),
            Tile::Occupied(_, piece) => f.pad(piece.to_diagram_char().encode_utf8(&mut [0; 4])),
        }
    }
}
