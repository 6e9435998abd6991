//! Alliance (side of the board) type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// The two sides of the board.
///
/// Index 0 of the board is Black's back rank, so White pawns advance towards
/// lower indices and Black pawns towards higher ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Both alliances in index order (White=0, Black=1)
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    /// Returns the opposite alliance
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Sign applied to pawn offsets (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    /// Pick this alliance's entry out of a (white, black) pair.
    #[inline]
    pub fn choose<T>(self, white: T, black: T) -> T {
        match self {
            Alliance::White => white,
            Alliance::Black => black,
        }
    }

    /// Row holding this alliance's pawns before they move (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Alliance::White => 6,
            Alliance::Black => 1,
        }
    }

    /// Row on which this alliance's pawns promote (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Alliance::White => 0,
            Alliance::Black => 7,
        }
    }

    /// Starting square of this alliance's king (e1 / e8)
    #[inline]
    #[must_use]
    pub const fn king_home(self) -> Square {
        match self {
            Alliance::White => Square::from_index(60),
            Alliance::Black => Square::from_index(4),
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_points_away_from_home() {
        assert_eq!(Alliance::White.direction(), -1);
        assert_eq!(Alliance::Black.direction(), 1);
    }

    #[test]
    fn test_choose_selects_own_entry() {
        assert_eq!(Alliance::White.choose("w", "b"), "w");
        assert_eq!(Alliance::Black.choose("w", "b"), "b");
    }

    #[test]
    fn test_opposite_is_involution() {
        for alliance in Alliance::BOTH {
            assert_ne!(alliance, alliance.opposite());
            assert_eq!(alliance, alliance.opposite().opposite());
        }
    }

    #[test]
    fn test_home_squares() {
        assert_eq!(Alliance::White.king_home().to_string(), "e1");
        assert_eq!(Alliance::Black.king_home().to_string(), "e8");
    }
}
