//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) const NUM_TILES: usize = 64;
pub(crate) const NUM_TILES_PER_ROW: usize = 8;

/// A board coordinate, 0..63 in row-major order.
///
/// Row 0 is rank 8 (Black's back rank, a8 = 0) and row 7 is rank 1
/// (White's back rank, h1 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square, returning `None` when the index is off the board
    #[must_use]
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < NUM_TILES {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Create a square from an index that is known to be on the board.
    ///
    /// # Panics
    /// Panics if `idx >= 64`; an out-of-range coordinate is a caller bug.
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        assert!(idx < NUM_TILES, "square index out of range");
        Square(idx as u8)
    }

    /// Create a square from (row, column), both 0-7
    #[must_use]
    pub const fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Square(row * 8 + column))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row 0-7, counted from Black's back rank
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Column 0-7 (0 = file a)
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Chess rank 1-8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }

    /// Apply a raw index offset. Only checks that the result stays on the
    /// board; column wraparound is the caller's job (see `tables`).
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < NUM_TILES as i16 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// True for light squares (a8, h1, ...), the colouring renderers use.
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row() + self.column()) % 2 == 0
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.column() + b'a') as char, self.rank())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::new(idx).ok_or(SquareError::IndexOutOfBounds { index: idx })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let column = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => b'8' - bytes[1],
            _ => return Err(invalid()),
        };

        Square::from_row_column(row, column).ok_or_else(invalid)
    }
}
