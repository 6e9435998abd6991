//! Piece kinds and piece values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::alliance::Alliance;
use super::moves::Move;
use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece types in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion piece choices in order of preference (queen first)
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Parse a piece kind from a letter (p, n, b, r, q, k; either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn)
    }
}

/// A piece standing on a particular square.
///
/// Pieces are plain values: moving one produces a new `Piece` with the new
/// position and `first_move` cleared. Two pieces are equal iff kind,
/// alliance, position and first-move flag all match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Square,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet
    #[must_use]
    pub const fn new(kind: PieceKind, alliance: Alliance, position: Square) -> Self {
        Piece {
            kind,
            alliance,
            position,
            first_move: true,
        }
    }

    #[must_use]
    pub const fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        position: Square,
        first_move: bool,
    ) -> Self {
        Piece {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// The copy of this piece that stands on the move's destination.
    ///
    /// Promotions yield the promoted kind; the result has always moved.
    #[must_use]
    pub fn move_piece(&self, mv: &Move) -> Piece {
        let kind = mv.promotion().unwrap_or(self.kind);
        Piece::with_first_move(kind, self.alliance, mv.destination(), false)
    }

    /// Letter used by the board dump (uppercase for White)
    #[must_use]
    pub fn to_diagram_char(&self) -> char {
        let c = self.kind.to_char();
        if self.alliance.is_white() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.to_diagram_char(), self.position)
    }
}
