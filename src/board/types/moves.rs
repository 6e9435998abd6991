//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// The rook half of a castle: the rook value before the move, where it
/// starts and where it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRook {
    pub rook: Piece,
    pub start: Square,
    pub destination: Square,
}

/// What kind of ply a `Move` is, with the payload each kind needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Move to an empty square
    Quiet,
    /// Capture of the piece standing on the destination
    Capture { captured: Piece },
    /// Pawn double push from its starting row
    PawnJump,
    /// Pawn capture of a pawn that just jumped past it
    EnPassant { captured: Piece },
    /// Pawn arriving on the far row, optionally capturing
    Promotion {
        promote_to: PieceKind,
        captured: Option<Piece>,
    },
    KingSideCastle(CastleRook),
    QueenSideCastle(CastleRook),
}

/// One ply: which piece moves, where to, and what kind of move it is.
///
/// Equality is structural, so a capture and a quiet move of the same piece
/// to the same square are different moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    moved_piece: Piece,
    destination: Square,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(moved_piece: Piece, destination: Square, kind: MoveKind) -> Self {
        Move {
            moved_piece,
            destination,
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub const fn quiet(moved_piece: Piece, destination: Square) -> Self {
        Move::new(moved_piece, destination, MoveKind::Quiet)
    }

    #[inline]
    #[must_use]
    pub const fn capture(moved_piece: Piece, destination: Square, captured: Piece) -> Self {
        Move::new(moved_piece, destination, MoveKind::Capture { captured })
    }

    #[inline]
    #[must_use]
    pub const fn pawn_jump(moved_piece: Piece, destination: Square) -> Self {
        Move::new(moved_piece, destination, MoveKind::PawnJump)
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(moved_piece: Piece, destination: Square, captured: Piece) -> Self {
        Move::new(moved_piece, destination, MoveKind::EnPassant { captured })
    }

    #[inline]
    #[must_use]
    pub const fn promotion_to(
        moved_piece: Piece,
        destination: Square,
        promote_to: PieceKind,
        captured: Option<Piece>,
    ) -> Self {
        Move::new(
            moved_piece,
            destination,
            MoveKind::Promotion {
                promote_to,
                captured,
            },
        )
    }

    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Square the moved piece starts from
    #[inline]
    #[must_use]
    pub const fn current_coordinate(&self) -> Square {
        self.moved_piece.position()
    }

    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Square {
        self.destination
    }

    /// The piece removed from the board by this move, if any
    #[must_use]
    pub const fn attacked_piece(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture { captured } | MoveKind::EnPassant { captured } => Some(captured),
            MoveKind::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling_move(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::KingSideCastle(_) | MoveKind::QueenSideCastle(_)
        )
    }

    #[inline]
    #[must_use]
    pub const fn castle_rook(&self) -> Option<CastleRook> {
        match self.kind {
            MoveKind::KingSideCastle(rook) | MoveKind::QueenSideCastle(rook) => Some(rook),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_jump(&self) -> bool {
        matches!(self.kind, MoveKind::PawnJump)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }

    /// Promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    /// True if this move lands on `square` in a way that would capture a
    /// piece standing there. Pawn pushes never do.
    #[must_use]
    pub(crate) fn attacks_square(&self, square: Square) -> bool {
        if self.destination != square || self.is_castling_move() {
            return false;
        }
        !self.moved_piece.kind().is_pawn()
            || self.current_coordinate().column() != square.column()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({}{}{}",
            self.moved_piece.to_diagram_char(),
            self.current_coordinate(),
            self.destination
        )?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_attack() {
            write!(f, " cap")?;
        }
        if self.is_castling_move() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::KingSideCastle(_) => write!(f, "O-O"),
            MoveKind::QueenSideCastle(_) => write!(f, "O-O-O"),
            _ => {
                write!(f, "{}{}", self.current_coordinate(), self.destination)?;
                if let Some(promo) = self.promotion() {
                    write!(f, "{}", promo.to_char())?;
                }
                Ok(())
            }
        }
    }
}
