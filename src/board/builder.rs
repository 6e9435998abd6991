//! Staging area for constructing boards.
//!
//! A `Board` is never mutated; every position, including the one after a
//! move, is assembled here and frozen by `build`.
//!
//! # Example
//! ```
//! use chess_rules::board::{Alliance, Builder, Piece, PieceKind, Square};
//!
//! let board = Builder::new()
//!     .set_piece(Piece::new(PieceKind::King, Alliance::White, Square::from_index(60)))
//!     .set_piece(Piece::new(PieceKind::King, Alliance::Black, Square::from_index(4)))
//!     .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, Square::from_index(52)))
//!     .set_move_maker(Alliance::White)
//!     .build();
//! assert_eq!(board.white_pieces().len(), 2);
//! ```

use std::collections::HashMap;

use super::{Alliance, Board, BoardError, Piece, PieceKind, Square};

/// Mutable staging for a `Board`: pieces by coordinate, the side to move
/// and the pawn (if any) that may be captured en passant.
#[derive(Clone, Debug)]
pub struct Builder {
    pub(crate) board_config: HashMap<Square, Piece>,
    pub(crate) move_maker: Alliance,
    pub(crate) en_passant_pawn: Option<Piece>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Create an empty builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        Builder {
            board_config: HashMap::new(),
            move_maker: Alliance::White,
            en_passant_pawn: None,
        }
    }

    /// Create a builder holding the standard opening position, White to move.
    #[must_use]
    pub fn standard() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Self::new();
        for (column, &kind) in back_rank.iter().enumerate() {
            builder = builder
                .set_piece(Piece::new(kind, Alliance::Black, Square::from_index(column)))
                .set_piece(Piece::new(
                    PieceKind::Pawn,
                    Alliance::Black,
                    Square::from_index(8 + column),
                ))
                .set_piece(Piece::new(
                    PieceKind::Pawn,
                    Alliance::White,
                    Square::from_index(48 + column),
                ))
                .set_piece(Piece::new(kind, Alliance::White, Square::from_index(56 + column)));
        }
        builder.set_move_maker(Alliance::White)
    }

    /// Place a piece at its own position. The last piece set on a square wins.
    #[must_use]
    pub fn set_piece(mut self, piece: Piece) -> Self {
        self.board_config.insert(piece.position(), piece);
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board_config.remove(&square);
        self
    }

    /// Set the alliance that moves next.
    #[must_use]
    pub fn set_move_maker(mut self, alliance: Alliance) -> Self {
        self.move_maker = alliance;
        self
    }

    /// Mark a pawn as having just jumped two squares.
    #[must_use]
    pub fn set_en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Freeze the staged position into a `Board`.
    ///
    /// Fails if either alliance does not have exactly one king.
    pub fn try_build(self) -> Result<Board, BoardError> {
        Board::assemble(self)
    }

    /// Freeze the staged position into a `Board`.
    ///
    /// # Panics
    /// Panics if either alliance does not have exactly one king; such a board
    /// cannot be played on.
    #[must_use]
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(err) => panic!("Invalid board configuration: {err}"),
        }
    }
}
