//! Playing a move: the single state transition between boards.

use log::trace;

use super::{Board, Builder, Move, MoveKind, Piece, PieceKind};

impl Move {
    /// The board that results from playing this move on `board`.
    ///
    /// `board` is only read. The mover's pieces are copied except the moved
    /// piece (and the castling rook), the opponent's pieces are copied except
    /// the captured one, and the moved piece's post-move copy is inserted.
    /// The new board has the opponent to move.
    ///
    /// No king-safety check happens here; see `Player::make_move`.
    ///
    /// # Panics
    /// Panics if the move captures a king. That is only generated when the
    /// side not to move was left in check.
    #[must_use]
    pub fn execute(&self, board: &Board) -> Board {
        let mover = self.moved_piece();
        let castle_rook = self.castle_rook();
        let captured = self.attacked_piece();

        let mut builder = Builder::new();
        for piece in board.active_pieces(mover.alliance()) {
            let is_castle_rook = castle_rook.is_some_and(|c| c.rook == *piece);
            if *piece != mover && !is_castle_rook {
                builder = builder.set_piece(*piece);
            }
        }
        for piece in board.active_pieces(mover.alliance().opposite()) {
            if Some(*piece) != captured {
                builder = builder.set_piece(*piece);
            }
        }

        let moved = mover.move_piece(self);
        builder = builder.set_piece(moved);

        match self.kind() {
            MoveKind::KingSideCastle(castle) | MoveKind::QueenSideCastle(castle) => {
                builder = builder.set_piece(Piece::with_first_move(
                    PieceKind::Rook,
                    castle.rook.alliance(),
                    castle.destination,
                    false,
                ));
            }
            MoveKind::PawnJump => builder = builder.set_en_passant_pawn(moved),
            _ => {}
        }

        trace!("executing {self} for {}", mover.alliance());
        builder
            .set_move_maker(mover.alliance().opposite())
            .build()
    }
}
