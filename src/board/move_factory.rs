//! Looking up a generated move from a coordinate pair.
//!
//! This is how input from a user interface turns into a `Move`: the caller
//! knows two squares and the board, and gets back the matching move if one
//! was generated for either alliance.

use super::{Board, Move, PieceKind, Square};

/// The first move on `board` that goes from `from` to `to`, or `None`.
///
/// Promotions are offered Queen first, so a plain lookup onto the far row
/// picks the Queen promotion. Use [`create_promotion_move`] to pick another
/// piece.
#[must_use]
pub fn create_move(board: &Board, from: Square, to: Square) -> Option<Move> {
    board
        .all_legal_moves()
        .find(|mv| mv.current_coordinate() == from && mv.destination() == to)
        .copied()
}

/// The promotion from `from` to `to` that promotes to `kind`, or `None`.
#[must_use]
pub fn create_promotion_move(
    board: &Board,
    from: Square,
    to: Square,
    kind: PieceKind,
) -> Option<Move> {
    board
        .all_legal_moves()
        .find(|mv| {
            mv.current_coordinate() == from && mv.destination() == to && mv.promotion() == Some(kind)
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Alliance, Builder, Piece};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_finds_generated_move() {
        let board = Board::create_standard_board();
        let mv = create_move(&board, sq("e2"), sq("e4")).unwrap();
        assert!(mv.is_pawn_jump());
        assert_eq!(mv.moved_piece().kind(), PieceKind::Pawn);
    }

    #[test]
    fn test_finds_moves_of_either_alliance() {
        let board = Board::create_standard_board();
        let mv = create_move(&board, sq("g8"), sq("f6")).unwrap();
        assert_eq!(mv.moved_piece().alliance(), Alliance::Black);
    }

    #[test]
    fn test_no_move_for_unreachable_square() {
        let board = Board::create_standard_board();
        assert_eq!(create_move(&board, sq("e2"), sq("e5")), None);
        assert_eq!(create_move(&board, sq("e4"), sq("e5")), None);
    }

    #[test]
    fn test_castle_found_by_king_squares() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("e1")))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, sq("h1")))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("e8")))
            .build();
        let mv = create_move(&board, sq("e1"), sq("g1")).unwrap();
        assert!(mv.is_castling_move());
    }

    #[test]
    fn test_promotion_lookup() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("e1")))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("e8")))
            .set_piece(Piece::with_first_move(PieceKind::Pawn, Alliance::White, sq("c7"), false))
            .build();

        let default = create_move(&board, sq("c7"), sq("c8")).unwrap();
        assert_eq!(default.promotion(), Some(PieceKind::Queen));

        let rook = create_promotion_move(&board, sq("c7"), sq("c8"), PieceKind::Rook).unwrap();
        assert_eq!(rook.promotion(), Some(PieceKind::Rook));
        assert_eq!(
            create_promotion_move(&board, sq("c7"), sq("c8"), PieceKind::King),
            None
        );
    }
}
