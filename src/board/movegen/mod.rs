//! Per-piece move generation.
//!
//! Generators only check geometry and occupancy. Whether a move leaves the
//! mover's own king attacked is decided later, when the move is played
//! through `Player::make_move`.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::{Alliance, Board, Move, Piece, PieceKind, Square};

impl Piece {
    /// Every move this piece can make on `board`, before king-safety checks.
    ///
    /// Castling is not included; it is added per alliance during the board
    /// build.
    #[must_use]
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind() {
            PieceKind::Pawn => board.generate_pawn_moves(self),
            PieceKind::Knight => board.generate_knight_moves(self),
            PieceKind::Bishop => board.generate_slider_moves(self, SliderType::Bishop),
            PieceKind::Rook => board.generate_slider_moves(self, SliderType::Rook),
            PieceKind::Queen => board.generate_slider_moves(self, SliderType::Queen),
            PieceKind::King => board.generate_king_moves(self),
        }
    }
}

impl Board {
    /// Concatenated per-piece moves for one alliance.
    pub(crate) fn calculate_legal_moves(&self, alliance: Alliance) -> Vec<Move> {
        self.active_pieces(alliance)
            .iter()
            .flat_map(|piece| piece.calculate_legal_moves(self))
            .collect()
    }

    /// Quiet move onto an empty square, capture of an opposing piece, or
    /// nothing when the square holds a piece of the mover's own alliance.
    fn create_step_move(&self, piece: &Piece, destination: Square) -> Option<Move> {
        match self.piece_at(destination) {
            None => Some(Move::quiet(*piece, destination)),
            Some(occupant) if occupant.alliance() != piece.alliance() => {
                Some(Move::capture(*piece, destination, occupant))
            }
            Some(_) => None,
        }
    }
}
