use super::super::tables::{bishop_excluded, king_excluded, rook_excluded};
use super::super::{Board, Move, Piece, Square};

/// The three sliding piece families and the directions they walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const BISHOP_VECTORS: [i8; 4] = [-9, -7, 7, 9];
    const ROOK_VECTORS: [i8; 4] = [-8, -1, 1, 8];
    const QUEEN_VECTORS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

    fn vectors(self) -> &'static [i8] {
        match self {
            SliderType::Bishop => &Self::BISHOP_VECTORS,
            SliderType::Rook => &Self::ROOK_VECTORS,
            SliderType::Queen => &Self::QUEEN_VECTORS,
        }
    }

    fn is_excluded(self, position: Square, offset: i8) -> bool {
        match self {
            SliderType::Bishop => bishop_excluded(position, offset),
            SliderType::Rook => rook_excluded(position, offset),
            SliderType::Queen => king_excluded(position, offset),
        }
    }
}

impl Board {
    /// Walk each direction until the edge or the first occupied square.
    ///
    /// The edge check is repeated before every step, since a diagonal walk
    /// reaches a border column mid-ray.
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, slider: SliderType) -> Vec<Move> {
        let mut moves = Vec::new();
        for &offset in slider.vectors() {
            let mut current = piece.position();
            loop {
                if slider.is_excluded(current, offset) {
                    break;
                }
                let Some(next) = current.offset(offset) else {
                    break;
                };
                match self.piece_at(next) {
                    None => {
                        moves.push(Move::quiet(*piece, next));
                        current = next;
                    }
                    Some(occupant) => {
                        if occupant.alliance() != piece.alliance() {
                            moves.push(Move::capture(*piece, next, occupant));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
