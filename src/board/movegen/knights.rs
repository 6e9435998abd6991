use super::super::tables::knight_excluded;
use super::super::{Board, Move, Piece};

const CANDIDATE_MOVE_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> Vec<Move> {
        let from = knight.position();
        CANDIDATE_MOVE_OFFSETS
            .iter()
            .filter(|&&offset| !knight_excluded(from, offset))
            .filter_map(|&offset| from.offset(offset))
            .filter_map(|to| self.create_step_move(knight, to))
            .collect()
    }
}
