use super::super::tables::{is_pawn_start, is_promotion_square, pawn_excluded, PAWN_ATTACK_OFFSETS};
use super::super::{Board, Move, Piece, PieceKind, Square};

const PUSH_OFFSET: i8 = 8;
const JUMP_OFFSET: i8 = 16;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let alliance = pawn.alliance();
        let direction = alliance.direction();
        let from = pawn.position();

        if let Some(to) = from.offset(direction * PUSH_OFFSET) {
            if self.is_empty(to) {
                if is_promotion_square(alliance, to) {
                    push_promotions(&mut moves, pawn, to, None);
                } else {
                    moves.push(Move::quiet(*pawn, to));
                }

                if pawn.is_first_move() && is_pawn_start(alliance, from) {
                    if let Some(jump) = from.offset(direction * JUMP_OFFSET) {
                        if self.is_empty(jump) {
                            moves.push(Move::pawn_jump(*pawn, jump));
                        }
                    }
                }
            }
        }

        for offset in PAWN_ATTACK_OFFSETS {
            if pawn_excluded(alliance, from, offset) {
                continue;
            }
            let Some(to) = from.offset(direction * offset) else {
                continue;
            };
            match self.piece_at(to) {
                Some(victim) if victim.alliance() != alliance => {
                    if is_promotion_square(alliance, to) {
                        push_promotions(&mut moves, pawn, to, Some(victim));
                    } else {
                        moves.push(Move::capture(*pawn, to, victim));
                    }
                }
                Some(_) => {}
                None => moves.extend(self.en_passant_capture(pawn, to)),
            }
        }

        moves
    }

    /// En passant onto the empty square `to`, if the pawn beside the mover
    /// is the one that just jumped.
    fn en_passant_capture(&self, pawn: &Piece, to: Square) -> Option<Move> {
        let jumped = self.en_passant_pawn?;
        if jumped.alliance() == pawn.alliance() {
            return None;
        }
        let behind = to.offset(-pawn.alliance().direction() * PUSH_OFFSET)?;
        (jumped.position() == behind && self.piece_at(behind) == Some(jumped))
            .then(|| Move::en_passant(*pawn, to, jumped))
    }
}

fn push_promotions(moves: &mut Vec<Move>, pawn: &Piece, to: Square, captured: Option<Piece>) {
    moves.extend(
        PieceKind::PROMOTION_CHOICES
            .iter()
            .map(|&kind| Move::promotion_to(*pawn, to, kind, captured)),
    );
}
