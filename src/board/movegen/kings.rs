use super::super::state::calculate_attacks_on_tile;
use super::super::tables::{king_excluded, pawn_excluded, PAWN_ATTACK_OFFSETS};
use super::super::{Alliance, Board, CastleRook, Move, MoveKind, Piece, Square};

const CANDIDATE_MOVE_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

impl Board {
    pub(crate) fn generate_king_moves(&self, king: &Piece) -> Vec<Move> {
        let from = king.position();
        CANDIDATE_MOVE_OFFSETS
            .iter()
            .filter(|&&offset| !king_excluded(from, offset))
            .filter_map(|&offset| from.offset(offset))
            .filter_map(|to| self.create_step_move(king, to))
            .collect()
    }

    /// Castles available to `alliance`.
    ///
    /// The king and the rook must both be unmoved, the king not in check,
    /// every square between them empty, and the squares the king crosses and
    /// lands on free of opponent attacks.
    pub(crate) fn calculate_king_castles(
        &self,
        alliance: Alliance,
        king: Piece,
        in_check: bool,
        opponent_moves: &[Move],
    ) -> Vec<Move> {
        let mut castles = Vec::new();
        let home = alliance.king_home();
        if !king.is_first_move() || in_check || king.position() != home {
            return castles;
        }

        let opponent = alliance.opposite();
        let at = |delta: i8| home.offset(delta);
        let safe = |sq: Square| !self.is_tile_attacked(sq, opponent, opponent_moves);

        if let (Some(f), Some(g), Some(h)) = (at(1), at(2), at(3)) {
            if self.is_empty(f) && self.is_empty(g) {
                if let Some(rook) = self.castle_rook(alliance, h) {
                    if safe(f) && safe(g) {
                        let rook = CastleRook {
                            rook,
                            start: h,
                            destination: f,
                        };
                        castles.push(Move::new(king, g, MoveKind::KingSideCastle(rook)));
                    }
                }
            }
        }

        if let (Some(d), Some(c), Some(b), Some(a)) = (at(-1), at(-2), at(-3), at(-4)) {
            if self.is_empty(d) && self.is_empty(c) && self.is_empty(b) {
                if let Some(rook) = self.castle_rook(alliance, a) {
                    if safe(d) && safe(c) {
                        let rook = CastleRook {
                            rook,
                            start: a,
                            destination: d,
                        };
                        castles.push(Move::new(king, c, MoveKind::QueenSideCastle(rook)));
                    }
                }
            }
        }

        castles
    }

    fn castle_rook(&self, alliance: Alliance, square: Square) -> Option<Piece> {
        self.piece_at(square).filter(|piece| {
            piece.kind().is_rook() && piece.alliance() == alliance && piece.is_first_move()
        })
    }

    /// Whether `attacker` could capture a piece placed on `square`.
    ///
    /// Pawns only generate diagonal moves onto occupied squares, so their
    /// guard of an empty square is checked separately.
    pub(crate) fn is_tile_attacked(
        &self,
        square: Square,
        attacker: Alliance,
        attacker_moves: &[Move],
    ) -> bool {
        calculate_attacks_on_tile(square, attacker_moves) > 0 || self.is_pawn_guarded(square, attacker)
    }

    fn is_pawn_guarded(&self, square: Square, attacker: Alliance) -> bool {
        let direction = attacker.direction();
        self.active_pieces(attacker)
            .iter()
            .filter(|piece| piece.kind().is_pawn())
            .any(|pawn| {
                PAWN_ATTACK_OFFSETS.iter().any(|&offset| {
                    !pawn_excluded(attacker, pawn.position(), offset)
                        && pawn.position().offset(direction * offset) == Some(square)
                })
            })
    }
}
