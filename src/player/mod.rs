//! One alliance's view of a board.
//!
//! A `Player` borrows the board it describes. The king, the generated moves
//! and the check flag were computed when the board was built; checkmate and
//! stalemate are derived on demand by trying every generated move through
//! [`Player::make_move`].

mod transition;

pub use transition::{MoveStatus, MoveTransition};

use log::debug;

use crate::board::{calculate_attacks_on_tile, Alliance, Board, Move, Piece};

/// One alliance's side of a borrowed board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    #[must_use]
    pub fn new(board: &'a Board, alliance: Alliance) -> Self {
        Player { board, alliance }
    }

    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// The other alliance's view of the same board.
    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opposite())
    }

    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[must_use]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    #[must_use]
    pub fn king(&self) -> Piece {
        self.board.player_state(self.alliance).king
    }

    /// Generated moves, castles included, before the king-safety check.
    #[must_use]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.board.player_state(self.alliance).legal_moves
    }

    #[must_use]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.player_state(self.alliance).in_check
    }

    #[must_use]
    pub fn is_in_check_mate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_in_stale_mate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Generated moves that `make_move` accepts.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .filter(|mv| self.make_move(mv).status().is_done())
            .copied()
            .collect()
    }

    fn has_escape_moves(&self) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| self.make_move(mv).status().is_done())
    }

    /// Play `mv` for this alliance.
    ///
    /// A move that was not generated for this alliance, or that would take
    /// the opposing king, is `IllegalMove`. Any other move is executed, and
    /// rejected as `LeavesPlayerInCheck` if any of the opponent's moves on
    /// the new board lands on this alliance's king. Rejected transitions
    /// carry the unchanged board.
    #[must_use]
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            debug!("{} rejected {mv}: not a generated move", self.alliance);
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }
        if mv.attacked_piece().is_some_and(|piece| piece.kind().is_king()) {
            debug!("{} rejected {mv}: kings are never captured", self.alliance);
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }

        let candidate = mv.execute(self.board);
        let king = candidate.player(self.alliance).king();
        let attackers = candidate.player(self.alliance.opposite()).legal_moves();
        if calculate_attacks_on_tile(king.position(), attackers) > 0 {
            debug!("{} rejected {mv}: king on {} left attacked", self.alliance, king.position());
            return MoveTransition::rejected(self.board, *mv, MoveStatus::LeavesPlayerInCheck);
        }

        MoveTransition::done(candidate, *mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{move_factory, Builder, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_players() {
        let board = Board::create_standard_board();
        let white = board.current_player();
        assert_eq!(white.alliance(), Alliance::White);
        assert_eq!(white.opponent().alliance(), Alliance::Black);
        assert_eq!(white.king().position(), sq("e1"));
        assert_eq!(white.active_pieces().len(), 16);
        assert_eq!(white.legal_moves().len(), 20);
        assert_eq!(white.valid_moves().len(), 20);
        assert!(!white.is_in_check());
        assert!(!white.is_in_check_mate());
        assert!(!white.is_in_stale_mate());
    }

    #[test]
    fn test_make_move_done() {
        let board = Board::create_standard_board();
        let mv = move_factory::create_move(&board, sq("e2"), sq("e4")).unwrap();
        let transition = board.current_player().make_move(&mv);

        assert_eq!(transition.status(), MoveStatus::Done);
        assert_eq!(transition.mv(), mv);
        assert_eq!(transition.board().current_player().alliance(), Alliance::Black);
        assert_eq!(board.move_maker(), Alliance::White);
    }

    #[test]
    fn test_make_move_rejects_other_alliance_move() {
        let board = Board::create_standard_board();
        let black_move = move_factory::create_move(&board, sq("e7"), sq("e5")).unwrap();
        let transition = board.white_player().make_move(&black_move);

        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert_eq!(transition.board(), &board);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_line() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("e1")))
            .set_piece(Piece::new(PieceKind::Bishop, Alliance::White, sq("e2")))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::Black, sq("e8")))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("a8")))
            .build();
        let player = board.white_player();
        let pinned = move_factory::create_move(&board, sq("e2"), sq("d3")).unwrap();
        let transition = player.make_move(&pinned);

        assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
        assert_eq!(transition.into_board(), board);
        assert!(player
            .valid_moves()
            .iter()
            .all(|mv| mv.moved_piece().kind() == PieceKind::King));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("e1")))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::Black, sq("d8")))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("h8")))
            .build();
        let mut targets: Vec<String> = board
            .white_player()
            .valid_moves()
            .iter()
            .map(|mv| mv.destination().to_string())
            .collect();
        targets.sort();
        assert_eq!(targets, ["e2", "f1", "f2"]);
    }

    #[test]
    fn test_back_rank_mate() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("g8")))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, sq("f7")))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, sq("g7")))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, sq("h7")))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, sq("a8")))
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("g1")))
            .set_move_maker(Alliance::Black)
            .build();
        let black = board.current_player();
        assert!(black.is_in_check());
        assert!(black.is_in_check_mate());
        assert!(!black.is_in_stale_mate());
        assert!(black.valid_moves().is_empty());
    }

    #[test]
    fn test_cornered_king_stalemate() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("h8")))
            .set_piece(Piece::new(PieceKind::Queen, Alliance::White, sq("g6")))
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("f7")))
            .set_move_maker(Alliance::Black)
            .build();
        let black = board.current_player();
        assert!(!black.is_in_check());
        assert!(black.is_in_stale_mate());
        assert!(!black.is_in_check_mate());
    }

    #[test]
    fn test_only_escape_is_capturing_the_checker() {
        let board = Builder::new()
            .set_piece(Piece::new(PieceKind::King, Alliance::White, sq("h1")))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, sq("g2")))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, sq("h2")))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, sq("e8")))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::Black, sq("e1")))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, sq("a6")))
            .build();
        let white = board.current_player();
        assert!(white.is_in_check());
        assert!(!white.is_in_check_mate());

        let valid: Vec<String> = white.valid_moves().iter().map(ToString::to_string).collect();
        assert_eq!(valid, ["e8e1"]);
    }

    #[test]
    fn test_king_capture_is_illegal() {
        let mut board = Board::create_standard_board();
        for (from, to) in [("e2", "e4"), ("d1", "h5"), ("h5", "f7")] {
            let mv = move_factory::create_move(&board, sq(from), sq(to)).unwrap();
            let transition = board.white_player().make_move(&mv);
            assert_eq!(transition.status(), MoveStatus::Done, "{from}{to}");
            board = transition.into_board();
        }

        let capture = move_factory::create_move(&board, sq("f7"), sq("e8")).unwrap();
        assert_eq!(capture.attacked_piece().map(|p| p.kind()), Some(PieceKind::King));
        let transition = board.white_player().make_move(&capture);
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert_eq!(transition.board(), &board);
    }

    #[test]
    fn test_opponent_already_in_check() {
        let board: Board = "- - - - k - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - - - - -
                            - - - - R - K -"
            .parse()
            .unwrap();
        assert!(board.black_player().is_in_check());

        let white = board.current_player();
        let capture = move_factory::create_move(&board, sq("e1"), sq("e8")).unwrap();
        assert_eq!(white.make_move(&capture).status(), MoveStatus::IllegalMove);

        let valid = white.valid_moves();
        assert!(!valid.is_empty());
        assert!(!valid.contains(&capture));
        assert_eq!(board.perft(1), valid.len() as u64);
        assert!(!white.is_in_check_mate());
        assert!(!white.is_in_stale_mate());
    }
}
