use serde::Deserialize;

use chess_rules::board::{move_factory, Alliance, Board, Builder, Square};
use chess_rules::MoveStatus;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    rows: Vec<String>,
    to_move: String,
    check: bool,
    checkmate: bool,
    stalemate: bool,
    valid_moves: usize,
    only_move: Option<String>,
}

impl Position {
    fn board(&self) -> Board {
        let alliance = match self.to_move.as_str() {
            "white" => Alliance::White,
            "black" => Alliance::Black,
            other => panic!("{}: unknown side to move '{other}'", self.name),
        };
        Builder::from_diagram(&self.rows.join("\n"))
            .and_then(|builder| builder.set_move_maker(alliance).try_build())
            .unwrap_or_else(|err| panic!("{}: {err}", self.name))
    }
}

fn load_positions() -> Vec<Position> {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid positions.json");
    set.positions
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn status_table() {
    for position in load_positions() {
        let board = position.board();
        let player = board.current_player();
        let valid = player.valid_moves();

        assert_eq!(player.is_in_check(), position.check, "check: {}", position.name);
        assert_eq!(
            player.is_in_check_mate(),
            position.checkmate,
            "checkmate: {}",
            position.name
        );
        assert_eq!(
            player.is_in_stale_mate(),
            position.stalemate,
            "stalemate: {}",
            position.name
        );
        assert_eq!(valid.len(), position.valid_moves, "valid moves: {}", position.name);

        if let Some(only) = &position.only_move {
            assert_eq!(valid[0].to_string(), *only, "only move: {}", position.name);
        }
    }
}

#[test]
fn terminal_positions_reject_every_move() {
    for position in load_positions().into_iter().filter(|p| p.valid_moves == 0) {
        let board = position.board();
        let player = board.current_player();
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            assert_eq!(
                transition.status(),
                MoveStatus::LeavesPlayerInCheck,
                "{}: {mv}",
                position.name
            );
            assert_eq!(transition.board(), &board);
        }
    }
}

#[test]
fn renderer_round_trip() {
    // Select squares, look the move up, play it, redraw from the new board.
    let mut board = Board::create_standard_board();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        let mv = move_factory::create_move(&board, sq(from), sq(to)).expect("move exists");
        let transition = board.current_player().make_move(&mv);
        assert!(transition.status().is_done());
        board = transition.into_board();
    }

    let dump = board.to_string();
    let redrawn: Board = dump.parse().expect("dump parses");
    for square in Square::all() {
        assert_eq!(
            redrawn.tile(square).piece().map(|p| (p.kind(), p.alliance())),
            board.tile(square).piece().map(|p| (p.kind(), p.alliance())),
            "{square}"
        );
    }
    assert_eq!(board.current_player().alliance(), Alliance::White);
}

#[test]
fn missing_move_is_none() {
    let board = Board::create_standard_board();
    assert!(move_factory::create_move(&board, sq("e1"), sq("e3")).is_none());
    assert!(move_factory::create_move(&board, sq("a3"), sq("a4")).is_none());
}
