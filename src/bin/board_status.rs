use std::env;
use std::process::ExitCode;

use chess_rules::board::{move_factory, Board, Move, PieceKind, Square};

/// Coordinate notation: `e2e4`, or `e7e8n` to pick a promotion piece.
fn find_move(board: &Board, text: &str) -> Option<Move> {
    let from: Square = text.get(0..2)?.parse().ok()?;
    let to: Square = text.get(2..4)?.parse().ok()?;
    match text[4..].chars().next() {
        None => move_factory::create_move(board, from, to),
        Some(c) => {
            let kind = PieceKind::from_char(c)?;
            move_factory::create_promotion_move(board, from, to, kind)
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut board = Board::create_standard_board();

    for text in &args {
        let Some(mv) = find_move(&board, text) else {
            eprintln!("{text}: no such move (expected coordinates like e2e4)");
            return ExitCode::FAILURE;
        };
        let transition = board.current_player().make_move(&mv);
        if !transition.status().is_done() {
            eprintln!("{text}: {}", transition.status());
            return ExitCode::FAILURE;
        }
        board = transition.into_board();
    }

    let player = board.current_player();
    let valid_moves = player.valid_moves();
    print!("{board}");
    println!("side_to_move: {}", player.alliance());
    println!("legal_moves: {}", valid_moves.len());
    println!("check: {}", player.is_in_check());
    println!("checkmate: {}", player.is_in_check_mate());
    println!("stalemate: {}", player.is_in_stale_mate());
    for mv in &valid_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
