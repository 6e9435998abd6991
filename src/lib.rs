pub mod board;
mod perft;
pub mod player;

pub use board::{Alliance, Board, Builder, Move, Piece, PieceKind, Square};
pub use player::{MoveStatus, MoveTransition, Player};
