//! Chess board representation and the rules of movement.
//!
//! A `Board` is an immutable position built by a `Builder`. Each board knows
//! the moves both alliances could make on it and whether either king is in
//! check. Playing a move never changes a board; it builds the next one.
//!
//! # Example
//! ```
//! use chess_rules::board::{move_factory, Board, Square};
//!
//! let board = Board::create_standard_board();
//! assert_eq!(board.current_player().legal_moves().len(), 20);
//!
//! let from: Square = "e2".parse().unwrap();
//! let to: Square = "e4".parse().unwrap();
//! let mv = move_factory::create_move(&board, from, to).unwrap();
//! let transition = board.current_player().make_move(&mv);
//! assert!(transition.status().is_done());
//! println!("{}", transition.board());
//! ```

mod builder;
mod diagram;
mod error;
mod execute;
pub mod move_factory;
mod movegen;
pub mod prelude;
mod state;
mod tables;
mod tile;
mod types;

#[cfg(test)]
mod tests;

pub use builder::Builder;
pub use error::{BoardError, SquareError};
pub use state::Board;
pub use tile::Tile;
pub use types::{Alliance, CastleRook, Move, MoveKind, Piece, PieceKind, Square};

pub(crate) use state::calculate_attacks_on_tile;
pub(crate) use types::{NUM_TILES, NUM_TILES_PER_ROW};
