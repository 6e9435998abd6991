//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::create_standard_board();
//! assert_eq!(board.current_player().alliance(), Alliance::White);
//! ```

pub use super::move_factory::{create_move, create_promotion_move};
pub use super::{Alliance, Board, BoardError, Builder, Move, MoveKind, Piece, PieceKind, Square};
pub use crate::player::{MoveStatus, MoveTransition, Player};
