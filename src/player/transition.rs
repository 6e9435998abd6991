use std::borrow::Cow;
use std::fmt;

use crate::board::{Board, Move};

/// Outcome of asking a player to make a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was played; the transition holds the new board.
    Done,
    /// The move is not among the player's generated moves, or it would take
    /// the opposing king.
    IllegalMove,
    /// The move was generated but would leave the mover's king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveStatus::Done => "done",
            MoveStatus::IllegalMove => "illegal move",
            MoveStatus::LeavesPlayerInCheck => "leaves player in check",
        };
        f.write_str(text)
    }
}

/// The board to continue from after `Player::make_move`.
///
/// A rejected move borrows the original board back; a played move owns the
/// new one.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    board: Cow<'a, Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(board: Board, mv: Move) -> Self {
        MoveTransition {
            board: Cow::Owned(board),
            mv,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(board: &'a Board, mv: Move, status: MoveStatus) -> Self {
        MoveTransition {
            board: Cow::Borrowed(board),
            mv,
            status,
        }
    }

    /// The board after the move, or the unchanged board if it was rejected.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }

    #[must_use]
    pub const fn mv(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub const fn status(&self) -> MoveStatus {
        self.status
    }
}
