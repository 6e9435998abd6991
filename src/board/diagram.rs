//! Reading the textual board dump back into a `Builder`.
//!
//! The dump written by `Board`'s `Display` is 64 whitespace-separated cells,
//! each `-` or a piece letter (uppercase White, lowercase Black), a8 first.
//! It carries no history, so a pawn, king or rook counts as unmoved exactly
//! when it stands on its starting square.

use std::str::FromStr;

use super::tables::is_pawn_start;
use super::{Alliance, Board, BoardError, Builder, Piece, PieceKind, Square, NUM_TILES};

impl Builder {
    /// Stage the position drawn in `diagram`, White to move.
    pub fn from_diagram(diagram: &str) -> Result<Builder, BoardError> {
        let cells: Vec<&str> = diagram.split_whitespace().collect();
        if cells.len() != NUM_TILES {
            return Err(BoardError::WrongCellCount { found: cells.len() });
        }

        let mut builder = Builder::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if cell == "-" {
                continue;
            }
            let piece = parse_cell(cell, Square::from_index(index)).ok_or_else(|| {
                BoardError::InvalidCell {
                    index,
                    cell: cell.to_string(),
                }
            })?;
            builder = builder.set_piece(piece);
        }
        Ok(builder)
    }
}

fn parse_cell(cell: &str, square: Square) -> Option<Piece> {
    let mut chars = cell.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let kind = PieceKind::from_char(c)?;
    let alliance = if c.is_ascii_uppercase() {
        Alliance::White
    } else {
        Alliance::Black
    };
    Some(Piece::with_first_move(
        kind,
        alliance,
        square,
        is_starting_square(kind, alliance, square),
    ))
}

fn is_starting_square(kind: PieceKind, alliance: Alliance, square: Square) -> bool {
    match kind {
        PieceKind::Pawn => is_pawn_start(alliance, square),
        PieceKind::King => square == alliance.king_home(),
        PieceKind::Rook => {
            let home = alliance.king_home();
            home.offset(-4) == Some(square) || home.offset(3) == Some(square)
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a board dump; White is to move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builder::from_diagram(s)?.try_build()
    }
}
