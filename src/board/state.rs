use std::fmt;

use log::debug;

use super::{
    Alliance, BoardError, Builder, Move, Piece, Square, Tile, NUM_TILES, NUM_TILES_PER_ROW,
};
use crate::player::Player;

/// What a board knows about one alliance, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PlayerState {
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

/// An immutable position.
///
/// Built once by a `Builder`; playing a move produces a new `Board` and
/// leaves this one untouched. Both alliances' move lists and check flags are
/// computed during the build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) tiles: [Tile; NUM_TILES],
    pub(crate) pieces: [Vec<Piece>; 2],
    pub(crate) players: [PlayerState; 2],
    pub(crate) move_maker: Alliance,
    pub(crate) en_passant_pawn: Option<Piece>,
}

impl Board {
    /// The opening position with White to move.
    #[must_use]
    pub fn create_standard_board() -> Self {
        Builder::standard().build()
    }

    pub(crate) fn assemble(builder: Builder) -> Result<Board, BoardError> {
        let tiles: [Tile; NUM_TILES] = std::array::from_fn(|idx| {
            let sq = Square::from_index(idx);
            Tile::create(sq, builder.board_config.get(&sq).copied())
        });

        let pieces = Alliance::BOTH.map(|alliance| calculate_active_pieces(&tiles, alliance));
        let white_king = establish_king(&pieces[Alliance::White.index()], Alliance::White)?;
        let black_king = establish_king(&pieces[Alliance::Black.index()], Alliance::Black)?;

        let en_passant_pawn = builder.en_passant_pawn.filter(|pawn| {
            let on_board = pawn.kind().is_pawn()
                && tiles[pawn.position().index()].piece() == Some(*pawn);
            if !on_board {
                debug!("dropping en passant pawn {pawn}: not on the board");
            }
            on_board
        });

        let placeholder = |king| PlayerState {
            king,
            legal_moves: Vec::new(),
            in_check: false,
        };
        let mut board = Board {
            tiles,
            pieces,
            players: [placeholder(white_king), placeholder(black_king)],
            move_maker: builder.move_maker,
            en_passant_pawn,
        };

        let white_standard = board.calculate_legal_moves(Alliance::White);
        let black_standard = board.calculate_legal_moves(Alliance::Black);

        let white = board.player_state_for(
            Alliance::White,
            white_king,
            &white_standard,
            &black_standard,
        );
        let black = board.player_state_for(
            Alliance::Black,
            black_king,
            &black_standard,
            &white_standard,
        );
        board.players = [white, black];
        Ok(board)
    }

    /// Check flag plus castles layered on top of the raw per-piece moves.
    fn player_state_for(
        &self,
        alliance: Alliance,
        king: Piece,
        own_moves: &[Move],
        opponent_moves: &[Move],
    ) -> PlayerState {
        let in_check = calculate_attacks_on_tile(king.position(), opponent_moves) > 0;
        let mut legal_moves = own_moves.to_vec();
        legal_moves.extend(self.calculate_king_castles(alliance, king, in_check, opponent_moves));
        PlayerState {
            king,
            legal_moves,
            in_check,
        }
    }

    /// The tile at a coordinate.
    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    /// The tile at a raw index.
    ///
    /// # Panics
    /// Panics if `index >= 64`.
    #[must_use]
    pub fn get_tile(&self, index: usize) -> &Tile {
        self.tile(Square::from_index(index))
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tile(square).piece()
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        !self.tile(square).is_occupied()
    }

    #[must_use]
    pub fn white_pieces(&self) -> &[Piece] {
        self.active_pieces(Alliance::White)
    }

    #[must_use]
    pub fn black_pieces(&self) -> &[Piece] {
        self.active_pieces(Alliance::Black)
    }

    #[must_use]
    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        &self.pieces[alliance.index()]
    }

    /// The alliance whose turn it is.
    #[inline]
    #[must_use]
    pub const fn move_maker(&self) -> Alliance {
        self.move_maker
    }

    /// The pawn that jumped two squares on the previous ply, if any.
    #[inline]
    #[must_use]
    pub const fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, Alliance::White)
    }

    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, Alliance::Black)
    }

    #[must_use]
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        alliance.choose(self.white_player(), self.black_player())
    }

    #[must_use]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.move_maker)
    }

    /// Every legal move of both alliances, White's first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.players
            .iter()
            .flat_map(|state| state.legal_moves.iter())
    }

    #[inline]
    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        &self.players[alliance.index()]
    }
}

/// Number of moves in `moves` that would capture a piece on `square`.
pub(crate) fn calculate_attacks_on_tile(square: Square, moves: &[Move]) -> usize {
    moves.iter().filter(|mv| mv.attacks_square(square)).count()
}

fn calculate_active_pieces(tiles: &[Tile], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.alliance() == alliance)
        .collect()
}

fn establish_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|piece| piece.kind().is_king());
    let king = kings.next().copied();
    let extra = kings.count();

    match king {
        None => {
            debug!("rejecting board: {alliance} has no king");
            Err(BoardError::MissingKing { alliance })
        }
        Some(_) if extra > 0 => {
            debug!("rejecting board: {alliance} has {} kings", extra + 1);
            Err(BoardError::MultipleKings {
                alliance,
                count: extra + 1,
            })
        }
        Some(king) => Ok(king),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tile) in self.tiles.iter().enumerate() {
            write!(f, "{tile:>3}")?;
            if (idx + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::create_standard_board()
    }
}
