//! Edge-of-board lookup tables.
//!
//! Moves are generated by adding raw index offsets to a square, which only
//! keeps the result inside 0..63. An offset applied from a square in an edge
//! column can land on the far side of the board one row away; the column
//! tables below let each piece family reject those offsets up front.

use once_cell::sync::Lazy;

use super::{Alliance, Square, NUM_TILES, NUM_TILES_PER_ROW};

fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    for idx in (column..NUM_TILES).step_by(NUM_TILES_PER_ROW) {
        table[idx] = true;
    }
    table
}

fn init_row(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let start = row * NUM_TILES_PER_ROW;
    for cell in &mut table[start..start + NUM_TILES_PER_ROW] {
        *cell = true;
    }
    table
}

pub(crate) static FIRST_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(0));
pub(crate) static SECOND_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(1));
pub(crate) static SEVENTH_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(6));
pub(crate) static EIGHTH_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(7));

/// One table per row, row 0 being rank 8.
static ROWS: Lazy<[[bool; NUM_TILES]; NUM_TILES_PER_ROW]> =
    Lazy::new(|| std::array::from_fn(init_row));

pub(crate) fn is_pawn_start(alliance: Alliance, square: Square) -> bool {
    ROWS[usize::from(alliance.pawn_start_row())][square.index()]
}

pub(crate) fn is_promotion_square(alliance: Alliance, square: Square) -> bool {
    ROWS[usize::from(alliance.promotion_row())][square.index()]
}

/// Diagonal pawn offsets, before scaling by the alliance's direction.
pub(crate) const PAWN_ATTACK_OFFSETS: [i8; 2] = [7, 9];

/// Diagonal pawn steps that would wrap around an edge column. Scaled by the
/// direction, offset 7 heads towards file h for White and file a for Black.
pub(crate) fn pawn_excluded(alliance: Alliance, position: Square, offset: i8) -> bool {
    let idx = position.index();
    match (offset, alliance) {
        (7, Alliance::White) | (9, Alliance::Black) => EIGHTH_COLUMN[idx],
        (9, Alliance::White) | (7, Alliance::Black) => FIRST_COLUMN[idx],
        _ => false,
    }
}

/// Knights need two columns of guard on each side.
pub(crate) fn knight_excluded(position: Square, offset: i8) -> bool {
    let idx = position.index();
    (FIRST_COLUMN[idx] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[idx] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[idx] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[idx] && matches!(offset, -15 | -6 | 10 | 17))
}

/// King and queen share the full eight-direction guard.
pub(crate) fn king_excluded(position: Square, offset: i8) -> bool {
    let idx = position.index();
    (FIRST_COLUMN[idx] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[idx] && matches!(offset, -7 | 1 | 9))
}

pub(crate) fn bishop_excluded(position: Square, offset: i8) -> bool {
    let idx = position.index();
    (FIRST_COLUMN[idx] && matches!(offset, -9 | 7))
        || (EIGHTH_COLUMN[idx] && matches!(offset, -7 | 9))
}

pub(crate) fn rook_excluded(position: Square, offset: i8) -> bool {
    let idx = position.index();
    (FIRST_COLUMN[idx] && offset == -1) || (EIGHTH_COLUMN[idx] && offset == 1)
}
