//! Placement / collision engine
//!
//! A single legality predicate shared by horizontal moves, downward moves and
//! rotation. Bounds are tested before occupancy for every block, so the board
//! is never indexed outside the grid.

use crate::board::Board;
use crate::shapes::Offsets;
use crate::types::{COLUMNS, ROWS};

/// Absolute `(row, col)` of a block, or `None` if it lies outside the board
#[inline]
pub fn board_position(center_row: i8, center_column: i8, offset: (i8, i8)) -> Option<(usize, usize)> {
    let row = center_row as i16 + offset.0 as i16;
    let col = center_column as i16 + offset.1 as i16;
    if col < 0 || col >= COLUMNS as i16 || row < 0 || row >= ROWS as i16 {
        return None;
    }
    Some((row as usize, col as usize))
}

/// Check whether a piece with `offsets` centered at `(center_row, center_column)`
/// fits on the board: every block in bounds and on an empty cell.
pub fn can_place(board: &Board, center_row: i8, center_column: i8, offsets: &Offsets) -> bool {
    offsets.iter().all(|&offset| {
        match board_position(center_row, center_column, offset) {
            Some((row, col)) => !board.is_occupied(row, col),
            None => false,
        }
    })
}
