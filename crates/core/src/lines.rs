//! Line-clear and gravity engine
//!
//! Only rows touched by the piece that just locked can become full, so the
//! scan is limited to those rows. Removal is a cascading overwrite, see
//! [`Board::collapse_row`].
//!
//! Scoring looks at the distinct full rows at lock time. Collapsing walks the
//! piece's rows in block order and re-tests each row on the board as it is
//! being rewritten, so a row that a previous collapse refilled stays put.

use arrayvec::ArrayVec;

use crate::board::Board;

/// Up to four row indices
pub type RowSet = ArrayVec<usize, 4>;

/// Row of each block, in block order, duplicates included
pub fn piece_rows(cells: &[(usize, usize); 4]) -> RowSet {
    cells.iter().map(|&(row, _)| row).collect()
}

/// Distinct rows covered by `cells`, sorted top to bottom
pub fn touched_rows(cells: &[(usize, usize); 4]) -> RowSet {
    let mut rows = RowSet::new();
    for &(row, _) in cells {
        if !rows.contains(&row) {
            rows.push(row);
        }
    }
    rows.sort_unstable();
    rows
}

/// Rows among `candidates` that are completely filled
pub fn full_rows(board: &Board, candidates: &RowSet) -> RowSet {
    candidates
        .iter()
        .copied()
        .filter(|&row| board.is_row_full(row))
        .collect()
}

/// Collapse each row of `rows` that is full when its turn comes
///
/// Returns the rows that were collapsed, in the order they were processed.
pub fn collapse_rows(board: &mut Board, rows: &RowSet) -> RowSet {
    let mut collapsed = RowSet::new();
    for &row in rows {
        if board.is_row_full(row) {
            board.collapse_row(row);
            collapsed.push(row);
        }
    }
    collapsed
}
