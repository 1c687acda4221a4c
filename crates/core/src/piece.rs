//! Active and pending pieces

use crate::board::Board;
use crate::placement::can_place;
use crate::rng::SimpleRng;
use crate::shapes::{definition, rotate_offsets, Offsets};
use crate::types::{Rgb, ShapeKind, PREVIEW_ANCHOR};

/// The piece shown in the preview window, spawned after the active piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingPiece {
    pub kind: ShapeKind,
    pub color: Rgb,
}

impl PendingPiece {
    pub fn new(kind: ShapeKind, color: Rgb) -> Self {
        Self { kind, color }
    }

    /// Draw a uniformly random shape and non-black color
    pub fn random(rng: &mut SimpleRng) -> Self {
        let kind = rng.next_shape();
        let color = rng.next_color();
        Self { kind, color }
    }

    /// `(row, col)` of each block inside the 6x6 preview window
    pub fn preview_cells(&self) -> [(usize, usize); 4] {
        let offsets = definition(self.kind).offsets;
        offsets.map(|(dr, dc)| ((dr + PREVIEW_ANCHOR) as usize, (dc + PREVIEW_ANCHOR) as usize))
    }
}

/// The falling piece
///
/// `offsets` is this piece's own copy of the catalog offsets; rotation only
/// ever rewrites the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub color: Rgb,
    pub center_row: i8,
    pub center_column: i8,
    pub offsets: Offsets,
}

impl ActivePiece {
    /// Create the piece described by `pending` at its catalog spawn position
    pub fn spawn(pending: PendingPiece) -> Self {
        let def = definition(pending.kind);
        Self {
            kind: pending.kind,
            color: pending.color,
            center_row: def.center_row,
            center_column: def.center_column,
            offsets: def.offsets,
        }
    }

    /// Check the piece's current geometry against the board
    pub fn fits(&self, board: &Board) -> bool {
        can_place(board, self.center_row, self.center_column, &self.offsets)
    }

    /// Move the center by `(d_row, d_col)` if the result fits
    pub fn try_shift(&mut self, board: &Board, d_row: i8, d_col: i8) -> bool {
        let row = self.center_row + d_row;
        let col = self.center_column + d_col;
        if !can_place(board, row, col, &self.offsets) {
            return false;
        }
        self.center_row = row;
        self.center_column = col;
        true
    }

    /// Rotate 90 degrees about the center if the result fits (no kicks)
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = rotate_offsets(&self.offsets);
        if !can_place(board, self.center_row, self.center_column, &rotated) {
            return false;
        }
        self.offsets = rotated;
        true
    }

    /// Absolute `(row, col)` of each block
    ///
    /// Only meaningful while the piece is in a legal position.
    pub fn cells(&self) -> [(usize, usize); 4] {
        self.offsets.map(|(dr, dc)| {
            (
                (self.center_row + dr) as usize,
                (self.center_column + dc) as usize,
            )
        })
    }
}
