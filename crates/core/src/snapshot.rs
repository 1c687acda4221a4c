//! Copyable view of a session for renderers

use crate::board::Row;
use crate::lines::RowSet;
use crate::piece::{ActivePiece, PendingPiece};
use crate::types::{Cell, Phase, Rgb, ShapeKind, COLUMNS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Rgb,
    pub center_row: i8,
    pub center_column: i8,
    /// Absolute `(row, col)` of each block
    pub cells: [(usize, usize); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            center_row: value.center_row,
            center_column: value.center_column,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [Row; ROWS],
    pub active: Option<ActiveSnapshot>,
    pub pending: PendingPiece,
    pub score: u32,
    pub highlighted: RowSet,
    pub phase: Phase,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn is_highlighted(&self, row: usize) -> bool {
        self.highlighted.contains(&row)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; COLUMNS]; ROWS],
            active: None,
            pending: PendingPiece::new(ShapeKind::I, Rgb::WHITE),
            score: 0,
            highlighted: RowSet::new(),
            phase: Phase::Falling,
            seed: 0,
        }
    }
}
