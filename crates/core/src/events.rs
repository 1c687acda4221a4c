//! Session events, recorded by [`crate::GameSession`] and drained by observers
//! such as the journal.

use crate::lines::RowSet;
use crate::types::{Rgb, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// A new active piece entered the board.
    Spawned {
        kind: ShapeKind,
        color: Rgb,
        next: ShapeKind,
    },
    /// The active piece moved one cell.
    Moved { center_row: i8, center_column: i8 },
    Rotated,
    /// The active piece was written into the board.
    Locked {
        kind: ShapeKind,
        cells: [(usize, usize); 4],
        full_rows: RowSet,
        score: u32,
    },
    /// Highlighted rows were removed.
    Collapsed { rows: RowSet },
    Paused,
    Resumed,
    /// The next piece did not fit at its spawn position.
    ToppedOut { kind: ShapeKind, score: u32 },
    Restarted { seed: u32 },
}

impl CoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CoreEvent::Spawned { .. } => "spawned",
            CoreEvent::Moved { .. } => "moved",
            CoreEvent::Rotated => "rotated",
            CoreEvent::Locked { .. } => "locked",
            CoreEvent::Collapsed { .. } => "collapsed",
            CoreEvent::Paused => "paused",
            CoreEvent::Resumed => "resumed",
            CoreEvent::ToppedOut { .. } => "toppedOut",
            CoreEvent::Restarted { .. } => "restarted",
        }
    }
}
