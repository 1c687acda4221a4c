//! Game session - owns the board, the pieces, the score and the clock
//!
//! Every transition goes through [`GameSession::apply_action`] (player input)
//! or [`GameSession::tick`] (elapsed time). Both switch on the clock's
//! [`Phase`]:
//!
//! ```text
//!  Falling ──drop blocked──▶ Locking ──highlight fires──▶ collapse + spawn ──▶ Falling
//!   │   ▲                                                      │
//! pause resume                                                 └─spawn blocked──▶ GameOver
//!   ▼   │
//!  Paused
//! ```

use crate::board::Board;
use crate::clock::{ClockTick, ClockTiming, GameClock};
use crate::events::CoreEvent;
use crate::lines::{collapse_rows, full_rows, piece_rows, touched_rows, RowSet};
use crate::piece::{ActivePiece, PendingPiece};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Phase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    pending: PendingPiece,
    score: u32,
    /// Rows found full at the last lock, waiting for the highlight timer.
    highlighted: RowSet,
    /// Rows of the last locked piece in block order, walked on collapse.
    lock_rows: RowSet,
    clock: GameClock,
    rng: SimpleRng,
    seed: u32,
    events: Vec<CoreEvent>,
}

impl GameSession {
    /// Create a session with default timing and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_timing(seed, ClockTiming::default())
    }

    /// Create a session: empty board, first piece spawned, fall clock running
    pub fn with_timing(seed: u32, timing: ClockTiming) -> Self {
        let mut rng = SimpleRng::new(seed);
        let pending = PendingPiece::random(&mut rng);
        let mut session = Self {
            board: Board::new(),
            active: None,
            pending,
            score: 0,
            highlighted: RowSet::new(),
            lock_rows: RowSet::new(),
            clock: GameClock::new(timing),
            rng,
            seed,
            events: Vec::new(),
        };
        session.spawn();
        session
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> PendingPiece {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highlighted_rows(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Board access for tests and tools that set up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Active piece access for tests and tools that set up positions
    pub fn active_mut(&mut self) -> Option<&mut ActivePiece> {
        self.active.as_mut()
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CoreEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.pending = self.pending;
        out.score = self.score;
        out.highlighted = self.highlighted.clone();
        out.phase = self.phase();
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player action
    ///
    /// Returns true if the action changed the session. Movement, drop and
    /// rotation are ignored unless the fall clock is running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if !self.clock.is_falling() => false,
            GameAction::MoveLeft => self.shift(0, -1),
            GameAction::MoveRight => self.shift(0, 1),
            GameAction::SoftDrop => {
                self.step_down();
                true
            }
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Advance the clock by `elapsed_ms` and run every timer event that fires
    ///
    /// Returns true if any timer fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut budget = elapsed_ms;
        let mut fired = false;
        while let Some(tick) = self.clock.advance(&mut budget) {
            fired = true;
            match tick {
                ClockTick::Fall => self.step_down(),
                ClockTick::Highlight => self.collapse_and_respawn(),
            }
        }
        fired
    }

    fn shift(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.try_shift(&self.board, d_row, d_col) {
            return false;
        }
        self.events.push(CoreEvent::Moved {
            center_row: piece.center_row,
            center_column: piece.center_column,
        });
        true
    }

    fn rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.try_rotate(&self.board) {
            return false;
        }
        self.events.push(CoreEvent::Rotated);
        true
    }

    /// Move the piece down one row, or lock it where it is
    fn step_down(&mut self) {
        if !self.shift(1, 0) {
            self.lock();
        }
    }

    /// Write the active piece into the board and start the highlight pause
    fn lock(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let cells = piece.cells();
        for &(row, col) in &cells {
            self.board.place(row, col, piece.color);
        }

        let full = full_rows(&self.board, &touched_rows(&cells));
        self.score += full.len() as u32;
        self.highlighted = full.clone();
        self.lock_rows = piece_rows(&cells);
        self.clock.start_highlight();

        self.events.push(CoreEvent::Locked {
            kind: piece.kind,
            cells,
            full_rows: full,
            score: self.score,
        });
    }

    /// Highlight timer fired: remove full rows and bring in the next piece
    fn collapse_and_respawn(&mut self) {
        self.highlighted.clear();
        let rows = collapse_rows(&mut self.board, &std::mem::take(&mut self.lock_rows));
        if !rows.is_empty() {
            self.events.push(CoreEvent::Collapsed { rows });
        }
        self.spawn();
    }

    /// Turn the pending piece into the active piece and draw a new pending piece
    fn spawn(&mut self) {
        let piece = ActivePiece::spawn(self.pending);
        if !piece.fits(&self.board) {
            self.clock.halt();
            self.events.push(CoreEvent::ToppedOut {
                kind: piece.kind,
                score: self.score,
            });
            return;
        }

        self.active = Some(piece);
        self.pending = PendingPiece::random(&mut self.rng);
        self.clock.start_fall();
        self.events.push(CoreEvent::Spawned {
            kind: piece.kind,
            color: piece.color,
            next: self.pending.kind,
        });
    }

    fn toggle_pause(&mut self) -> bool {
        if !self.clock.toggle_pause() {
            return false;
        }
        self.events.push(if self.clock.is_falling() {
            CoreEvent::Resumed
        } else {
            CoreEvent::Paused
        });
        true
    }

    /// Replace this session with a fresh one seeded from the current RNG stream
    fn restart(&mut self) {
        let seed = self.rng.next_u32();
        let mut fresh = Self::with_timing(seed, self.clock.timing());

        let mut events = std::mem::take(&mut self.events);
        events.push(CoreEvent::Restarted { seed });
        events.append(&mut fresh.events);
        fresh.events = events;

        *self = fresh;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{definition, rotate_offsets};
    use crate::types::{Rgb, ShapeKind, COLUMNS, ROWS};

    const GRAY: Rgb = Rgb::new(90, 90, 90);

    /// Session whose active piece is `kind` at its spawn position
    fn session_with(kind: ShapeKind) -> GameSession {
        let mut s = GameSession::new(12345);
        let color = s.active.unwrap().color;
        s.active = Some(ActivePiece::spawn(PendingPiece::new(kind, color)));
        s
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::new(12345);
        assert_eq!(s.phase(), Phase::Falling);
        assert_eq!(s.score(), 0);
        assert!(s.active().is_some());
        assert!(s.highlighted_rows().is_empty());
        assert_eq!(s.board().filled_count(), 0);
    }

    #[test]
    fn test_spawn_uses_catalog_position() {
        let s = GameSession::new(777);
        let piece = s.active().unwrap();
        let def = definition(piece.kind);
        assert_eq!(piece.center_row, def.center_row);
        assert_eq!(piece.center_column, def.center_column);
        assert_eq!(piece.offsets, def.offsets);
    }

    #[test]
    fn test_move_only_changes_column() {
        let mut s = session_with(ShapeKind::T);
        let before = *s.active().unwrap();
        assert!(s.apply_action(GameAction::MoveLeft));
        let after = *s.active().unwrap();
        assert_eq!(after.center_row, before.center_row);
        assert_eq!(after.center_column, before.center_column - 1);

        assert!(s.apply_action(GameAction::MoveRight));
        assert_eq!(s.active().unwrap().center_column, before.center_column);
    }

    #[test]
    fn test_soft_drop_only_changes_row() {
        let mut s = session_with(ShapeKind::S);
        let before = *s.active().unwrap();
        assert!(s.apply_action(GameAction::SoftDrop));
        let after = *s.active().unwrap();
        assert_eq!(after.center_column, before.center_column);
        assert_eq!(after.center_row, before.center_row + 1);
    }

    #[test]
    fn test_fall_tick_moves_down() {
        let mut s = session_with(ShapeKind::O);
        let row = s.active().unwrap().center_row;
        assert!(!s.tick(199));
        assert_eq!(s.active().unwrap().center_row, row);
        assert!(s.tick(1));
        assert_eq!(s.active().unwrap().center_row, row + 1);
    }

    #[test]
    fn test_lock_enters_locking_phase() {
        let mut s = session_with(ShapeKind::O);
        s.active.as_mut().unwrap().center_row = (ROWS - 1) as i8;

        assert!(s.apply_action(GameAction::SoftDrop));
        assert_eq!(s.phase(), Phase::Locking);
        assert!(s.active().is_none());
        assert_eq!(s.board().filled_count(), 4);
        assert!(s.board().is_occupied(ROWS - 1, 4));
        assert!(s.board().is_occupied(ROWS - 2, 5));

        // Input is ignored while locking.
        assert!(!s.apply_action(GameAction::MoveLeft));
        assert!(!s.apply_action(GameAction::SoftDrop));
        assert!(!s.apply_action(GameAction::Rotate));
        assert!(!s.apply_action(GameAction::TogglePause));
        assert_eq!(s.phase(), Phase::Locking);
    }

    #[test]
    fn test_highlight_then_respawn() {
        let mut s = session_with(ShapeKind::O);
        s.active.as_mut().unwrap().center_row = (ROWS - 1) as i8;
        let next = s.pending();

        s.apply_action(GameAction::SoftDrop);
        assert!(!s.tick(99));
        assert_eq!(s.phase(), Phase::Locking);
        assert!(s.tick(1));

        assert_eq!(s.phase(), Phase::Falling);
        let active = s.active().unwrap();
        assert_eq!(active.kind, next.kind);
        assert_eq!(active.color, next.color);
    }

    #[test]
    fn test_lock_scores_each_full_row_once() {
        let mut s = session_with(ShapeKind::I);
        // Rotate the I into a horizontal bar on row 14 covering columns 3..=6.
        {
            let piece = s.active.as_mut().unwrap();
            piece.offsets = [(0, 2), (0, 1), (0, 0), (0, -1)];
            piece.center_row = 14;
            piece.center_column = 4;
        }
        for col in (0..3).chain(7..COLUMNS) {
            s.board.place(14, col, GRAY);
        }

        s.apply_action(GameAction::SoftDrop);
        assert!(s.board().is_row_full(14));
        assert_eq!(s.score(), 1);
        assert_eq!(s.highlighted_rows(), &[14]);
    }

    #[test]
    fn test_pause_blocks_movement() {
        let mut s = session_with(ShapeKind::T);
        let before = *s.active().unwrap();

        assert!(s.apply_action(GameAction::TogglePause));
        assert_eq!(s.phase(), Phase::Paused);
        assert!(!s.apply_action(GameAction::MoveLeft));
        assert!(!s.apply_action(GameAction::Rotate));
        assert!(!s.tick(10_000));
        assert_eq!(*s.active().unwrap(), before);

        assert!(s.apply_action(GameAction::TogglePause));
        assert_eq!(s.phase(), Phase::Falling);
        assert!(s.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_top_out_ends_game() {
        let mut s = session_with(ShapeKind::O);
        s.active.as_mut().unwrap().center_row = (ROWS - 1) as i8;
        // Fill the spawn area of every shape except one open column.
        for row in 0..4 {
            for col in 0..COLUMNS - 1 {
                s.board.place(row, col, GRAY);
            }
        }
        s.apply_action(GameAction::SoftDrop);
        s.tick(100);

        assert_eq!(s.phase(), Phase::GameOver);
        assert!(s.active().is_none());
        assert!(!s.apply_action(GameAction::TogglePause));
        assert!(!s.tick(10_000));
        assert!(s
            .drain_events()
            .any(|e| matches!(e, CoreEvent::ToppedOut { .. })));
    }

    #[test]
    fn test_restart_resets_state() {
        let mut s = session_with(ShapeKind::O);
        s.board.place(14, 0, GRAY);
        s.score = 7;
        s.apply_action(GameAction::TogglePause);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.score(), 0);
        assert_eq!(s.board().filled_count(), 0);
        assert_eq!(s.phase(), Phase::Falling);
        assert!(s.active().is_some());

        let names: Vec<&str> = s.drain_events().map(|e| e.name()).collect();
        let restart_at = names.iter().position(|n| *n == "restarted").unwrap();
        assert_eq!(names[restart_at + 1], "spawned");
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let a = GameSession::new(4242);
        let b = GameSession::new(4242);
        assert_eq!(a.active(), b.active());
        assert_eq!(a.pending(), b.pending());
    }

    #[test]
    fn test_collapse_follows_block_order() {
        let mut s = session_with(ShapeKind::I);
        {
            // Two turns leave the I vertical with its bottom block first.
            let piece = s.active.as_mut().unwrap();
            piece.offsets = rotate_offsets(&rotate_offsets(&piece.offsets));
            assert_eq!(piece.offsets, [(2, 0), (1, 0), (0, 0), (-1, 0)]);
            piece.center_row = 12;
        }
        for row in [13, 14] {
            for col in (0..COLUMNS).filter(|&c| c != 4) {
                s.board.place(row, col, GRAY);
            }
        }

        s.apply_action(GameAction::SoftDrop);
        assert_eq!(s.score(), 2);
        assert_eq!(s.highlighted_rows(), &[13, 14]);

        s.tick(100);
        // Row 14 collapsed once and received the full row 13.
        assert!(s.board().is_row_full(14));
        assert!(!s.board().is_row_full(13));
        assert_eq!(s.board().filled_count(), COLUMNS + 2);
        assert!(s.highlighted_rows().is_empty());
        assert!(s
            .drain_events()
            .any(|e| matches!(e, CoreEvent::Collapsed { ref rows } if rows.as_slice() == [14])));
    }
}
