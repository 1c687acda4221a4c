//! Game clock - the two-phase scheduler
//!
//! The fall timer and the highlight timer never run at the same time: the
//! clock holds a single [`Phase`], and the phase alone decides which timer (if
//! any) is counting. Switching phase always restarts the count from zero.
//!
//! - `Falling`: periodic fall timer, fires every `fall_interval_ms`
//! - `Locking`: one-shot highlight timer, fires once after `highlight_ms`; the
//!   clock stays in `Locking`, spent, until the owner moves it to another phase
//! - `Paused` / `GameOver`: nothing runs

use crate::types::{Phase, FALL_INTERVAL_MS, HIGHLIGHT_MS};

/// Timer durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTiming {
    pub fall_interval_ms: u32,
    pub highlight_ms: u32,
}

impl Default for ClockTiming {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            highlight_ms: HIGHLIGHT_MS,
        }
    }
}

/// Which timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    Fall,
    Highlight,
}

#[derive(Debug, Clone)]
pub struct GameClock {
    timing: ClockTiming,
    phase: Phase,
    elapsed_ms: u32,
}

impl GameClock {
    /// Create a clock with the fall timer running
    pub fn new(timing: ClockTiming) -> Self {
        // A zero period would fire forever within a single advance.
        let timing = ClockTiming {
            fall_interval_ms: timing.fall_interval_ms.max(1),
            highlight_ms: timing.highlight_ms.max(1),
        };
        Self {
            timing,
            phase: Phase::Falling,
            elapsed_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> ClockTiming {
        self.timing
    }

    /// Time accumulated toward the running timer's next fire
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// True while the fall timer is running
    pub fn is_falling(&self) -> bool {
        self.phase == Phase::Falling
    }

    /// Start (or restart) the fall timer
    pub fn start_fall(&mut self) {
        self.enter(Phase::Falling);
    }

    /// Stop the fall timer and start the highlight timer
    pub fn start_highlight(&mut self) {
        self.enter(Phase::Locking);
    }

    /// Stop whichever timer is running for good
    pub fn halt(&mut self) {
        self.enter(Phase::GameOver);
    }

    /// Freeze or resume the fall timer
    ///
    /// Returns false (and changes nothing) while locking or after game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Falling => {
                self.enter(Phase::Paused);
                true
            }
            Phase::Paused => {
                self.enter(Phase::Falling);
                true
            }
            Phase::Locking | Phase::GameOver => false,
        }
    }

    /// Spend up to `*budget_ms` milliseconds on the running timer
    ///
    /// Returns the first timer that fires within the budget and leaves the
    /// unspent remainder in `*budget_ms`, so callers can react to the tick
    /// (possibly switching phase) and call again. Returns `None` once the
    /// budget is exhausted or no timer is running.
    pub fn advance(&mut self, budget_ms: &mut u32) -> Option<ClockTick> {
        let (period, tick) = match self.phase {
            Phase::Falling => (self.timing.fall_interval_ms, ClockTick::Fall),
            Phase::Locking if !self.highlight_spent() => {
                (self.timing.highlight_ms, ClockTick::Highlight)
            }
            Phase::Locking | Phase::Paused | Phase::GameOver => {
                *budget_ms = 0;
                return None;
            }
        };

        let needed = period.saturating_sub(self.elapsed_ms);
        if *budget_ms < needed {
            self.elapsed_ms += *budget_ms;
            *budget_ms = 0;
            return None;
        }

        *budget_ms -= needed;
        self.elapsed_ms = match tick {
            ClockTick::Fall => 0,
            // One-shot: stays spent until the next phase change.
            ClockTick::Highlight => period,
        };
        Some(tick)
    }

    /// True once the highlight timer has fired in the current `Locking` phase
    pub fn highlight_spent(&self) -> bool {
        self.phase == Phase::Locking && self.elapsed_ms >= self.timing.highlight_ms
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed_ms = 0;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(ClockTiming::default())
    }
}
