//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game has
//! no auto-repeat of its own: terminal key repeats arrive as presses and are
//! handled like any other press.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, should_quit};
