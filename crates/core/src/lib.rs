//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-blocks game and the state
//! machine that drives them. It has **zero dependencies** on terminals, files
//! or wall-clock time: callers feed it actions and elapsed milliseconds.
//!
//! # Module Structure
//!
//! - [`board`]: 15x10 grid of cells, row fullness and row collapse
//! - [`shapes`]: the seven tetromino definitions and the rotation transform
//! - [`piece`]: the active (falling) piece and the pending (next) piece
//! - [`placement`]: the single legality predicate used by every move
//! - [`lines`]: full-row detection and cascading collapse
//! - [`clock`]: two-phase scheduler (fall timer vs. highlight timer)
//! - [`rng`]: uniform shape / color generation from a seeded LCG
//! - [`session`]: [`GameSession`], which owns all of the above
//! - [`snapshot`]: copyable view of a session for renderers
//! - [`events`]: events recorded by the session for observers
//!
//! # Game Rules
//!
//! - Shapes are drawn uniformly at random with a random non-black color
//! - Rotation is a fixed 90 degree turn about the piece center, no wall kicks
//! - A piece that cannot move down locks immediately
//! - Each full row scores one point; rows are removed after a short highlight
//! - If the next piece does not fit at its spawn position the game is over
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::GameSession;
//! use falling_blocks_types::{GameAction, Phase};
//!
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Five fall ticks at the default 200ms period.
//! game.tick(1_000);
//!
//! game.apply_action(GameAction::TogglePause);
//! assert_eq!(game.phase(), Phase::Paused);
//! assert!(!game.apply_action(GameAction::MoveLeft));
//! ```

pub mod board;
pub mod clock;
pub mod events;
pub mod lines;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{ClockTick, ClockTiming, GameClock};
pub use events::CoreEvent;
pub use lines::RowSet;
pub use piece::{ActivePiece, PendingPiece};
pub use placement::can_place;
pub use rng::SimpleRng;
pub use session::GameSession;
pub use shapes::{definition, rotate_offsets, Offset, Offsets, ShapeDefinition, CATALOG};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
