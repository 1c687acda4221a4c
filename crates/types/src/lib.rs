//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, the session journal).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 15 (indexed 0-14, top to bottom)
//! - **Preview window**: 6x6 cells for the next piece
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Input poll / render interval |
//! | `FALL_INTERVAL_MS` | 200 | Period of the fall clock |
//! | `HIGHLIGHT_MS` | 100 | One-shot pause while full rows are highlighted |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Cell, Rgb, ShapeKind, COLUMNS, ROWS};
//!
//! assert_eq!(ShapeKind::O.index(), 2);
//! assert_eq!(ShapeKind::ALL[6], ShapeKind::Z);
//! assert!(Cell::default().is_empty());
//! assert_eq!(Cell::Filled(Rgb::WHITE).color(), Some(Rgb::WHITE));
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 15);
//! ```

/// Board width in cells
pub const COLUMNS: usize = 10;

/// Board height in cells
pub const ROWS: usize = 15;

/// Side length of the square "next piece" preview window, in cells
pub const PREVIEW_SIZE: usize = 6;

/// Offset added to a shape's block offsets when drawn in the preview window
pub const PREVIEW_ANCHOR: i8 = 2;

/// Input poll / render interval in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Period of the automatic fall clock in milliseconds
pub const FALL_INTERVAL_MS: u32 = 200;

/// Duration of the full-row highlight pause in milliseconds
pub const HIGHLIGHT_MS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions_and_timing() {
        assert_eq!(COLUMNS, 10);
        assert_eq!(ROWS, 15);
        assert_eq!(PREVIEW_SIZE, 6);
        assert_eq!(FALL_INTERVAL_MS, 200);
        assert_eq!(HIGHLIGHT_MS, 100);
    }

    #[test]
    fn shape_kind_index_matches_catalog_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        let letters: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(letters, ["I", "T", "O", "L", "J", "S", "Z"]);
    }

    #[test]
    fn cell_color_accessor() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(Cell::Filled(red).color(), Some(red));
        assert_eq!(Cell::Empty.color(), None);
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Filled(red).is_empty());
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Rgb),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// The seven tetromino shapes, in catalog order
///
/// The discriminant is the shape id used by the catalog and the random
/// generator (`I = 0` .. `Z = 6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    O,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Catalog index (shape id) of this kind
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::T => "T",
            ShapeKind::O => "O",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    Restart,
}

/// Phase of the session's two-timer state machine
///
/// - `Falling`: the fall clock is running, the piece accepts input
/// - `Paused`: the fall clock is stopped by the player
/// - `Locking`: the piece has locked, full rows are highlighted and the
///   highlight clock is running
/// - `GameOver`: a new piece could not be spawned; no clock runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Falling,
    Paused,
    Locking,
    GameOver,
}
