//! Terminal front end.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes framebuffers to the terminal, sending only the runs that changed.
//! No widget toolkit is involved, which keeps the aspect ratio exact (two
//! terminal columns per board cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
