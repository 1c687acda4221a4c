//! Falling Blocks (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `falling_blocks::{core,input,term,types}` and adds the pieces that
//! only the binary needs: environment [`config`] and the event [`journal`].

pub mod config;
pub mod journal;

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
