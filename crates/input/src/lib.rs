//! Input module (engine-facing).
//!
//! Independent of any UI framework. Maps key characters to
//! [`crate::types::Command`] tokens and turns held keys into timer-driven
//! repeats: accelerating horizontal auto-repeat and a binary soft-drop hold.

pub mod handler;
pub mod map;

pub use tile_games_types as types;

pub use handler::{InputHandler, RepeatConfig};
pub use map::{map_key, should_quit};
