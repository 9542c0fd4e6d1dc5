//! Tile games (workspace facade crate).
//!
//! Re-exports the member crates under `tile_games::{adapter,core,engine,input,types}`
//! and adds [`view`], the plain-text rendering the runner binary prints.

pub use tile_games_adapter as adapter;
pub use tile_games_core as core;
pub use tile_games_engine as engine;
pub use tile_games_input as input;
pub use tile_games_types as types;

pub mod view;
