//! Core game logic module - pure, deterministic, and testable
//!
//! Both tile-game engines live here. Nothing in this crate performs I/O:
//! randomness is injected through [`RandomSource`], and every view handed
//! outward is an owned snapshot.
//!
//! # Module Structure
//!
//! - [`grid`]: generic square grid with transpose and comparator equality
//! - [`merge`]: 2048 slide/merge engine with precomputed per-direction results
//! - [`pieces`]: literal tetromino rotation tables and the kick search
//! - [`heap`]: settled cells of the falling-block board and row clearing
//! - [`falling`]: falling-block engine with its gravity accumulator
//! - [`scoring`]: lock scoring and best-score helpers
//! - [`history`]: bounded FIFO of snapshots for undo
//! - [`snapshot`]: serializable read-only views
//! - [`rng`]: injectable randomness
//!
//! # Example
//!
//! ```
//! use tile_games_core::{FallingConfig, FallingGame, MergeConfig, MergeGame, SimpleRng};
//! use tile_games_types::{Command, Direction};
//!
//! let mut merge = MergeGame::new(MergeConfig::default(), SimpleRng::new(7));
//! assert_eq!(merge.tiles().len(), 2);
//! let _moved = merge.apply_move(Direction::Left);
//!
//! let mut blocks = FallingGame::new(FallingConfig::default(), SimpleRng::new(7));
//! assert!(blocks.apply_action(Command::Resume));
//! for _ in 0..26 {
//!     blocks.tick();
//! }
//! assert!(!blocks.game_over());
//! ```

pub mod error;
pub mod falling;
pub mod grid;
pub mod heap;
pub mod history;
pub mod merge;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tile_games_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use falling::{FallingConfig, FallingGame, LockEvent, Phase, Piece};
pub use grid::Grid;
pub use heap::Heap;
pub use history::History;
pub use merge::{collapse_line, MergeConfig, MergeGame, MoveResult, MoveSet, TileGrid};
pub use pieces::{get_shape, kick_search, PieceShape};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::{chain_bonus, lock_score};
pub use snapshot::{FallingSnapshot, MergeRecord, MergeSnapshot, MoveFlags, PieceSnapshot};
