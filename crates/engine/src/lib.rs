//! Engine module - command reducers and the gravity clock
//!
//! Wraps the core engines behind one [`Reducer`] seam so a driver can feed
//! commands and clock ticks to either game without knowing which it is.
//!
//! - [`MergeSession`]: merge grid plus its bounded undo history
//! - [`GravityClock`]: turns elapsed wall time into fixed ticks
//! - [`Driver`]: serializes commands and ticks into a reducer

pub mod clock;
pub mod merge_session;
pub mod reducer;

pub use tile_games_core as core;
pub use tile_games_types as types;

pub use clock::{Driver, GravityClock};
pub use merge_session::{MergeSession, SessionSnapshot};
pub use reducer::Reducer;
