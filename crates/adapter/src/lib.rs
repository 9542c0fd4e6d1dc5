//! Adapter module - persistence for merge-grid history
//!
//! Saves and restores the bounded undo history as JSON under a single fixed
//! key. The engines never depend on this crate; it consumes their owned
//! [`MergeRecord`](crate::core::MergeRecord) snapshots.
//!
//! # Storage Format
//!
//! ```text
//! {"version":1,"entries":[{"score":0,"best":0,"tiles":[{"x":1,"y":2,"value":2}]}]}
//! ```
//!
//! A bare array of entries (the format written before the envelope existed)
//! is read as version 0.
//!
//! # Failure Policy
//!
//! A missing or broken backend never raises. Saves report
//! [`SaveOutcome::Unavailable`] and loads report [`LoadOutcome::Unavailable`],
//! which callers treat as "no history".
//!
//! # Environment Variables
//!
//! - `TILE_GAMES_STORE_DIR`: directory for stored keys (default: ".tile-games")
//! - `TILE_GAMES_PERSIST_DISABLED`: set to "1" or "true" to disable persistence

pub mod config;
pub mod history;
pub mod store;

pub use tile_games_core as core;
pub use tile_games_types as types;

pub use config::StoreConfig;
pub use history::{
    decode_history, encode_history, HistoryEnvelope, HistoryStore, LoadOutcome, SaveOutcome,
    SCHEMA_VERSION, STORAGE_KEY,
};
pub use store::{DisabledStore, FileStore, KvStore, MemoryStore, StoreError};
