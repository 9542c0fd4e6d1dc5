//! Store configuration from the environment

use std::path::PathBuf;

use crate::history::STORAGE_KEY;

pub const DEFAULT_STORE_DIR: &str = ".tile-games";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub key: String,
    pub disabled: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_STORE_DIR),
            key: STORAGE_KEY.to_string(),
            disabled: false,
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let dir = env::var("TILE_GAMES_STORE_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or_else(|| DEFAULT_STORE_DIR.to_string());

        Self {
            dir: PathBuf::from(dir),
            key: STORAGE_KEY.to_string(),
            disabled: Self::is_disabled(),
        }
    }

    /// Check if persistence is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("TILE_GAMES_PERSIST_DISABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false)
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
