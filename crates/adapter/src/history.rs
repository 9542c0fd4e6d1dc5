//! History persistence - versioned envelope over a key-value store

use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::core::{History, MergeRecord};
use crate::store::{DisabledStore, FileStore, KvStore, StoreError};

/// Fixed key the merge-grid history lives under
pub const STORAGE_KEY: &str = "GAME2048";

/// Current envelope version; a bare legacy array reads as 0
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEnvelope {
    pub version: u32,
    /// Oldest first
    pub entries: Vec<MergeRecord>,
}

pub fn encode_history(entries: &[MergeRecord]) -> Result<String, StoreError> {
    let envelope = HistoryEnvelope {
        version: SCHEMA_VERSION,
        entries: entries.to_vec(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode either the envelope or the legacy bare array
pub fn decode_history(raw: &str) -> Result<HistoryEnvelope, StoreError> {
    let envelope = match serde_json::from_str::<HistoryEnvelope>(raw) {
        Ok(envelope) => envelope,
        Err(envelope_err) => match serde_json::from_str::<Vec<MergeRecord>>(raw) {
            Ok(entries) => HistoryEnvelope {
                version: 0,
                entries,
            },
            Err(_) => return Err(envelope_err.into()),
        },
    };
    if envelope.version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: envelope.version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(envelope)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored entries, oldest first
    Loaded(Vec<MergeRecord>),
    /// Nothing stored, or stored data could not be read
    Empty,
    Unavailable,
}

impl LoadOutcome {
    /// Entries to resume from; empty for anything but `Loaded`
    pub fn into_entries(self) -> Vec<MergeRecord> {
        match self {
            LoadOutcome::Loaded(entries) => entries,
            LoadOutcome::Empty | LoadOutcome::Unavailable => Vec::new(),
        }
    }
}

/// Saves and loads merge-grid history, absorbing every backend failure
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl HistoryStore<Box<dyn KvStore>> {
    /// File-backed store per `config`, or a disabled one
    pub fn from_config(config: &StoreConfig) -> Self {
        let store: Box<dyn KvStore> = if config.disabled {
            println!("[Store] Persistence disabled (TILE_GAMES_PERSIST_DISABLED)");
            Box::new(DisabledStore)
        } else {
            Box::new(FileStore::new(&config.dir))
        };
        HistoryStore::with_key(store, config.key.clone())
    }
}

impl<S: KvStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, history: &History<MergeRecord>) -> SaveOutcome {
        self.save_entries(&history.to_vec())
    }

    pub fn save_entries(&mut self, entries: &[MergeRecord]) -> SaveOutcome {
        let result = encode_history(entries).and_then(|raw| self.store.set(&self.key, &raw));
        match result {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                eprintln!("[Store] Save of {} failed: {}", self.key, e);
                SaveOutcome::Unavailable
            }
        }
    }

    pub fn load(&self) -> LoadOutcome {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Empty,
            Err(e) => {
                eprintln!("[Store] Load of {} failed: {}", self.key, e);
                return LoadOutcome::Unavailable;
            }
        };

        match decode_history(&raw) {
            Ok(envelope) if envelope.entries.is_empty() => LoadOutcome::Empty,
            Ok(envelope) => LoadOutcome::Loaded(envelope.entries),
            Err(e) => {
                eprintln!("[Store] Ignoring stored {}: {}", self.key, e);
                LoadOutcome::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::Tile;

    fn entry(score: u32) -> MergeRecord {
        MergeRecord {
            score,
            best: score,
            tiles: vec![Tile { x: 0, y: 0, value: 2 }],
        }
    }

    #[test]
    fn test_envelope_carries_version() {
        let raw = encode_history(&[entry(4)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], serde_json::json!(SCHEMA_VERSION));
        assert_eq!(value["entries"][0]["score"], serde_json::json!(4));
    }

    #[test]
    fn test_legacy_array_reads_as_version_zero() {
        let raw = r#"[{"score":8,"best":8,"tiles":[{"x":1,"y":1,"value":4}]}]"#;
        let envelope = decode_history(raw).unwrap();
        assert_eq!(envelope.version, 0);
        assert_eq!(envelope.entries[0].tiles[0].value, 4);
    }

    #[test]
    fn test_future_version_is_rejected() {
        let raw = r#"{"version":99,"entries":[]}"#;
        assert!(matches!(
            decode_history(raw),
            Err(StoreError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_garbage_is_an_encode_error() {
        assert!(matches!(decode_history("{not json"), Err(StoreError::Encode(_))));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = HistoryStore::new(MemoryStore::new());
        let history = History::from_entries([entry(0), entry(4)], 10);
        assert_eq!(store.save(&history), SaveOutcome::Saved);
        assert_eq!(store.load(), LoadOutcome::Loaded(vec![entry(0), entry(4)]));
    }

    #[test]
    fn test_missing_and_corrupt_data_load_empty() {
        let mut memory = MemoryStore::new();
        assert_eq!(HistoryStore::new(memory.clone()).load(), LoadOutcome::Empty);
        memory.set(STORAGE_KEY, "{broken").unwrap();
        assert_eq!(HistoryStore::new(memory).load(), LoadOutcome::Empty);
    }

    #[test]
    fn test_disabled_backend_is_unavailable() {
        let mut store = HistoryStore::new(DisabledStore);
        assert_eq!(store.save_entries(&[entry(1)]), SaveOutcome::Unavailable);
        assert_eq!(store.load(), LoadOutcome::Unavailable);
        assert!(store.load().into_entries().is_empty());
    }
}
