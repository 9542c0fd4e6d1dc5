//! Merge session - a merge grid with its undo history
//!
//! Every committed move pushes an owned record. Undo drops the newest record
//! and restores tiles, score and best from the one before it. Restart
//! collapses the history to the fresh start.

use crate::core::{
    GridError, History, MergeConfig, MergeGame, MergeRecord, MergeSnapshot, RandomSource,
    TileGrid,
};
use crate::reducer::Reducer;
use crate::types::{Command, HISTORY_LIMIT};

/// Merge snapshot plus the undo affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub game: MergeSnapshot,
    pub can_undo: bool,
    pub history_len: usize,
}

#[derive(Debug, Clone)]
pub struct MergeSession<R> {
    game: MergeGame<R>,
    history: History<MergeRecord>,
}

impl<R: RandomSource> MergeSession<R> {
    /// Fresh game; its start state is the first history entry
    pub fn new(config: MergeConfig, rng: R) -> Self {
        let game = MergeGame::new(config, rng);
        let mut history = History::new(HISTORY_LIMIT);
        history.push(game.record());
        Self { game, history }
    }

    /// Resume from stored entries (oldest first)
    ///
    /// No entries starts a fresh game. Every entry is checked against the
    /// grid size up front so a later undo cannot land on a malformed record.
    /// Tile-less entries are never undo targets: older ones are dropped, and
    /// a tile-less latest entry is replaced by the freshly seeded start.
    pub fn from_history(config: MergeConfig, mut entries: Vec<MergeRecord>, rng: R) -> Result<Self, GridError> {
        for entry in &entries {
            TileGrid::from_entries(config.size, entry.tiles.iter().map(|t| (t.x, t.y, t.value)))?;
        }
        let Some(latest) = entries.pop() else {
            return Ok(Self::new(config, rng));
        };
        entries.retain(|entry| !entry.tiles.is_empty());

        let game = MergeGame::from_record(config, &latest, rng)?;
        entries.push(game.record());
        let history = History::from_entries(entries, HISTORY_LIMIT);
        Ok(Self { game, history })
    }

    pub fn game(&self) -> &MergeGame<R> {
        &self.game
    }

    pub fn history(&self) -> &History<MergeRecord> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Step back one committed move; false when only one entry remains
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_latest().cloned() else {
            return false;
        };
        self.game.restore(&previous).is_ok()
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.history.reset(self.game.record());
    }
}

impl<R: RandomSource> Reducer for MergeSession<R> {
    type Snapshot = SessionSnapshot;

    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Undo => self.undo(),
            Command::Restart => {
                self.restart();
                true
            }
            other => {
                let Some(direction) = other.direction() else {
                    return false;
                };
                if !self.game.apply_move(direction) {
                    return false;
                }
                self.history.push(self.game.record());
                true
            }
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.game.snapshot(),
            can_undo: self.can_undo(),
            history_len: self.history.len(),
        }
    }
}
