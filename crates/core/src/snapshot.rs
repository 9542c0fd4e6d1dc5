//! Snapshot module - read-only views handed to presentation and persistence
//!
//! Every snapshot owns its data. Engines keep mutating their own grid and
//! heap after a snapshot is taken; nothing here borrows from them.

use serde::{Deserialize, Serialize};

use crate::falling::Phase;
use crate::types::{ColorToken, HeapCell, PieceKind, Point, Tile};

/// Per-direction legality for enabling controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSnapshot {
    pub size: usize,
    pub score: u32,
    pub best: u32,
    pub tiles: Vec<Tile>,
    pub moves: MoveFlags,
    pub game_over: bool,
}

impl MergeSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

/// One persisted merge-grid history entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MergeRecord {
    pub score: u32,
    pub best: u32,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub color: ColorToken,
    pub anchor: Point,
    /// Absolute cells; for the next piece these are the bare shape offsets
    pub cells: [Point; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallingSnapshot {
    pub cols: i32,
    pub rows: i32,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub heap: Vec<HeapCell>,
    pub score: u32,
    pub best: u32,
    pub phase: Phase,
    pub paused: bool,
    pub game_over: bool,
}

impl FallingSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_record_json_shape() {
        let record = MergeRecord {
            score: 12,
            best: 40,
            tiles: vec![Tile { x: 1, y: 2, value: 8 }],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"score": 12, "best": 40, "tiles": [{"x": 1, "y": 2, "value": 8}]})
        );
    }

    #[test]
    fn test_merge_snapshot_uses_camel_case() {
        let snapshot = MergeSnapshot {
            size: 4,
            score: 0,
            best: 0,
            tiles: Vec::new(),
            moves: MoveFlags::default(),
            game_over: true,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["gameOver"], serde_json::json!(true));
        assert!(!snapshot.playable());
    }
}
