//! Text views: map engine snapshots to plain text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::{FallingSnapshot, MergeSnapshot};
use crate::engine::SessionSnapshot;
use crate::types::Point;

const EMPTY: char = '.';
const SETTLED: char = '#';
const FALLING: char = '@';

/// Merge grid, one row per line, followed by a status line.
pub fn render_merge(snap: &MergeSnapshot) -> String {
    let size = snap.size;
    let mut cells = vec![None; size * size];
    for tile in &snap.tiles {
        if tile.x < size && tile.y < size {
            cells[tile.y * size + tile.x] = Some(tile.value);
        }
    }
    let width = snap
        .tiles
        .iter()
        .map(|t| t.value.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in cells.chunks(size.max(1)) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(value) => format!("{:>width$}", value, width = width),
                None => format!("{:>width$}", EMPTY, width = width),
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }

    let moves = [
        ("left", snap.moves.left),
        ("right", snap.moves.right),
        ("up", snap.moves.up),
        ("down", snap.moves.down),
    ];
    let legal: Vec<&str> = moves.iter().filter(|(_, ok)| *ok).map(|(name, _)| *name).collect();
    let _ = writeln!(
        out,
        "score {} best {} moves [{}]{}",
        snap.score,
        snap.best,
        legal.join(","),
        if snap.game_over { " GAME OVER" } else { "" }
    );
    out
}

/// Merge session view: the grid plus the undo affordance.
pub fn render_session(snap: &SessionSnapshot) -> String {
    let mut out = render_merge(&snap.game);
    let _ = writeln!(
        out,
        "undo {} ({} saved)",
        if snap.can_undo { "on" } else { "off" },
        snap.history_len
    );
    out
}

/// Falling-block board with the current piece overlaid.
///
/// Cells of the current piece above the board are not drawn.
pub fn render_falling(snap: &FallingSnapshot) -> String {
    let cols = snap.cols.max(0);
    let rows = snap.rows.max(0);
    let mut out = String::new();

    for y in 0..rows {
        out.push('|');
        for x in 0..cols {
            let point = Point::new(x, y);
            let ch = if snap.current.cells.contains(&point) {
                FALLING
            } else if snap.heap.iter().any(|cell| cell.point == point) {
                SETTLED
            } else {
                EMPTY
            };
            out.push(ch);
        }
        out.push_str("|\n");
    }

    let _ = writeln!(
        out,
        "score {} best {} next {} {}",
        snap.score,
        snap.best,
        snap.next.kind.as_str(),
        snap.phase.as_str()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        FallingConfig, FallingGame, MergeConfig, MergeGame, MergeRecord, SequenceRng,
    };
    use crate::types::Tile;

    #[test]
    fn test_render_merge_grid_and_status() {
        let record = MergeRecord {
            score: 4,
            best: 16,
            tiles: vec![Tile { x: 0, y: 0, value: 2 }, Tile { x: 1, y: 1, value: 16 }],
        };
        let game =
            MergeGame::from_record(MergeConfig::default().with_size(2), &record, SequenceRng::new(vec![0]))
                .unwrap();
        let text = render_merge(&game.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 2  .");
        assert_eq!(lines[1], " . 16");
        assert_eq!(lines[2], "score 4 best 16 moves [left,right,up,down]");
    }

    #[test]
    fn test_render_falling_dimensions() {
        let game = FallingGame::new(
            FallingConfig::default().with_board(4, 3),
            SequenceRng::new(vec![5, 0, 0]),
        );
        let text = render_falling(&game.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "|....|");
        assert_eq!(lines[3], "score 0 best 0 next o ready");
    }
}
