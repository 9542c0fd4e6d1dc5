//! Merge-grid module - the 2048 sliding/merging engine
//!
//! Every direction is resolved with one line routine, [`collapse_line`],
//! which slides toward the front of a line and merges equal neighbours:
//!
//! - Left: each row as-is
//! - Right: each row reversed, collapsed, reversed back
//! - Up / Down: the grid transposed, resolved as Left / Right, transposed back
//!
//! A direction is legal iff its result differs from the current grid.
//! Results for all four directions are computed after every committed move
//! and kept on the state, so legality lookups and game-over detection never
//! recompute them.

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::scoring::raise_best;
use crate::snapshot::{MergeRecord, MergeSnapshot, MoveFlags};
use crate::types::{Direction, Tile, FOUR_SPAWN_ODDS, MERGE_GRID_SIZE, MERGE_INITIAL_TILES};

/// Grid of tile values
pub type TileGrid = Grid<u32>;

/// Merge-grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeConfig {
    pub size: usize,
    pub initial_tiles: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            size: MERGE_GRID_SIZE,
            initial_tiles: MERGE_INITIAL_TILES,
        }
    }
}

impl MergeConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

/// Would-be outcome of one direction, not yet committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub is_legal: bool,
    pub score_delta: u32,
    pub grid: TileGrid,
}

/// The four precomputed outcomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    pub left: MoveResult,
    pub right: MoveResult,
    pub up: MoveResult,
    pub down: MoveResult,
}

impl MoveSet {
    pub fn compute(grid: &TileGrid) -> Self {
        Self {
            left: resolve(grid, Direction::Left),
            right: resolve(grid, Direction::Right),
            up: resolve(grid, Direction::Up),
            down: resolve(grid, Direction::Down),
        }
    }

    pub fn get(&self, direction: Direction) -> &MoveResult {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    pub fn any_legal(&self) -> bool {
        Direction::ALL.iter().any(|&d| self.get(d).is_legal)
    }

    pub fn flags(&self) -> MoveFlags {
        MoveFlags {
            left: self.left.is_legal,
            right: self.right.is_legal,
            up: self.up.is_legal,
            down: self.down.is_legal,
        }
    }
}

/// Slide a line toward its front, merging equal neighbours once
///
/// Returns the new line and the points gained (each merge scores the value
/// of the tile it produces). A tile produced by a merge does not merge again
/// in the same pass. A pair whose doubled value would overflow `u32` stays
/// unmerged.
pub fn collapse_line(line: &[Option<u32>]) -> (Vec<Option<u32>>, u32) {
    let mut out = vec![None; line.len()];
    let mut head = 0usize;
    let mut previous: Option<u32> = None;
    let mut gained = 0u32;

    for &value in line.iter().flatten() {
        let merged = match previous {
            Some(prev) if prev == value => value.checked_mul(2),
            _ => None,
        };
        match merged {
            Some(merged) => {
                out[head - 1] = Some(merged);
                gained = gained.saturating_add(merged);
                previous = None;
            }
            None => {
                out[head] = Some(value);
                head += 1;
                previous = Some(value);
            }
        }
    }

    (out, gained)
}

/// Collapse every row toward its front (`reversed == false`) or back
fn collapse_rows(grid: &mut TileGrid, reversed: bool) -> u32 {
    let mut gained = 0u32;
    for y in 0..grid.size() {
        let Some(row) = grid.row(y) else {
            continue;
        };
        let mut line = row.to_vec();
        if reversed {
            line.reverse();
        }
        let (mut collapsed, score) = collapse_line(&line);
        if reversed {
            collapsed.reverse();
        }
        grid.set_row(y, collapsed);
        gained = gained.saturating_add(score);
    }
    gained
}

/// Compute the outcome of sliding `grid` toward `direction`
pub fn resolve(grid: &TileGrid, direction: Direction) -> MoveResult {
    let mut moved = grid.clone();
    let transposed = matches!(direction, Direction::Up | Direction::Down);
    let reversed = matches!(direction, Direction::Right | Direction::Down);

    if transposed {
        moved.transpose();
    }
    let score_delta = collapse_rows(&mut moved, reversed);
    if transposed {
        moved.transpose();
    }

    MoveResult {
        is_legal: !moved.equals(grid),
        score_delta,
        grid: moved,
    }
}

/// No empty cell and no legal direction
pub fn is_game_over(grid: &TileGrid, moves: &MoveSet) -> bool {
    !(grid.has_empty() || moves.any_legal())
}

/// Place one tile at a uniformly random empty cell
///
/// Draws the position first, then the value (4 with odds 1 in
/// [`FOUR_SPAWN_ODDS`], else 2). Returns `None` without drawing anything
/// when the grid is full.
pub fn spawn_tile<R: RandomSource>(grid: &mut TileGrid, rng: &mut R) -> Option<Tile> {
    let empties = grid.empty_positions();
    if empties.is_empty() {
        return None;
    }
    let pick = empties[rng.next_range(empties.len() as u32) as usize];
    let value = if rng.next_range(FOUR_SPAWN_ODDS) == 0 { 4 } else { 2 };
    let (x, y) = (pick.x as usize, pick.y as usize);
    grid.set(x, y, Some(value)).ok()?;
    Some(Tile { x, y, value })
}

/// Occupied cells as tiles, row-major
pub fn tiles_of(grid: &TileGrid) -> Vec<Tile> {
    grid.occupied()
        .map(|(x, y, &value)| Tile { x, y, value })
        .collect()
}

/// Complete merge-grid state
#[derive(Debug, Clone)]
pub struct MergeGame<R> {
    config: MergeConfig,
    grid: TileGrid,
    score: u32,
    best: u32,
    moves: MoveSet,
    game_over: bool,
    rng: R,
}

impl<R: RandomSource> MergeGame<R> {
    /// Fresh game with `config.initial_tiles` spawned tiles
    pub fn new(config: MergeConfig, rng: R) -> Self {
        let mut game = Self::with_grid(config, TileGrid::new(config.size), 0, 0, rng);
        game.seed_tiles();
        game
    }

    /// Restore from a persisted record
    ///
    /// A record without tiles starts a fresh grid (keeping its score and
    /// best), matching what a first launch would show.
    pub fn from_record(config: MergeConfig, record: &MergeRecord, rng: R) -> Result<Self, GridError> {
        let grid = TileGrid::from_entries(
            config.size,
            record.tiles.iter().map(|t| (t.x, t.y, t.value)),
        )?;
        let mut game = Self::with_grid(config, grid, record.score, record.best, rng);
        if record.tiles.is_empty() {
            game.seed_tiles();
        }
        Ok(game)
    }

    fn with_grid(config: MergeConfig, grid: TileGrid, score: u32, best: u32, rng: R) -> Self {
        let moves = MoveSet::compute(&grid);
        let game_over = is_game_over(&grid, &moves);
        Self {
            config,
            grid,
            score,
            best: raise_best(best, score),
            moves,
            game_over,
            rng,
        }
    }

    fn seed_tiles(&mut self) {
        for _ in 0..self.config.initial_tiles {
            if spawn_tile(&mut self.grid, &mut self.rng).is_none() {
                break;
            }
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        self.moves = MoveSet::compute(&self.grid);
        self.game_over = is_game_over(&self.grid, &self.moves);
    }

    /// Commit a slide; returns false (and changes nothing) when illegal
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let result = self.moves.get(direction);
        if !result.is_legal {
            return false;
        }

        self.grid = result.grid.clone();
        self.score = self.score.saturating_add(result.score_delta);
        self.best = raise_best(self.best, self.score);
        spawn_tile(&mut self.grid, &mut self.rng);
        self.refresh();
        true
    }

    /// New grid and score 0; best is kept
    pub fn restart(&mut self) {
        self.grid = TileGrid::new(self.config.size);
        self.score = 0;
        self.seed_tiles();
    }

    /// Replace tiles, score and best from a record (used by undo)
    pub fn restore(&mut self, record: &MergeRecord) -> Result<(), GridError> {
        let grid = TileGrid::from_entries(
            self.config.size,
            record.tiles.iter().map(|t| (t.x, t.y, t.value)),
        )?;
        self.grid = grid;
        self.score = record.score;
        self.best = raise_best(record.best, record.score);
        self.refresh();
        Ok(())
    }

    pub fn config(&self) -> MergeConfig {
        self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn tiles(&self) -> Vec<Tile> {
        tiles_of(&self.grid)
    }

    pub fn record(&self) -> MergeRecord {
        MergeRecord {
            score: self.score,
            best: self.best,
            tiles: self.tiles(),
        }
    }

    pub fn snapshot(&self) -> MergeSnapshot {
        MergeSnapshot {
            size: self.config.size,
            score: self.score,
            best: self.best,
            tiles: self.tiles(),
            moves: self.moves.flags(),
            game_over: self.game_over,
        }
    }
}
