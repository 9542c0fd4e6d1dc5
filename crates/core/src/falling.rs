//! Falling module - the falling-block engine
//!
//! Owns the heap, the current and next piece, scoring and the gravity
//! accumulator. Transitions come from two serialized sources: [`tick`]
//! (the fixed-rate gravity clock) and [`apply_action`] (commands).
//!
//! Phases: `Ready -> Falling <-> Paused`, `Falling -> GameOver`. Locking
//! happens inside a single tick and is never observable as a phase.
//!
//! [`tick`]: FallingGame::tick
//! [`apply_action`]: FallingGame::apply_action

use serde::{Deserialize, Serialize};

use crate::heap::Heap;
use crate::pieces::{cells_at, get_shape, kick_search, next_rotation, spawn_anchor, PieceShape};
use crate::rng::RandomSource;
use crate::scoring::{lock_score, raise_best};
use crate::snapshot::{FallingSnapshot, PieceSnapshot};
use crate::types::{
    ColorToken, Command, PieceKind, Point, BASE_FALL_MS, BOARD_COLS, BOARD_ROWS, GRAVITY_FULL,
    LOCK_BASE_SCORE, SOFT_DROP_BOOST, TICK_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Fresh or restarted; waits for `Resume`
    Ready,
    Falling,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Falling => "falling",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Board and gravity parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingConfig {
    pub cols: i32,
    pub rows: i32,
    pub tick_ms: u32,
    pub base_fall_ms: u32,
    pub gravity_full: f64,
    pub soft_drop_boost: f64,
}

impl Default for FallingConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS,
            rows: BOARD_ROWS,
            tick_ms: TICK_MS,
            base_fall_ms: BASE_FALL_MS,
            gravity_full: GRAVITY_FULL,
            soft_drop_boost: SOFT_DROP_BOOST,
        }
    }
}

impl FallingConfig {
    pub fn with_board(mut self, cols: i32, rows: i32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Accumulator gain per tick without soft drop
    pub fn gravity_gain(&self) -> f64 {
        if self.base_fall_ms == 0 || self.tick_ms == 0 {
            return self.gravity_full;
        }
        self.gravity_full / (self.base_fall_ms as f64 / self.tick_ms as f64)
    }
}

/// A piece: kind, rotation state, color and anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub color: ColorToken,
    pub anchor: Point,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: u8, color: ColorToken) -> Self {
        Self {
            kind,
            rotation: rotation % 4,
            color,
            anchor: Point::default(),
        }
    }

    /// Draw kind, rotation and color, in that order
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let kind = PieceKind::from_index(rng.next_range(PieceKind::ALL.len() as u32) as usize)
            .unwrap_or(PieceKind::O);
        let rotation = rng.next_range(4) as u8;
        let color = ColorToken::from_index(rng.next_range(ColorToken::ALL.len() as u32) as usize)
            .unwrap_or(ColorToken::Red);
        Self::new(kind, rotation, color)
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells at the anchor
    pub fn cells(&self) -> [Point; 4] {
        cells_at(&self.shape(), self.anchor)
    }

    pub fn at(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    fn snapshot(&self) -> PieceSnapshot {
        PieceSnapshot {
            kind: self.kind,
            rotation: self.rotation,
            color: self.color,
            anchor: self.anchor,
            cells: self.cells(),
        }
    }
}

/// What the most recent lock did (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_gained: u32,
    /// The locked piece reached above the board; the game is over
    pub topped_out: bool,
}

/// Complete falling-block state
#[derive(Debug, Clone)]
pub struct FallingGame<R> {
    config: FallingConfig,
    heap: Heap,
    current: Piece,
    next: Piece,
    score: u32,
    best: u32,
    phase: Phase,
    gravity_accumulator: f64,
    soft_drop_boost: f64,
    last_event: Option<LockEvent>,
    rng: R,
}

impl<R: RandomSource> FallingGame<R> {
    /// New game in `Ready` with best score 0
    pub fn new(config: FallingConfig, rng: R) -> Self {
        Self::with_best(config, 0, rng)
    }

    /// New game carrying a best score over from elsewhere
    pub fn with_best(config: FallingConfig, best: u32, mut rng: R) -> Self {
        let current = Piece::random(&mut rng);
        let next = Piece::random(&mut rng);
        let mut game = Self {
            config,
            heap: Heap::new(),
            current,
            next,
            score: 0,
            best,
            phase: Phase::Ready,
            gravity_accumulator: 0.0,
            soft_drop_boost: 0.0,
            last_event: None,
            rng,
        };
        game.current = game.spawned(current);
        game
    }

    fn spawned(&self, piece: Piece) -> Piece {
        piece.at(spawn_anchor(&piece.shape(), self.config.cols))
    }

    /// Every cell inside the side walls, above the floor, and off the heap
    ///
    /// Cells above the board (`y < 0`) are allowed.
    pub fn fits(&self, cells: &[Point; 4]) -> bool {
        cells.iter().all(|c| {
            c.x >= 0 && c.x < self.config.cols && c.y < self.config.rows && !self.heap.contains(*c)
        })
    }

    /// Apply a command; returns whether anything changed
    ///
    /// Commands meaning nothing to this engine (`MoveUp`, `MoveDown`,
    /// `Undo`) are ignored.
    pub fn apply_action(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::Rotate => self.try_rotate(),
            Command::SoftDropOn => self.set_soft_drop(self.config.soft_drop_boost),
            Command::SoftDropOff => self.set_soft_drop(0.0),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Restart => {
                self.restart();
                true
            }
            Command::MoveUp | Command::MoveDown | Command::Undo => false,
        }
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let moved = self.current.at(self.current.anchor.offset(dx, 0));
        if !self.fits(&moved.cells()) {
            return false;
        }
        self.current = moved;
        true
    }

    fn try_rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let mut rotated = self.current;
        rotated.rotation = next_rotation(rotated.rotation);
        let found = kick_search(
            &rotated.shape(),
            rotated.anchor,
            |cells| self.fits(cells),
            |point| self.heap.contains(point),
        );
        match found {
            Some(anchor) => {
                self.current = rotated.at(anchor);
                true
            }
            None => false,
        }
    }

    fn set_soft_drop(&mut self, boost: f64) -> bool {
        if self.phase == Phase::GameOver || self.soft_drop_boost == boost {
            return false;
        }
        self.soft_drop_boost = boost;
        true
    }

    fn pause(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    fn resume(&mut self) -> bool {
        if !matches!(self.phase, Phase::Ready | Phase::Paused) {
            return false;
        }
        self.phase = Phase::Falling;
        true
    }

    /// Fresh heap and pieces, score 0, best kept; waits in `Ready`
    pub fn restart(&mut self) {
        self.heap.clear();
        let current = Piece::random(&mut self.rng);
        self.next = Piece::random(&mut self.rng);
        self.current = self.spawned(current);
        self.score = 0;
        self.phase = Phase::Ready;
        self.gravity_accumulator = 0.0;
        self.soft_drop_boost = 0.0;
        self.last_event = None;
    }

    /// One gravity clock tick; returns whether the piece fell or locked
    ///
    /// Ticks outside `Falling` are ignored.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.gravity_accumulator += self.config.gravity_gain() + self.soft_drop_boost;
        if self.gravity_accumulator <= self.config.gravity_full {
            return false;
        }
        self.gravity_accumulator = 0.0;
        self.step_down();
        true
    }

    fn step_down(&mut self) {
        let lowered = self.current.at(self.current.anchor.offset(0, 1));
        if self.fits(&lowered.cells()) {
            self.current = lowered;
        } else {
            self.lock();
        }
    }

    /// Merge the current piece into the heap, clear rows, promote `next`
    fn lock(&mut self) {
        let cells = self.current.cells();
        self.heap.insert(&cells, self.current.color);
        self.gravity_accumulator = 0.0;
        self.soft_drop_boost = 0.0;

        if cells.iter().any(|c| c.y < 0) {
            self.add_score(LOCK_BASE_SCORE);
            self.phase = Phase::GameOver;
            self.last_event = Some(LockEvent {
                rows_cleared: 0,
                score_gained: LOCK_BASE_SCORE,
                topped_out: true,
            });
            return;
        }

        let rows = self
            .heap
            .complete_rows(cells.iter().map(|c| c.y), self.config.cols);
        self.heap.clear_rows(&rows);
        let gained = lock_score(rows.len());
        self.add_score(gained);
        self.last_event = Some(LockEvent {
            rows_cleared: rows.len() as u32,
            score_gained: gained,
            topped_out: false,
        });

        let upcoming = Piece::random(&mut self.rng);
        let promoted = std::mem::replace(&mut self.next, upcoming);
        self.current = self.spawned(promoted);
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.best = raise_best(self.best, self.score);
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn config(&self) -> FallingConfig {
        self.config
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Mutable heap access for setting up positions
    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    /// Replace the current piece as-is (its anchor is not re-derived)
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Paused)
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn gravity_accumulator(&self) -> f64 {
        self.gravity_accumulator
    }

    pub fn soft_drop_boost(&self) -> f64 {
        self.soft_drop_boost
    }

    pub fn snapshot(&self) -> FallingSnapshot {
        FallingSnapshot {
            cols: self.config.cols,
            rows: self.config.rows,
            current: self.current.snapshot(),
            next: self.next.snapshot(),
            heap: self.heap.cells().to_vec(),
            score: self.score,
            best: self.best,
            phase: self.phase,
            paused: self.paused(),
            game_over: self.game_over(),
        }
    }
}
