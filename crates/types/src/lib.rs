//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used by both engines, the command
//! surface, and the persistence adapter. Nothing here has behavior beyond
//! parsing and formatting.
//!
//! # Coordinates
//!
//! `(x, y)` with `x` increasing to the right and `y` increasing downward.
//! `(0, 0)` is the top-left cell. Falling pieces may carry negative `y`
//! while they are still above the visible board.
//!
//! # Falling-Block Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Gravity clock interval (~60 Hz) |
//! | `BASE_FALL_MS` | 400 | Time per row without soft drop |
//! | `GRAVITY_FULL` | 100 | Accumulator threshold for one fall step |
//! | `SOFT_DROP_BOOST` | 10 | Extra accumulator gain per tick while soft drop is held |
//!
//! With the defaults the per-tick gain is `100 / (400 / 16) = 4`.
//!
//! # Examples
//!
//! ```
//! use tile_games_types::{Command, Direction, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(Command::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(PieceKind::from_index(4), Some(PieceKind::I));
//! assert_eq!((BOARD_COLS, BOARD_ROWS), (10, 20));
//! ```

use serde::{Deserialize, Serialize};

/// Falling-block board width in cells
pub const BOARD_COLS: i32 = 10;

/// Falling-block board height in cells
pub const BOARD_ROWS: i32 = 20;

/// Gravity clock interval in milliseconds (`floor(1000 / 60)`)
pub const TICK_MS: u32 = 16;

/// Time for one row of fall at base gravity
pub const BASE_FALL_MS: u32 = 400;

/// Accumulator threshold; exceeding it triggers one downward step
pub const GRAVITY_FULL: f64 = 100.0;

/// Accumulator gain added per tick while soft drop is asserted
pub const SOFT_DROP_BOOST: f64 = 10.0;

/// Points awarded for every lock, cleared rows or not
pub const LOCK_BASE_SCORE: u32 = 10;

/// Row-clear bonus by chain length (index = rows cleared)
pub const CHAIN_BONUS: [u32; 5] = [0, 100, 200, 400, 800];

/// Default merge-grid side length
pub const MERGE_GRID_SIZE: usize = 4;

/// Tiles spawned on a fresh merge grid
pub const MERGE_INITIAL_TILES: usize = 2;

/// A spawned tile is a 4 when `next_range(FOUR_SPAWN_ODDS) == 0`, a 2 otherwise
pub const FOUR_SPAWN_ODDS: u32 = 10;

/// Maximum number of snapshots kept for undo
pub const HISTORY_LIMIT: usize = 10;

/// Delay before the first horizontal auto-repeat
pub const REPEAT_INITIAL_MS: u32 = 125;

/// Each later repeat interval is this much shorter than the previous one
pub const REPEAT_STEP_MS: u32 = 25;

/// Shortest horizontal auto-repeat interval
pub const REPEAT_FLOOR_MS: u32 = 25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_defaults_give_four_units_per_tick() {
        let gain = GRAVITY_FULL / (BASE_FALL_MS as f64 / TICK_MS as f64);
        assert_eq!(gain, 4.0);
    }

    #[test]
    fn chain_bonus_table_rewards_multi_row_clears() {
        assert_eq!(CHAIN_BONUS, [0, 100, 200, 400, 800]);
    }
}

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four slide directions of the merge grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Discrete command tokens issued by a presentation layer
///
/// Every engine accepts every command; tokens that mean nothing to a given
/// engine are ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Rotate the falling piece to its next rotation state
    Rotate,
    /// Start the soft-drop boost
    SoftDropOn,
    /// Stop the soft-drop boost
    SoftDropOff,
    Pause,
    Resume,
    /// Start a new game (best score is kept)
    Restart,
    /// Step back to the previous merge-grid snapshot
    Undo,
}

impl Command {
    /// Parse a command token (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_games_types::Command;
    ///
    /// assert_eq!(Command::from_str("softDropOn"), Some(Command::SoftDropOn));
    /// assert_eq!(Command::from_str("UNDO"), Some(Command::Undo));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "moveup" | "up" => Some(Command::MoveUp),
            "movedown" | "down" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "softdropon" => Some(Command::SoftDropOn),
            "softdropoff" => Some(Command::SoftDropOff),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "restart" => Some(Command::Restart),
            "undo" => Some(Command::Undo),
            _ => None,
        }
    }

    /// Convert to the camelCase token
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::SoftDropOn => "softDropOn",
            Command::SoftDropOff => "softDropOff",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Restart => "restart",
            Command::Undo => "undo",
        }
    }

    /// The slide direction carried by a move command
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// The seven tetromino kinds, in shape-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    S,
    Z,
    L,
    J,
    I,
    O,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
    ];

    /// Position in the shape table
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
        }
    }
}

/// Palette entry for a falling piece and the heap cells it leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    Red,
    Green,
    Blue,
    Yellow,
    Grey,
    DeepPurple,
}

impl ColorToken {
    pub const ALL: [ColorToken; 6] = [
        ColorToken::Red,
        ColorToken::Green,
        ColorToken::Blue,
        ColorToken::Yellow,
        ColorToken::Grey,
        ColorToken::DeepPurple,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Hex color a renderer can use directly
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Red => "#c62828",
            ColorToken::Green => "#66bb6a",
            ColorToken::Blue => "#0d47a1",
            ColorToken::Yellow => "#fbc02d",
            ColorToken::Grey => "#757575",
            ColorToken::DeepPurple => "#673ab7",
        }
    }
}

/// A numbered merge-grid tile at its grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

/// A settled cell of the falling-block heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeapCell {
    pub point: Point,
    pub color: ColorToken,
}
