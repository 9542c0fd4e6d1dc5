//! Programmer-error class failures
//!
//! Illegal moves and rotations are not errors; they come back as `false`.
//! Only conditions that normal play cannot produce live here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is outside a {size}x{size} grid")]
    InvalidCoordinate { x: usize, y: usize, size: usize },
}
