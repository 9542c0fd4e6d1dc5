use crate::core::{FallingGame, FallingSnapshot, RandomSource};
use crate::types::Command;

/// `(state, command) -> state` transition surface shared by both games
///
/// `apply` and `tick` return whether anything observable changed. A command
/// a game has no meaning for is ignored and returns `false`.
pub trait Reducer {
    type Snapshot;

    fn apply(&mut self, command: Command) -> bool;

    /// One gravity clock tick; games without gravity ignore it
    fn tick(&mut self) -> bool {
        false
    }

    fn snapshot(&self) -> Self::Snapshot;
}

impl<R: RandomSource> Reducer for FallingGame<R> {
    type Snapshot = FallingSnapshot;

    fn apply(&mut self, command: Command) -> bool {
        self.apply_action(command)
    }

    fn tick(&mut self) -> bool {
        FallingGame::tick(self)
    }

    fn snapshot(&self) -> FallingSnapshot {
        FallingGame::snapshot(self)
    }
}
