//! Clock module - fixed-timestep gravity clock and the driver loop
//!
//! Wall time arrives in arbitrary slices; gravity only understands whole
//! ticks. [`GravityClock`] carries the remainder between calls so no time is
//! lost or double counted.

use crate::reducer::Reducer;
use crate::types::{Command, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    tick_ms: u32,
    carry_ms: u32,
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl GravityClock {
    pub fn new(tick_ms: u32) -> Self {
        Self { tick_ms, carry_ms: 0 }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Add elapsed time; returns how many whole ticks are now due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.tick_ms == 0 {
            return 0;
        }
        let total = self.carry_ms.saturating_add(elapsed_ms);
        self.carry_ms = total % self.tick_ms;
        total / self.tick_ms
    }

    /// Drop any partial tick (on pause or restart)
    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }
}

/// Serializes commands and clock ticks into one reducer
///
/// Each command or tick runs to completion before the next is applied.
#[derive(Debug, Clone)]
pub struct Driver<G> {
    game: G,
    clock: GravityClock,
}

impl<G: Reducer> Driver<G> {
    pub fn new(game: G) -> Self {
        Self::with_clock(game, GravityClock::default())
    }

    pub fn with_clock(game: G, clock: GravityClock) -> Self {
        Self { game, clock }
    }

    pub fn command(&mut self, command: Command) -> bool {
        if matches!(command, Command::Pause | Command::Restart) {
            self.clock.reset();
        }
        self.game.apply(command)
    }

    /// Advance wall time; returns how many delivered ticks changed state
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.clock.advance(elapsed_ms);
        (0..due).filter(|_| self.game.tick()).count() as u32
    }

    pub fn snapshot(&self) -> G::Snapshot {
        self.game.snapshot()
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn into_inner(self) -> G {
        self.game
    }
}
