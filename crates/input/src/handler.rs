//! Auto-repeat input handler.
//!
//! Holding left or right issues the move immediately, repeats it after
//! `initial_ms`, and shortens every later interval by `step_ms` down to
//! `floor_ms`. Holding down asserts soft drop until release. Everything is
//! driven by elapsed time passed to [`InputHandler::update`], never by a
//! wall clock.

use arrayvec::ArrayVec;

use crate::types::{Command, REPEAT_FLOOR_MS, REPEAT_INITIAL_MS, REPEAT_STEP_MS};

/// Horizontal auto-repeat timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatConfig {
    pub initial_ms: u32,
    pub step_ms: u32,
    pub floor_ms: u32,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            initial_ms: REPEAT_INITIAL_MS,
            step_ms: REPEAT_STEP_MS,
            floor_ms: REPEAT_FLOOR_MS,
        }
    }
}

impl RepeatConfig {
    /// Interval following one of length `current`.
    pub fn next_interval(&self, current: u32) -> u32 {
        current.saturating_sub(self.step_ms).max(self.floor_ms).max(1)
    }
}

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    fn command(self) -> Option<Command> {
        match self {
            HorizontalDirection::Left => Some(Command::MoveLeft),
            HorizontalDirection::Right => Some(Command::MoveRight),
            HorizontalDirection::None => None,
        }
    }
}

/// Tracks held keys for auto-repeat.
#[derive(Debug, Clone)]
pub struct InputHandler {
    config: RepeatConfig,
    horizontal: HorizontalDirection,
    repeat_timer_ms: u32,
    interval_ms: u32,
    soft_drop_held: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(RepeatConfig::default())
    }

    pub fn with_config(config: RepeatConfig) -> Self {
        Self {
            config,
            horizontal: HorizontalDirection::None,
            repeat_timer_ms: 0,
            interval_ms: config.initial_ms.max(1),
            soft_drop_held: false,
        }
    }

    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// A key went down; returns the command to issue now, if any.
    ///
    /// `MoveDown` becomes `SoftDropOn`. Repeated presses of a key already
    /// held issue nothing. Non-repeating commands pass straight through.
    pub fn handle_press(&mut self, command: Command) -> Option<Command> {
        match command {
            Command::MoveLeft => self.hold_horizontal(HorizontalDirection::Left),
            Command::MoveRight => self.hold_horizontal(HorizontalDirection::Right),
            Command::MoveDown | Command::SoftDropOn => {
                if self.soft_drop_held {
                    None
                } else {
                    self.soft_drop_held = true;
                    Some(Command::SoftDropOn)
                }
            }
            other => Some(other),
        }
    }

    /// A key went up; returns the command to issue now, if any.
    pub fn handle_release(&mut self, command: Command) -> Option<Command> {
        match command {
            Command::MoveLeft => {
                self.release_horizontal(HorizontalDirection::Left);
                None
            }
            Command::MoveRight => {
                self.release_horizontal(HorizontalDirection::Right);
                None
            }
            Command::MoveDown | Command::SoftDropOn | Command::SoftDropOff => {
                if self.soft_drop_held {
                    self.soft_drop_held = false;
                    Some(Command::SoftDropOff)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn hold_horizontal(&mut self, direction: HorizontalDirection) -> Option<Command> {
        if self.horizontal == direction {
            return None;
        }
        self.horizontal = direction;
        self.repeat_timer_ms = 0;
        self.interval_ms = self.config.initial_ms.max(1);
        direction.command()
    }

    fn release_horizontal(&mut self, direction: HorizontalDirection) {
        if self.horizontal == direction {
            self.horizontal = HorizontalDirection::None;
            self.repeat_timer_ms = 0;
            self.interval_ms = self.config.initial_ms.max(1);
        }
    }

    /// Release everything (focus loss, pause, restart).
    pub fn reset(&mut self) -> Option<Command> {
        self.release_horizontal(self.horizontal);
        self.handle_release(Command::MoveDown)
    }

    /// Advance time; returns the repeats that came due, in order.
    ///
    /// A held soft drop is re-asserted on every update, since the engine
    /// drops the boost whenever a piece locks.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Command, 32> {
        let mut commands = ArrayVec::<Command, 32>::new();
        if self.soft_drop_held {
            commands.push(Command::SoftDropOn);
        }

        let Some(command) = self.horizontal.command() else {
            return commands;
        };

        self.repeat_timer_ms = self.repeat_timer_ms.saturating_add(elapsed_ms);
        while self.repeat_timer_ms >= self.interval_ms {
            self.repeat_timer_ms -= self.interval_ms;
            self.interval_ms = self.config.next_interval(self.interval_ms);
            if commands.try_push(command).is_err() {
                // A huge time slice; the backlog beyond capacity is dropped.
                self.repeat_timer_ms = 0;
                break;
            }
        }

        commands
    }
}
