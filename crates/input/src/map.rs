//! Key mapping from single characters to command tokens.

use crate::types::Command;

/// Map a key character to a command.
///
/// Arrow-style keys map to the four moves; the falling-block game treats a
/// held down key as soft drop and ignores up.
pub fn map_key(key: char) -> Option<Command> {
    match key {
        'a' | 'A' | 'h' | 'H' => Some(Command::MoveLeft),
        'd' | 'D' | 'l' | 'L' => Some(Command::MoveRight),
        'w' | 'W' | 'k' | 'K' => Some(Command::MoveUp),
        's' | 'S' | 'j' | 'J' => Some(Command::MoveDown),
        ' ' => Some(Command::Rotate),
        'p' | 'P' => Some(Command::Pause),
        'g' | 'G' => Some(Command::Resume),
        'n' | 'N' | 'r' | 'R' => Some(Command::Restart),
        'u' | 'U' | 'z' | 'Z' => Some(Command::Undo),
        _ => None,
    }
}

/// Check if key should quit the runner.
pub fn should_quit(key: char) -> bool {
    matches!(key, 'q' | 'Q')
}
