//! Keyboard mapping
//!
//! Raw key identifiers (browser `KeyboardEvent.key` / `.code` style) to
//! abstract game commands. Unknown keys map to nothing.

use crate::sim::{Command, Direction};

/// Abstract input produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Steer(Direction),
    /// Space: start, pause/resume, or leave game over
    StartOrPause,
}

impl InputCommand {
    pub fn to_command(self) -> Command {
        match self {
            InputCommand::Steer(direction) => Command::Steer(direction),
            InputCommand::StartOrPause => Command::StartOrPause,
        }
    }
}

/// Map a key (and optional physical key code) to an input command
pub fn map_key(key: &str, code: Option<&str>) -> Option<InputCommand> {
    let direction = match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return Some(InputCommand::Steer(direction));
    }

    if key == " " || code == Some("Space") {
        return Some(InputCommand::StartOrPause);
    }

    None
}
