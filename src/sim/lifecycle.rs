//! Game status state machine
//!
//! ```text
//! Ready -> Running <-> Paused
//! Running -> LifeLost -> Running      (while lives remain)
//! Running -> GameOver                 (start or reset to leave)
//! Running -> RoundWon                 (continue to the next level, start over)
//! ```
//!
//! Every command is defined for every status; unsupported combinations leave
//! the state untouched.

use serde::{Deserialize, Serialize};

use super::motion::Direction;
use super::state::{RoundState, Status};

/// External commands from the input side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Begin play, or begin a fresh game after game over or a cleared maze
    Start,
    /// Advance a cleared maze to the next level, keeping the score
    Continue,
    /// Running <-> Paused
    TogglePause,
    /// Back to a fresh game in Ready, keeping only the best score
    Reset,
    /// Queue a turn for the player (takes effect only while running)
    Steer(Direction),
    /// Single-key control: start, pause/resume, or leave game over
    StartOrPause,
}

/// Apply a command to the round
pub fn apply_command(state: &mut RoundState, command: Command) {
    match command {
        Command::Steer(direction) => state.player.queued_direction = direction,
        Command::Start => start(state),
        Command::Continue => continue_to_next_level(state),
        Command::TogglePause => toggle_pause(state),
        Command::Reset => {
            *state = state.restart();
            log::info!("Reset");
        }
        Command::StartOrPause => match state.status {
            Status::Ready | Status::RoundWon => start(state),
            Status::Running | Status::Paused => toggle_pause(state),
            Status::GameOver => {
                *state = state.restart();
                log::info!("Back to ready after game over");
            }
            Status::LifeLost => {}
        },
    }
}

fn start(state: &mut RoundState) {
    match state.status {
        Status::Ready => {
            state.status = Status::Running;
            log::info!("Level {} started", state.level);
        }
        Status::GameOver | Status::RoundWon => {
            *state = state.restart();
            state.status = Status::Running;
            log::info!("New game started");
        }
        Status::Running | Status::Paused | Status::LifeLost => {}
    }
}

fn continue_to_next_level(state: &mut RoundState) {
    if state.status == Status::RoundWon {
        *state = state.next_level();
        state.status = Status::Running;
        log::info!("Level {} started with score {}", state.level, state.score);
    }
}

fn toggle_pause(state: &mut RoundState) {
    match state.status {
        Status::Running => {
            state.status = Status::Paused;
            log::info!("Paused");
        }
        Status::Paused => {
            state.status = Status::Running;
            log::info!("Resumed");
        }
        _ => {}
    }
}
