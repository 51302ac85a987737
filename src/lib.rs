//! Maze Chase - A tick-based maze-chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, movement, pursuers, game status)
//! - `session`: Owned round state + RNG driven by the timer and input callbacks
//! - `input`: Raw key identifiers to abstract commands
//! - `best_score`: Best-score persistence
//! - `settings`: Runtime configuration

pub mod best_score;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use best_score::BestScore;
pub use input::{InputCommand, map_key};
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed period of the external tick timer (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 110;

    /// Lives at the start of a game
    pub const STARTING_LIVES: u8 = 3;

    /// Score for a regular pellet
    pub const PELLET_SCORE: u64 = 10;
    /// Score for a power pellet
    pub const POWER_PELLET_SCORE: u64 = 50;
    /// Bonus for capturing an evadable pursuer
    pub const CAPTURE_SCORE: u64 = 200;

    /// How long pursuers stay evadable after a power pellet (ticks)
    pub const EVADABLE_TICKS: u32 = 55;
    /// Pause after losing a life before play resumes (ticks)
    pub const RESPAWN_DELAY_TICKS: u32 = 12;

    /// Probability a pursuing actor targets the player rather than its home corner
    pub const CHASE_PROBABILITY: f64 = 0.7;
}
