//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (no wall-clock time)
//! - Injected RNG only
//! - Stable iteration order (pursuers in spawn order)
//! - No rendering, input, or storage dependencies

pub mod autopilot;
pub mod grid;
pub mod lifecycle;
pub mod motion;
pub mod pursuer;
pub mod state;
pub mod tick;

#[cfg(test)]
mod scenarios;

pub use autopilot::steer_toward_collectible;
pub use grid::{CellKind, Grid, LevelBlueprint, PURSUER_PRESETS, PursuerPreset};
pub use lifecycle::{Command, apply_command};
pub use motion::{Direction, Position, can_move, manhattan, translate};
pub use pursuer::{advance_pursuer, choose_direction};
pub use state::{GameEvent, Player, Pursuer, PursuerMode, RoundState, Status};
pub use tick::tick;
