//! Round state and actor types
//!
//! Everything the renderer needs each frame lives here; it is serializable so a
//! host can take a JSON snapshot without touching the simulation.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, LevelBlueprint};
use super::motion::{Direction, Position};
use crate::consts::*;

/// Lifecycle status of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Waiting for the first start command
    #[default]
    Ready,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Short respawn pause after a fatal collision
    LifeLost,
    /// Out of lives; needs reset or start
    GameOver,
    /// Every collectible consumed; start continues to the next level
    RoundWon,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ready => "ready",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::LifeLost => "life-lost",
            Status::GameOver => "game-over",
            Status::RoundWon => "round-won",
        }
    }
}

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub start_position: Position,
    /// Direction of travel
    pub direction: Direction,
    /// Last requested direction; adopted as soon as it becomes legal
    pub queued_direction: Direction,
    pub speed: f32,
}

impl Player {
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            start_position: start,
            direction: Direction::Left,
            queued_direction: Direction::Left,
            speed: 1.0,
        }
    }

    /// Back to the start cell facing left
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.direction = Direction::Left;
        self.queued_direction = Direction::Left;
    }
}

/// Pursuer behaviour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PursuerMode {
    /// Hunting the player (or drifting toward its home corner)
    #[default]
    Pursue,
    /// Frightened by a power pellet; the player can capture it
    Evadable { ticks_remaining: u32 },
    /// Captured; heading back to its start cell, harmless
    Retreating,
}

/// An autonomous pursuer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: String,
    pub name: String,
    pub color: String,
    pub position: Position,
    pub start_position: Position,
    pub direction: Direction,
    /// Fixed corner target used when not tracking the player
    pub home_target: Position,
    pub mode: PursuerMode,
    pub speed: f32,
    /// Render only the eyes (set while retreating)
    pub eyes_only: bool,
}

impl Pursuer {
    /// Build the pursuer for slot `index` of a level
    pub fn from_preset(index: usize, start: Position, grid: &Grid) -> Self {
        let preset = LevelBlueprint::preset(index);
        Self {
            id: preset.id.to_string(),
            name: preset.name.to_string(),
            color: preset.color.to_string(),
            position: start,
            start_position: start,
            direction: Direction::Left,
            home_target: preset.corner.target(grid.width(), grid.height()),
            mode: PursuerMode::Pursue,
            speed: 1.0,
            eyes_only: false,
        }
    }

    pub fn is_evadable(&self) -> bool {
        matches!(self.mode, PursuerMode::Evadable { .. })
    }

    pub fn is_retreating(&self) -> bool {
        self.mode == PursuerMode::Retreating
    }

    /// Remaining evadable ticks (0 outside evadable mode)
    pub fn evadable_ticks(&self) -> u32 {
        match self.mode {
            PursuerMode::Evadable { ticks_remaining } => ticks_remaining,
            _ => 0,
        }
    }

    /// Enter evadable mode with a full countdown
    pub fn frighten(&mut self) {
        self.mode = PursuerMode::Evadable {
            ticks_remaining: EVADABLE_TICKS,
        };
        self.eyes_only = false;
    }

    /// Captured by the player at `at`
    pub fn capture(&mut self, at: Position) {
        self.mode = PursuerMode::Retreating;
        self.eyes_only = true;
        self.position = at;
    }

    /// Back to the start cell, pursuing, facing left
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.direction = Direction::Left;
        self.mode = PursuerMode::Pursue;
        self.eyes_only = false;
    }
}

/// Something notable that happened during a tick (for sound/flash effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GameEvent {
    PelletEaten { at: Position },
    PowerPelletEaten { at: Position },
    PursuerCaptured { index: usize },
    LifeLost { lives_left: u8 },
    GameOver,
    RoundWon,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub grid: Grid,
    pub player: Player,
    /// Stable order; collision passes walk it front to back
    pub pursuers: Vec<Pursuer>,
    pub score: u64,
    pub best_score: u64,
    pub lives: u8,
    /// Pellets + power pellets still on the grid
    pub collectibles_remaining: u32,
    /// Level counter (1-based)
    pub level: u32,
    pub status: Status,
    /// Ticks left in the life-lost pause
    pub respawn_ticks: u32,
    /// Running ticks simulated on this level (life-lost pauses excluded)
    pub ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    /// Layout the round was built from (restocked on reset / new level)
    #[serde(skip)]
    pub blueprint: LevelBlueprint,
}

impl RoundState {
    /// Fresh game on the classic maze
    pub fn new(best_score: u64) -> Self {
        Self::from_blueprint(LevelBlueprint::classic(), best_score)
    }

    /// Fresh game (level 1, full lives, zero score) in `Ready`
    pub fn from_blueprint(blueprint: LevelBlueprint, best_score: u64) -> Self {
        let grid = blueprint.grid.clone();
        let pursuers = blueprint
            .pursuer_starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Pursuer::from_preset(i, start, &grid))
            .collect();
        Self {
            collectibles_remaining: grid.collectible_count(),
            player: Player::new(blueprint.player_start),
            pursuers,
            grid,
            score: 0,
            best_score,
            lives: STARTING_LIVES,
            level: 1,
            status: Status::Ready,
            respawn_ticks: 0,
            ticks: 0,
            events: Vec::new(),
            blueprint,
        }
    }

    /// Start over with a clean game, keeping only the best score
    pub fn restart(&self) -> Self {
        Self::from_blueprint(self.blueprint.clone(), self.best_score)
    }

    /// Next level: restocked grid, fresh actors, full lives, score retained
    pub fn next_level(&self) -> Self {
        let mut next = self.restart();
        next.score = self.score;
        next.level = self.level + 1;
        next
    }

    /// Return every actor to its start cell and default mode.
    ///
    /// Consumed collectibles stay consumed.
    pub fn reset_actors(&mut self) {
        self.player.reset();
        for pursuer in &mut self.pursuers {
            pursuer.reset();
        }
    }

    /// Fold the current score into the best score
    pub fn update_best_score(&mut self) {
        self.best_score = self.best_score.max(self.score);
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(0)
    }
}
