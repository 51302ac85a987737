//! Fixed-cadence simulation tick
//!
//! Advances the round by exactly one step. Order within a running tick:
//! steer and move the player, eat, collide (pre-move), move pursuers,
//! collide (post-move), then check for a cleared maze.

use rand::Rng;

use super::grid::CellKind;
use super::motion::{can_move, translate};
use super::pursuer::advance_pursuer;
use super::state::{GameEvent, PursuerMode, RoundState, Status};
use crate::consts::*;

/// Advance the round state by one tick.
///
/// Ready, paused, game-over, and round-won states are left untouched.
pub fn tick<R: Rng>(state: &mut RoundState, rng: &mut R) {
    match state.status {
        Status::Running => {}
        Status::LifeLost => {
            state.events.clear();
            tick_respawn(state);
            return;
        }
        Status::Ready | Status::Paused | Status::GameOver | Status::RoundWon => return,
    }

    state.events.clear();
    state.ticks += 1;

    let evadable_triggered = move_player(state);
    state.update_best_score();

    // Pass A: pursuers where they stood. A fatal hit here ends the tick before
    // anyone moves.
    if resolve_collisions(state) {
        return;
    }

    let player_pos = state.player.position;
    let grid = &state.grid;
    for pursuer in &mut state.pursuers {
        advance_pursuer(pursuer, player_pos, grid, evadable_triggered, rng);
    }

    // Pass B: a pursuer may have stepped onto the player
    if resolve_collisions(state) {
        return;
    }

    if state.collectibles_remaining == 0 {
        state.status = Status::RoundWon;
        state.events.push(GameEvent::RoundWon);
        log::info!("Level {} cleared with score {}", state.level, state.score);
    }
}

/// Count down the life-lost pause, resuming play once it runs out
fn tick_respawn(state: &mut RoundState) {
    if state.respawn_ticks > 1 {
        state.respawn_ticks -= 1;
    } else {
        state.respawn_ticks = 0;
        state.status = Status::Running;
        log::debug!("Respawned with {} lives", state.lives);
    }
}

/// Steer, move, and eat. Returns true if a power pellet was eaten.
fn move_player(state: &mut RoundState) -> bool {
    let grid = &state.grid;
    let player = &mut state.player;

    // Buffered turn: take the queued direction as soon as it opens up
    if can_move(grid, player.position, player.queued_direction) {
        player.direction = player.queued_direction;
    }
    if can_move(grid, player.position, player.direction) {
        player.position = translate(player.position, player.direction, grid.width());
    }

    let at = player.position;
    match state.grid.consume(at) {
        CellKind::Pellet => {
            state.score += PELLET_SCORE;
            state.collectibles_remaining = state.collectibles_remaining.saturating_sub(1);
            state.events.push(GameEvent::PelletEaten { at });
            false
        }
        CellKind::PowerPellet => {
            state.score += POWER_PELLET_SCORE;
            state.collectibles_remaining = state.collectibles_remaining.saturating_sub(1);
            state.events.push(GameEvent::PowerPelletEaten { at });
            log::debug!("Power pellet at ({}, {})", at.x, at.y);
            true
        }
        CellKind::Wall | CellKind::Empty => false,
    }
}

/// Resolve every pursuer sharing the player's cell, in pursuer order.
///
/// Returns true if a collision cost a life; later pursuers are not examined.
fn resolve_collisions(state: &mut RoundState) -> bool {
    let at = state.player.position;
    for index in 0..state.pursuers.len() {
        let pursuer = &mut state.pursuers[index];
        if pursuer.position != at {
            continue;
        }
        match pursuer.mode {
            PursuerMode::Evadable { .. } => {
                pursuer.capture(at);
                log::debug!("Captured {}", pursuer.id);
                state.score += CAPTURE_SCORE;
                state.update_best_score();
                state.events.push(GameEvent::PursuerCaptured { index });
            }
            PursuerMode::Retreating => {}
            PursuerMode::Pursue => {
                lose_life(state);
                return true;
            }
        }
    }
    false
}

fn lose_life(state: &mut RoundState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.status = Status::GameOver;
        state.respawn_ticks = 0;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over at level {} with score {}", state.level, state.score);
    } else {
        state.status = Status::LifeLost;
        state.respawn_ticks = RESPAWN_DELAY_TICKS;
        state.reset_actors();
        state.events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        log::info!("Life lost, {} remaining", state.lives);
    }
}
