//! Pursuer decision logic
//!
//! One step per tick: update the mode, pick a direction, move. Pursuers never
//! reverse unless a dead end leaves no other choice.

use rand::Rng;

use super::grid::Grid;
use super::motion::{Direction, Position, can_move, manhattan, translate};
use super::state::{Pursuer, PursuerMode};
use crate::consts::CHASE_PROBABILITY;

/// Directions that lead onto open floor from `pos`, in [`Direction::ALL`] order
pub fn legal_directions(grid: &Grid, pos: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(grid, pos, dir))
        .collect()
}

/// Pick the option whose destination is closest to `target`.
///
/// First minimum wins, so the result is stable for a given option order.
fn step_toward(grid: &Grid, from: Position, target: Position, options: &[Direction]) -> Direction {
    let mut chosen = options[0];
    let mut shortest = i32::MAX;
    for &dir in options {
        let distance = manhattan(translate(from, dir, grid.width()), target);
        if distance < shortest {
            shortest = distance;
            chosen = dir;
        }
    }
    chosen
}

/// Choose this tick's direction for a pursuer (mode already updated)
pub fn choose_direction<R: Rng>(
    pursuer: &Pursuer,
    player_pos: Position,
    grid: &Grid,
    rng: &mut R,
) -> Direction {
    let legal = legal_directions(grid, pursuer.position);
    if legal.is_empty() {
        return pursuer.direction;
    }

    let reverse = pursuer.direction.opposite();
    let forward: Vec<Direction> = legal.iter().copied().filter(|&d| d != reverse).collect();
    let options = if forward.is_empty() { &legal } else { &forward };

    match pursuer.mode {
        PursuerMode::Retreating => step_toward(grid, pursuer.position, pursuer.start_position, options),
        PursuerMode::Evadable { .. } => options[rng.random_range(0..options.len())],
        PursuerMode::Pursue => {
            let target = if rng.random_bool(CHASE_PROBABILITY) {
                player_pos
            } else {
                pursuer.home_target
            };
            step_toward(grid, pursuer.position, target, options)
        }
    }
}

/// Retreating pursuers that made it home go back to hunting
fn settle_if_home(pursuer: &mut Pursuer) {
    if pursuer.is_retreating() && pursuer.position == pursuer.start_position {
        pursuer.mode = PursuerMode::Pursue;
        pursuer.eyes_only = false;
        log::trace!("{} is home", pursuer.id);
    }
}

/// Update a pursuer's mode and move it one cell.
///
/// `evadable_triggered` is set on the tick the player ate a power pellet.
pub fn advance_pursuer<R: Rng>(
    pursuer: &mut Pursuer,
    player_pos: Position,
    grid: &Grid,
    evadable_triggered: bool,
    rng: &mut R,
) {
    if evadable_triggered && !pursuer.is_retreating() {
        pursuer.frighten();
    } else if let PursuerMode::Evadable { ticks_remaining } = pursuer.mode {
        let left = ticks_remaining.saturating_sub(1);
        pursuer.mode = if left == 0 {
            log::trace!("{} recovered", pursuer.id);
            PursuerMode::Pursue
        } else {
            PursuerMode::Evadable {
                ticks_remaining: left,
            }
        };
    }

    settle_if_home(pursuer);

    let direction = choose_direction(pursuer, player_pos, grid, rng);
    pursuer.direction = direction;
    if can_move(grid, pursuer.position, direction) {
        pursuer.position = translate(pursuer.position, direction, grid.width());
    }

    settle_if_home(pursuer);
}
