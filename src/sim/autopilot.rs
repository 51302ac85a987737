//! Idle/demo steering for the player
//!
//! Picks the first step of the shortest path to the nearest collectible,
//! routing around cells held by hunting pursuers. Used for attract mode and the
//! headless runner; gameplay never depends on it.

use std::collections::{HashSet, VecDeque};

use super::motion::{Direction, Position, can_move, translate};
use super::state::{PursuerMode, RoundState};

/// Direction toward the nearest reachable collectible, if any
pub fn steer_toward_collectible(state: &RoundState) -> Option<Direction> {
    let grid = &state.grid;
    let start = state.player.position;
    let danger: HashSet<Position> = state
        .pursuers
        .iter()
        .filter(|p| p.mode == PursuerMode::Pursue)
        .map(|p| p.position)
        .collect();

    let mut seen = HashSet::from([start]);
    let mut queue: VecDeque<(Position, Direction)> = VecDeque::new();
    for dir in Direction::ALL {
        if !can_move(grid, start, dir) {
            continue;
        }
        let next = translate(start, dir, grid.width());
        if danger.contains(&next) || !seen.insert(next) {
            continue;
        }
        queue.push_back((next, dir));
    }

    while let Some((pos, first)) = queue.pop_front() {
        if grid.cell_at(pos).is_collectible() {
            return Some(first);
        }
        for dir in Direction::ALL {
            if !can_move(grid, pos, dir) {
                continue;
            }
            let next = translate(pos, dir, grid.width());
            if danger.contains(&next) || !seen.insert(next) {
                continue;
            }
            queue.push_back((next, first));
        }
    }
    None
}
