//! End-to-end gameplay scenarios across tick and lifecycle

use glam::IVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::*;
use crate::consts::*;

/// A single loop with a power pellet at (2,1)
fn loop_round() -> RoundState {
    let bp = LevelBlueprint::new(
        &[
            "#########", //
            "#.o.....#", //
            "#.#####.#", //
            "#.......#", //
            "#########",
        ],
        IVec2::new(1, 1),
        vec![IVec2::new(5, 3), IVec2::new(7, 3)],
    );
    let mut state = RoundState::from_blueprint(bp, 0);
    apply_command(&mut state, Command::Start);
    state
}

fn place_player(state: &mut RoundState, x: i32, y: i32, facing: Direction) {
    state.player.position = IVec2::new(x, y);
    state.player.direction = facing;
    state.player.queued_direction = facing;
}

#[test]
fn power_pellet_frightens_non_retreating_pursuers() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    place_player(&mut state, 1, 1, Direction::Right);
    state.pursuers[1].capture(IVec2::new(3, 3));

    tick(&mut state, &mut rng);

    assert_eq!(state.score, POWER_PELLET_SCORE);
    assert_eq!(state.events, vec![GameEvent::PowerPelletEaten { at: IVec2::new(2, 1) }]);
    assert_eq!(
        state.pursuers[0].mode,
        PursuerMode::Evadable {
            ticks_remaining: EVADABLE_TICKS
        }
    );
    assert!(state.pursuers[1].is_retreating());
}

#[test]
fn capturing_an_evadable_pursuer() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    place_player(&mut state, 4, 1, Direction::Right);
    state.pursuers[0].position = IVec2::new(5, 1);
    state.pursuers[0].mode = PursuerMode::Evadable { ticks_remaining: 10 };

    tick(&mut state, &mut rng);

    assert_eq!(state.score, PELLET_SCORE + CAPTURE_SCORE);
    assert_eq!(state.best_score, PELLET_SCORE + CAPTURE_SCORE);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.status, Status::Running);
    assert!(state.pursuers[0].is_retreating());
    assert!(state.pursuers[0].eyes_only);
    assert!(state.events.contains(&GameEvent::PursuerCaptured { index: 0 }));
}

#[test]
fn pursuer_frightened_this_tick_is_captured_after_it_moves() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    place_player(&mut state, 1, 1, Direction::Right);
    // Facing left with the reverse ruled out, its only move is onto the power pellet cell
    state.pursuers[0].position = IVec2::new(3, 1);
    state.pursuers[0].direction = Direction::Left;

    tick(&mut state, &mut rng);

    assert_eq!(state.player.position, IVec2::new(2, 1));
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.score, POWER_PELLET_SCORE + CAPTURE_SCORE);
    assert_eq!(state.best_score, POWER_PELLET_SCORE + CAPTURE_SCORE);
    assert!(state.pursuers[0].is_retreating());
    assert!(state.pursuers[0].eyes_only);
    assert_eq!(
        state.events,
        vec![
            GameEvent::PowerPelletEaten { at: IVec2::new(2, 1) },
            GameEvent::PursuerCaptured { index: 0 },
        ]
    );
}

#[test]
fn capture_before_a_fatal_hit_keeps_its_bonus() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    place_player(&mut state, 4, 1, Direction::Right);
    state.pursuers[0].position = IVec2::new(5, 1);
    state.pursuers[0].frighten();
    state.pursuers[1].position = IVec2::new(5, 1);

    tick(&mut state, &mut rng);

    assert_eq!(state.status, Status::LifeLost);
    assert_eq!(state.lives, STARTING_LIVES - 1);
    assert_eq!(state.score, PELLET_SCORE + CAPTURE_SCORE);
    assert_eq!(state.best_score, PELLET_SCORE + CAPTURE_SCORE);
    assert_eq!(
        state.events,
        vec![
            GameEvent::PelletEaten { at: IVec2::new(5, 1) },
            GameEvent::PursuerCaptured { index: 0 },
            GameEvent::LifeLost {
                lives_left: STARTING_LIVES - 1
            },
        ]
    );
}

#[test]
fn wrap_lane_carries_the_player_to_the_far_pellet() {
    let mut rng = Pcg32::seed_from_u64(1);
    let bp = LevelBlueprint::new(&["#####", " ....", "#####"], IVec2::new(0, 1), vec![]);
    let mut state = RoundState::from_blueprint(bp, 0);
    apply_command(&mut state, Command::Start);
    place_player(&mut state, 0, 1, Direction::Left);

    tick(&mut state, &mut rng);

    assert_eq!(state.player.position, IVec2::new(4, 1));
    assert_eq!(state.score, PELLET_SCORE);
    assert_eq!(state.collectibles_remaining, 3);
    assert_eq!(state.grid.cell_at(IVec2::new(4, 1)), CellKind::Empty);
    assert_eq!(state.events, vec![GameEvent::PelletEaten { at: IVec2::new(4, 1) }]);
}

#[test]
fn last_life_lost_is_game_over_without_reset() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    state.lives = 1;
    place_player(&mut state, 4, 1, Direction::Right);
    state.pursuers[0].position = IVec2::new(5, 1);
    let other = state.pursuers[1].position;

    tick(&mut state, &mut rng);

    assert_eq!(state.lives, 0);
    assert_eq!(state.status, Status::GameOver);
    assert_eq!(state.player.position, IVec2::new(5, 1));
    assert_eq!(state.pursuers[0].position, IVec2::new(5, 1));
    assert_eq!(state.pursuers[1].position, other);
    assert_eq!(state.respawn_ticks, 0);

    // Terminal until a command arrives
    let frozen = state.clone();
    tick(&mut state, &mut rng);
    assert_eq!(state, frozen);
}

fn one_pellet_left(state: &mut RoundState, keep: IVec2) {
    let cells: Vec<IVec2> = state
        .grid
        .cells()
        .filter(|(pos, kind)| kind.is_collectible() && *pos != keep)
        .map(|(pos, _)| pos)
        .collect();
    for pos in cells {
        let _ = state.grid.consume(pos);
    }
    state.collectibles_remaining = state.grid.collectible_count();
    assert_eq!(state.collectibles_remaining, 1);
}

#[test]
fn clearing_the_maze_wins_the_round() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    one_pellet_left(&mut state, IVec2::new(5, 1));
    place_player(&mut state, 4, 1, Direction::Right);

    tick(&mut state, &mut rng);

    assert_eq!(state.collectibles_remaining, 0);
    assert_eq!(state.status, Status::RoundWon);
    assert_eq!(state.events.last(), Some(&GameEvent::RoundWon));

    apply_command(&mut state, Command::Continue);
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.level, 2);
    assert_eq!(state.score, PELLET_SCORE);
    assert_eq!(state.collectibles_remaining, state.grid.collectible_count());
}

#[test]
fn fatal_collision_beats_clearing_the_maze() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    one_pellet_left(&mut state, IVec2::new(5, 1));
    place_player(&mut state, 4, 1, Direction::Right);
    state.pursuers[0].position = IVec2::new(5, 1);

    tick(&mut state, &mut rng);

    assert_eq!(state.collectibles_remaining, 0);
    assert_eq!(state.status, Status::LifeLost);
    assert_eq!(state.lives, STARTING_LIVES - 1);
    assert!(!state.events.contains(&GameEvent::RoundWon));
}

#[test]
fn life_lost_keeps_eaten_pellets_and_score() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    place_player(&mut state, 4, 1, Direction::Right);
    state.pursuers[0].position = IVec2::new(5, 1);
    let remaining = state.collectibles_remaining;

    tick(&mut state, &mut rng);
    assert_eq!(state.status, Status::LifeLost);
    assert_eq!(state.score, PELLET_SCORE);
    assert_eq!(state.collectibles_remaining, remaining - 1);
    assert_eq!(state.grid.cell_at(IVec2::new(5, 1)), CellKind::Empty);
    assert_eq!(state.player.position, state.player.start_position);
    for pursuer in &state.pursuers {
        assert_eq!(pursuer.position, pursuer.start_position);
    }

    for _ in 0..RESPAWN_DELAY_TICKS {
        tick(&mut state, &mut rng);
    }
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.collectibles_remaining, remaining - 1);
}

#[test]
fn reset_restocks_everything_but_best_score() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = loop_round();
    place_player(&mut state, 1, 1, Direction::Right);
    tick(&mut state, &mut rng);
    state.lives = 1;
    let best = state.best_score;
    assert!(best > 0);

    apply_command(&mut state, Command::Reset);
    assert_eq!(state.status, Status::Ready);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.score, 0);
    assert_eq!(state.best_score, best);
    assert_eq!(state.grid.cell_at(IVec2::new(2, 1)), CellKind::PowerPellet);
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_collectible_count_tracks_grid(
        seed in any::<u64>(),
        turns in prop::collection::vec(any_direction(), 1..150),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = RoundState::new(0);
        apply_command(&mut state, Command::Start);

        for dir in turns {
            if state.status != Status::Running {
                break;
            }
            apply_command(&mut state, Command::Steer(dir));
            let before = state.collectibles_remaining;
            tick(&mut state, &mut rng);

            let ate = state.events.iter().any(|e| matches!(
                e,
                GameEvent::PelletEaten { .. } | GameEvent::PowerPelletEaten { .. }
            ));
            let expected = if ate { before - 1 } else { before };
            prop_assert_eq!(state.collectibles_remaining, expected);
            prop_assert_eq!(state.collectibles_remaining, state.grid.collectible_count());
            prop_assert!(state.grid.in_bounds(state.player.position));
            for pursuer in &state.pursuers {
                prop_assert!(!state.grid.is_wall(pursuer.position));
            }
        }
    }
}
