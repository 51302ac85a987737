//! A running game: the one owned round state plus its RNG.
//!
//! Hosts drive it from exactly two places, the tick timer and the key handler.
//! Each call runs to completion, so no partial tick is ever observable. A
//! multi-threaded host should keep the whole `Session` behind one mutex.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::map_key;
use crate::sim::{Command, RoundState, apply_command, steer_toward_collectible, tick};

pub struct Session<R: Rng = Pcg32> {
    state: RoundState,
    rng: R,
    /// Best score as last handed to persistence
    persisted_best: u64,
    /// Steer the player automatically (attract/demo mode)
    pub autopilot: bool,
}

impl Session<Pcg32> {
    /// Fresh game on the classic maze with a seeded RNG
    pub fn new(seed: u64, best_score: u64) -> Self {
        Self::with_rng(RoundState::new(best_score), Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Wrap an existing round with an injected random source
    pub fn with_rng(state: RoundState, rng: R) -> Self {
        Self {
            persisted_best: state.best_score,
            state,
            rng,
            autopilot: false,
        }
    }

    /// Read-only view for rendering
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Timer callback: advance one tick.
    ///
    /// Returns the new best score when it should be persisted.
    pub fn on_timer(&mut self) -> Option<u64> {
        if self.autopilot {
            if let Some(direction) = steer_toward_collectible(&self.state) {
                self.state.player.queued_direction = direction;
            }
        }
        tick(&mut self.state, &mut self.rng);
        self.take_best_score_change()
    }

    /// Input callback with a raw key. Unmapped keys are ignored.
    pub fn on_key(&mut self, key: &str, code: Option<&str>) {
        match map_key(key, code) {
            Some(input) => self.command(input.to_command()),
            None => log::trace!("Ignoring key {:?}", key),
        }
    }

    /// Input callback with an already-decoded command
    pub fn command(&mut self, command: Command) {
        apply_command(&mut self.state, command);
    }

    fn take_best_score_change(&mut self) -> Option<u64> {
        if self.state.best_score != self.persisted_best {
            self.persisted_best = self.state.best_score;
            Some(self.persisted_best)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, Status};

    #[test]
    fn test_keys_drive_lifecycle() {
        let mut session = Session::new(1, 0);
        session.on_key(" ", Some("Space"));
        assert_eq!(session.state().status, Status::Running);
        session.on_key("ArrowUp", None);
        assert_eq!(session.state().player.queued_direction, Direction::Up);
        session.on_key("x", None);
        session.on_key(" ", None);
        assert_eq!(session.state().status, Status::Paused);
    }

    #[test]
    fn test_best_score_change_reported_once() {
        let mut session = Session::new(1, 0);
        session.command(Command::Start);
        // Player starts facing left on a pellet row
        assert_eq!(session.on_timer(), Some(10));
        session.command(Command::TogglePause);
        assert_eq!(session.on_timer(), None);
    }

    #[test]
    fn test_autopilot_eats() {
        let mut session = Session::new(7, 0);
        session.autopilot = true;
        session.command(Command::Start);
        for _ in 0..20 {
            let _ = session.on_timer();
        }
        assert!(session.state().score > 0);
    }
}
