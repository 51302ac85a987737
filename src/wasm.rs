//! Browser bindings
//!
//! JavaScript owns the tick timer, the keydown listener, and drawing. It calls
//! into [`WasmGame`] from those two callbacks and reads a JSON snapshot each
//! animation frame.

use wasm_bindgen::prelude::*;

use crate::best_score::BestScore;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::Command;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("Maze Chase (web) starting...");
}

#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
    tick_interval_ms: u64,
}

#[wasm_bindgen]
impl WasmGame {
    /// New game; `seed` of `None` derives one from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WasmGame {
        let settings = Settings::load();
        let seed = seed
            .or(settings.seed)
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let best = BestScore::load();
        WasmGame {
            session: Session::new(seed, best.value),
            tick_interval_ms: settings.tick_interval_ms,
        }
    }

    /// Milliseconds between `tick()` calls
    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    /// Attract mode: the game steers the player
    #[wasm_bindgen(setter)]
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.session.autopilot = enabled;
    }

    /// Timer callback
    pub fn tick(&mut self) {
        if let Some(value) = self.session.on_timer() {
            BestScore::new(value).save();
        }
    }

    /// Keydown callback. Returns true if the key was used (caller should
    /// prevent the browser default).
    pub fn key_down(&mut self, key: &str, code: Option<String>) -> bool {
        let used = crate::input::map_key(key, code.as_deref()).is_some();
        self.session.on_key(key, code.as_deref());
        used
    }

    pub fn start(&mut self) {
        self.session.command(Command::Start);
    }

    /// Next level after a cleared maze
    pub fn continue_game(&mut self) {
        self.session.command(Command::Continue);
    }

    pub fn toggle_pause(&mut self) {
        self.session.command(Command::TogglePause);
    }

    pub fn reset(&mut self) {
        self.session.command(Command::Reset);
    }

    pub fn best_score(&self) -> u64 {
        self.session.state().best_score
    }

    /// Full round state as JSON for the renderer
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.session.state()).unwrap_or_default()
    }
}
