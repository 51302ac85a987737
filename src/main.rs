//! Maze Chase entry point
//!
//! Native builds run a headless attract-mode session and print the board.
//! The browser build is driven through `maze_chase::wasm` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use maze_chase::sim::{Command, Status};
    use maze_chase::{BestScore, Session, Settings};

    env_logger::init();
    log::info!("Maze Chase (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let best_path = Path::new(&settings.best_score_path);
    let mut best = BestScore::load_from(best_path);

    log::info!(
        "Seed {}, {} ticks (~{}s of play at {}ms/tick)",
        seed,
        settings.demo_ticks,
        u64::from(settings.demo_ticks) * settings.tick_interval_ms / 1000,
        settings.tick_interval_ms
    );
    let mut session = Session::new(seed, best.value);
    session.autopilot = true;
    session.command(Command::Start);

    for _ in 0..settings.demo_ticks {
        if let Some(value) = session.on_timer() {
            if best.record(value) {
                best.save_to(best_path);
            }
        }
        let status = session.state().status;
        match status {
            Status::RoundWon => session.command(Command::Continue),
            Status::GameOver => {
                log::info!("Demo restarting after game over");
                session.command(Command::Start);
            }
            _ => {}
        }
    }

    println!("{}", render_text(session.state()));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm::init, this is just to satisfy the compiler
}

/// Plain-text frame: maze with actors drawn over it, then a status line
#[cfg(not(target_arch = "wasm32"))]
fn render_text(state: &maze_chase::sim::RoundState) -> String {
    let mut rows: Vec<Vec<char>> = state
        .grid
        .to_rows()
        .into_iter()
        .map(|row| row.chars().collect())
        .collect();
    let mut plot = |x: i32, y: i32, c: char| {
        if let Some(cell) = rows.get_mut(y as usize).and_then(|r| r.get_mut(x as usize)) {
            *cell = c;
        }
    };
    for pursuer in &state.pursuers {
        let glyph = if pursuer.eyes_only {
            '"'
        } else if pursuer.is_evadable() {
            'w'
        } else {
            pursuer.name.chars().next().unwrap_or('M')
        };
        plot(pursuer.position.x, pursuer.position.y, glyph);
    }
    plot(state.player.position.x, state.player.position.y, '@');

    let mut out: Vec<String> = rows.into_iter().map(|r| r.into_iter().collect()).collect();
    out.push(format!(
        "{}  level {}  tick {}  score {}  best {}  lives {}  left {}",
        state.status.as_str(),
        state.level,
        state.ticks,
        state.score,
        state.best_score,
        state.lives,
        state.collectibles_remaining
    ));
    out.join("\n")
}
