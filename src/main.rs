//! Space Defender entry point
//!
//! Native builds run a headless session driven by the autopilot and print a
//! JSON summary. The browser build enters through `web::wasm_main`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use serde::Serialize;
    use space_defender::autopilot::Autopilot;
    use space_defender::platform::{init_logging, now_ms, storage::FileStore};
    use space_defender::sim::{GameEvent, GamePhase};
    use space_defender::{Game, Settings};

    /// Frame period of a 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Serialize)]
    struct Summary {
        seed: u64,
        simulated_seconds: f64,
        phase: GamePhase,
        score: u64,
        level: u32,
        lives: u32,
        best_score: u64,
        best_score_persistent: bool,
        asteroids_on_screen: usize,
    }

    init_logging();
    log::info!("Space Defender (native) starting...");

    let seconds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(60.0);
    let data_dir =
        std::env::var("SPACE_DEFENDER_DATA").unwrap_or_else(|_| ".space-defender".to_string());

    let mut store = FileStore::new(&data_dir);
    let settings = Settings::load(&store);
    // Write back so a fresh data dir gets an editable settings file
    if let Err(e) = settings.save(&mut store) {
        log::warn!("Could not write settings ({e})");
    }
    let seed = settings.seed.unwrap_or_else(|| now_ms() as u64);
    let mut game = Game::new(settings, Box::new(store), seed);
    let pilot = Autopilot::default();

    let mut now = 0.0;
    let mut snapshot = game.frame(now);
    while now < seconds * 1000.0 {
        for intent in pilot.plan(&snapshot) {
            game.push_intent(intent);
        }
        now += FRAME_MS;
        snapshot = game.frame(now);

        for event in game.drain_events() {
            match event {
                GameEvent::Message { text, .. } => log::info!("[{:>8.0} ms] {}", now, text),
                GameEvent::Haptic { .. } => {}
                other => log::debug!("[{:>8.0} ms] {:?}", now, other),
            }
        }
        if snapshot.phase == GamePhase::Ended {
            break;
        }
    }

    let summary = Summary {
        seed,
        simulated_seconds: now / 1000.0,
        phase: snapshot.phase,
        score: snapshot.score,
        level: snapshot.level,
        lives: snapshot.lives,
        best_score: game.best_score(),
        best_score_persistent: game.best_score_persistent(),
        asteroids_on_screen: snapshot.asteroids.len(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_main, this is just to satisfy the compiler
}
