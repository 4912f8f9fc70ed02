//! Host-facing game wrapper
//!
//! Owns the simulation, queues intents between frames, applies settings,
//! persists the best score, and filters events for the presentation layer.

use crate::Settings;
use crate::persistence::{BestScore, KeyValueStore};
use crate::platform::{InputMapper, Key, RawInput};
use crate::sim::{GameEvent, GamePhase, GameState, Intent, Snapshot, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    best: BestScore,
    input: TickInput,
    mapper: InputMapper,
    /// Host time of the first frame, for autostart
    first_frame_ms: Option<f64>,
    autostarted: bool,
    events: Vec<GameEvent>,
}

impl Game {
    /// New idle game. The best score is read from `store`.
    pub fn new(settings: Settings, store: Box<dyn KeyValueStore>, seed: u64) -> Self {
        let best = BestScore::load(store);
        let mut state = GameState::new(seed);
        state.best_score = best.best();
        state.shoot_cooldown_ms = f64::from(settings.shoot_cooldown_ms);
        log::info!("Game initialized with seed: {}", seed);

        Self {
            state,
            settings,
            best,
            input: TickInput::default(),
            mapper: InputMapper::new(),
            first_frame_ms: None,
            autostarted: false,
            events: Vec::new(),
        }
    }

    /// Queue an intent for the next frame
    pub fn push_intent(&mut self, intent: Intent) {
        self.input.push(intent);
    }

    /// Map a platform input event into queued intents
    pub fn handle_input(&mut self, raw: RawInput) {
        self.mapper.map(raw, &self.settings, &mut self.input.intents);
    }

    /// Key press by DOM key name (`ArrowLeft`, `" "`, `Escape`, ...)
    pub fn handle_key(&mut self, name: &str) {
        match Key::from_key_name(name) {
            Key::Other => {}
            key => self.handle_input(RawInput::KeyDown(key)),
        }
    }

    /// Queue an intent sent by the host as JSON
    pub fn push_intent_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let intent: Intent = serde_json::from_str(json)?;
        self.push_intent(intent);
        Ok(())
    }

    /// Viewport resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.push_intent(Intent::SetFieldBounds { width, height });
    }

    /// Run one frame at host time `now_ms` and return what to draw
    pub fn frame(&mut self, now_ms: f64) -> Snapshot {
        let first = *self.first_frame_ms.get_or_insert(now_ms);
        if !self.autostarted && self.state.session.phase == GamePhase::Idle {
            if let Some(delay) = self.settings.autostart_delay_ms {
                if now_ms - first >= f64::from(delay) {
                    log::info!("Autostarting first session");
                    self.autostarted = true;
                    self.input.push(Intent::Start);
                }
            }
        }

        tick(&mut self.state, &self.input, now_ms);
        self.input.clear();

        for event in self.state.drain_events() {
            match &event {
                GameEvent::GameOver {
                    final_score,
                    new_best: true,
                    ..
                } => {
                    self.best.record(*final_score);
                }
                GameEvent::Haptic { .. } if !self.settings.vibration_enabled => continue,
                _ => {}
            }
            self.events.push(event);
        }

        self.state.snapshot()
    }

    /// Events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn best_score(&self) -> u64 {
        self.best.best()
    }

    /// Whether the best score still reaches storage
    pub fn best_score_persistent(&self) -> bool {
        self.best.is_persistent()
    }
}
