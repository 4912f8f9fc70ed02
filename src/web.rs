//! Browser bindings
//!
//! The page owns the `requestAnimationFrame` loop and the canvas. It calls
//! `frame(performance.now())` once per frame and draws the returned JSON
//! snapshot. Best score and settings live in LocalStorage.

use wasm_bindgen::prelude::*;

use crate::persistence::store_or_memory;
use crate::platform::storage::LocalStorage;
use crate::platform::{RawInput, init_logging, now_ms};
use crate::{Game, Settings};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Space Defender (web) starting...");
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// New game sized to the canvas
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let settings = Settings::load(&*store_or_memory(LocalStorage::open()));
        let seed = settings.seed.unwrap_or_else(|| now_ms() as u64);
        let mut game = Game::new(settings, store_or_memory(LocalStorage::open()), seed);
        game.resize(width, height);
        WebGame { game }
    }

    /// Advance one frame and return the snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsValue> {
        let snapshot = self.game.frame(now_ms);
        serde_json::to_string(&snapshot).map_err(to_js)
    }

    /// Events since the last call, as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.drain_events()).map_err(to_js)
    }

    /// Queue an intent given as JSON, e.g. `"Fire"` or `{"MoveShipBy":-8}`
    pub fn push_intent(&mut self, json: &str) -> Result<(), JsValue> {
        self.game.push_intent_json(json).map_err(to_js)
    }

    pub fn key_down(&mut self, key: &str) {
        self.game.handle_key(key);
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.game.handle_input(RawInput::PointerDown { x });
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.game.handle_input(RawInput::PointerMove { x });
    }

    pub fn pointer_up(&mut self) {
        self.game.handle_input(RawInput::PointerUp);
    }

    pub fn click(&mut self, x: f32) {
        self.game.handle_input(RawInput::Click { x });
    }

    pub fn touch_end(&mut self) {
        self.game.handle_input(RawInput::TouchEnd);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
    }

    /// Settings panel shown or hidden by the page
    pub fn set_panel_open(&mut self, open: bool) {
        self.game.push_intent(if open {
            crate::sim::Intent::PanelOpened
        } else {
            crate::sim::Intent::PanelClosed
        });
    }

    pub fn best_score(&self) -> f64 {
        self.game.best_score() as f64
    }
}
