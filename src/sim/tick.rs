//! Frame driver
//!
//! One call per display refresh. Queued intents are applied first, then the
//! world advances only while the session is running. Timers compare the
//! host's wall-clock timestamp against the last action, so spawn and shot
//! pacing follow real time rather than refresh rate.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::motion::{advance_asteroids, advance_bullets, advance_particles};
use super::session;
use super::spawn::{create_asteroid, create_bullet};
use super::state::{GameState, haptics};
use crate::consts::SHIP_SHOOT_COOLDOWN_TICKS;

/// An externally sourced request to change simulation state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Slide the ship horizontally by this many pixels
    MoveShipBy(f32),
    Fire,
    Start,
    Pause,
    Resume,
    PanelOpened,
    PanelClosed,
    TogglePanel,
    SetFieldBounds { width: f32, height: f32 },
}

/// Intents captured since the previous tick, applied in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

impl From<Vec<Intent>> for TickInput {
    fn from(intents: Vec<Intent>) -> Self {
        Self { intents }
    }
}

/// Advance the game by one frame at host time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    for &intent in &input.intents {
        apply_intent(state, intent, now_ms);
    }

    if !state.session.is_running() {
        return;
    }

    state.time_ticks += 1;

    if state.ship.shoot_cooldown_ticks > 0 {
        state.ship.shoot_cooldown_ticks -= 1;
    }

    maybe_spawn_asteroid(state, now_ms);

    advance_asteroids(&mut state.asteroids, state.field.height);
    advance_bullets(&mut state.bullets);

    resolve_collisions(state);

    advance_particles(&mut state.particles);
}

/// Apply a single intent. Intents that make no sense right now are ignored.
pub fn apply_intent(state: &mut GameState, intent: Intent, now_ms: f64) {
    match intent {
        Intent::MoveShipBy(dx) => {
            if state.session.is_running() {
                state.ship.move_by(dx, state.field);
            }
        }
        Intent::Fire => fire(state, now_ms),
        Intent::Start => session::start(state),
        Intent::Pause => {
            session::pause(state);
        }
        Intent::Resume => {
            session::resume(state);
        }
        Intent::PanelOpened => session::open_panel(state),
        Intent::PanelClosed => session::close_panel(state),
        Intent::TogglePanel => session::toggle_panel(state),
        Intent::SetFieldBounds { width, height } => state.set_field_bounds(width, height),
    }
}

/// Launch a bullet unless paused, ended, or still inside the cooldown window
pub fn fire(state: &mut GameState, now_ms: f64) {
    if !state.session.is_running() {
        return;
    }
    let cooldown = state.shoot_cooldown_ms;
    if state
        .session
        .last_shot_ms
        .is_some_and(|last| now_ms - last < cooldown)
    {
        log::trace!("Shot ignored, cooling down");
        return;
    }

    state.session.last_shot_ms = Some(now_ms);
    let bullet = create_bullet(&state.ship);
    state.bullets.push(bullet);
    state.ship.shoot_cooldown_ticks = SHIP_SHOOT_COOLDOWN_TICKS;
    state.haptic(haptics::FIRE);
}

fn maybe_spawn_asteroid(state: &mut GameState, now_ms: f64) {
    let interval = f64::from(state.session.spawn_interval_ms);
    if state
        .session
        .last_spawn_ms
        .is_none_or(|last| now_ms - last > interval)
    {
        let asteroid = create_asteroid(&mut state.rng, state.session.level, state.field.width);
        state.asteroids.push(asteroid);
        state.session.last_spawn_ms = Some(now_ms);
    }
}
