//! Game state and core simulation types
//!
//! Everything the frame driver mutates lives in [`GameState`]; the host only
//! ever sees it through a [`Snapshot`] and the drained [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Active gameplay
    Running,
    /// Simulation frozen, waiting for resume
    Paused,
    /// All lives lost; only `Start` leaves this phase
    Ended,
}

/// Render color for asteroids and particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Color {
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
    Rgb(u32),
}

impl Color {
    /// Burst color when an asteroid hits the ship
    pub const SHIP_HIT: Color = Color::Rgb(0xff0000);
    /// Burst color when an asteroid hits the planet
    pub const PLANET_HIT: Color = Color::Rgb(0xff5722);

    /// Rocky brown-orange shade used for asteroids
    pub fn asteroid(hue: f32) -> Self {
        Color::Hsl {
            hue,
            saturation: 70.0,
            lightness: 40.0,
        }
    }

    /// CSS representation for the presentation layer
    pub fn to_css(&self) -> String {
        match *self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => format!("hsl({hue:.1}, {saturation}%, {lightness}%)"),
            Color::Rgb(rgb) => format!("#{rgb:06x}"),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Play-field dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

/// The planet being defended; static for a given field size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Planet {
    pub center: Vec2,
    pub radius: f32,
}

impl Planet {
    pub fn for_field(field: Field) -> Self {
        Self {
            center: Vec2::new(field.width / 2.0, field.height - PLANET_BOTTOM_OFFSET),
            radius: PLANET_MAX_RADIUS.min(field.width / PLANET_WIDTH_DIVISOR),
        }
    }
}

/// The player's ship. Only the horizontal position changes during play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ship {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Ticks remaining on the muzzle-flash counter
    pub shoot_cooldown_ticks: u32,
}

impl Ship {
    pub fn new(field: Field) -> Self {
        let mut ship = Self {
            pos: Vec2::ZERO,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            shoot_cooldown_ticks: 0,
        };
        ship.go_home(field);
        ship
    }

    /// Center horizontally and sit at the ship line for this field
    pub fn go_home(&mut self, field: Field) {
        self.pos = Vec2::new(
            field.width / 2.0 - self.width / 2.0,
            field.height - SHIP_BOTTOM_OFFSET,
        );
    }

    /// Slide horizontally, staying inside the field
    pub fn move_by(&mut self, dx: f32, field: Field) {
        let max_x = (field.width - self.width).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// A falling asteroid, positioned by the top-left of its bounding square
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per tick, downward
    pub speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Color,
    pub vertices: u32,
}

impl Asteroid {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// A bullet fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick, upward
    pub speed: f32,
}

impl Bullet {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    /// 0-1, decreases by `decay` every tick
    pub life: f32,
    pub decay: f32,
}

/// How loud a transient message should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Danger,
    Celebration,
}

/// What took the life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeLossCause {
    Ship,
    Planet,
}

/// Vibration patterns (ms on/off) matching each gameplay beat
pub mod haptics {
    pub const FIRE: &[u32] = &[50];
    pub const ASTEROID_DESTROYED: &[u32] = &[100];
    pub const LIFE_LOST: &[u32] = &[200];
    pub const START: &[u32] = &[100];
    pub const GAME_OVER: &[u32] = &[100, 50, 100, 50, 100];
}

/// Outbound notifications, drained by the host after each tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    LevelUp {
        level: u32,
    },
    LifeLost {
        remaining: u32,
        cause: LifeLossCause,
    },
    GameOver {
        final_score: u64,
        final_level: u32,
        new_best: bool,
    },
    Message {
        text: String,
        severity: Severity,
        duration_ms: u32,
    },
    Haptic {
        pattern: &'static [u32],
    },
}

/// Per-session counters and timers
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub phase: GamePhase,
    /// Side panel currently open (forces pause while running)
    pub panel_open: bool,
    /// Whether the session was already paused when the panel opened
    pub paused_before_panel: bool,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub spawn_interval_ms: u32,
    /// Host timestamp of the last asteroid spawn; survives restarts
    pub last_spawn_ms: Option<f64>,
    /// Host timestamp of the last accepted shot
    pub last_shot_ms: Option<f64>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            panel_open: false,
            paused_before_panel: false,
            score: 0,
            lives: INITIAL_LIVES,
            level: 1,
            spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            last_spawn_ms: None,
            last_shot_ms: None,
        }
    }
}

impl Session {
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

/// Complete game state owned by the frame driver
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: Session,
    /// Best score known to this process (seeded from persistence by the host)
    pub best_score: u64,
    pub field: Field,
    pub planet: Planet,
    pub ship: Ship,
    /// Live asteroids, oldest first
    pub asteroids: Vec<Asteroid>,
    /// Live bullets, oldest first
    pub bullets: Vec<Bullet>,
    /// Visual particles
    pub particles: Vec<Particle>,
    /// Minimum wall-clock gap between shots
    pub shoot_cooldown_ms: f64,
    /// Running ticks simulated since process start
    pub time_ticks: u64,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle game on the default field with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), Field::default())
    }

    /// Create an idle game with an explicit random source and field
    pub fn with_rng(rng: Pcg32, field: Field) -> Self {
        Self {
            session: Session::default(),
            best_score: 0,
            field,
            planet: Planet::for_field(field),
            ship: Ship::new(field),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            time_ticks: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Adopt new viewport bounds. Non-positive or non-finite sizes are ignored.
    pub fn set_field_bounds(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::warn!("Ignoring invalid field bounds {width}x{height}");
            return;
        }
        self.field = Field { width, height };
        self.planet = Planet::for_field(self.field);
        self.ship.go_home(self.field);
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Queue a transient message for the presentation layer
    pub fn message(&mut self, text: impl Into<String>, severity: Severity, duration_ms: u32) {
        self.emit(GameEvent::Message {
            text: text.into(),
            severity,
            duration_ms,
        });
    }

    pub fn haptic(&mut self, pattern: &'static [u32]) {
        self.emit(GameEvent::Haptic { pattern });
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Render-ready copy of everything the presentation layer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.session.phase,
            panel_open: self.session.panel_open,
            score: self.session.score,
            lives: self.session.lives,
            level: self.session.level,
            best_score: self.best_score,
            field: self.field,
            planet: self.planet,
            ship: self.ship.clone(),
            asteroids: self.asteroids.clone(),
            bullets: self.bullets.clone(),
            particles: self.particles.clone(),
        }
    }
}

/// Outbound per-frame view of the game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub panel_open: bool,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub best_score: u64,
    pub field: Field,
    pub planet: Planet,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_with_defaults() {
        let state = GameState::new(1);
        assert_eq!(state.session.phase, GamePhase::Idle);
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.level, 1);
        assert_eq!(state.session.spawn_interval_ms, 1500);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_field_bounds_recompute_geometry() {
        let mut state = GameState::new(1);
        state.set_field_bounds(400.0, 900.0);

        assert_eq!(state.ship.pos, Vec2::new(175.0, 800.0));
        assert_eq!(state.planet.center, Vec2::new(200.0, 850.0));
        // 400 / 8 = 50 < 80
        assert!((state.planet.radius - 50.0).abs() < 0.001);

        state.set_field_bounds(1600.0, 900.0);
        assert!((state.planet.radius - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_invalid_field_bounds_ignored() {
        let mut state = GameState::new(1);
        let before = state.field;
        state.set_field_bounds(0.0, 600.0);
        state.set_field_bounds(800.0, f32::NAN);
        assert_eq!(state.field, before);
    }

    #[test]
    fn test_ship_move_clamped() {
        let field = Field {
            width: 300.0,
            height: 400.0,
        };
        let mut ship = Ship::new(field);
        ship.move_by(-1000.0, field);
        assert_eq!(ship.pos.x, 0.0);
        ship.move_by(1000.0, field);
        assert_eq!(ship.pos.x, 250.0);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::SHIP_HIT.to_css(), "#ff0000");
        assert_eq!(Color::asteroid(25.0).to_css(), "hsl(25.0, 70%, 40%)");
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1);
        state.message("hello", Severity::Info, 100);
        assert_eq!(state.pending_events().len(), 1);
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.pending_events().is_empty());
    }
}
