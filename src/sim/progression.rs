//! Score, level thresholds and spawn pacing

use super::state::{GameEvent, GameState, Session, Severity};
use crate::consts::*;

/// Spawn interval for a level: 1500 ms minus 100 ms per level, floored at 300 ms
pub fn spawn_interval_for_level(level: u32) -> u32 {
    INITIAL_SPAWN_INTERVAL_MS
        .saturating_sub(level.saturating_mul(SPAWN_INTERVAL_STEP_MS))
        .max(MIN_SPAWN_INTERVAL_MS)
}

/// Points for destroying an asteroid; small rocks are worth more
pub fn asteroid_points(size: f32) -> u64 {
    (ASTEROID_BASE_POINTS - size).floor().max(0.0) as u64
}

impl Session {
    /// Add points and check the level threshold once.
    ///
    /// Returns the new level if this award crossed `level * 1000`. A single
    /// large award advances at most one level.
    pub fn award(&mut self, points: u64) -> Option<u32> {
        self.score += points;
        if self.score >= u64::from(self.level) * POINTS_PER_LEVEL {
            self.level += 1;
            self.spawn_interval_ms = spawn_interval_for_level(self.level);
            Some(self.level)
        } else {
            None
        }
    }
}

/// Award points and announce any level-up
pub fn award_score(state: &mut GameState, points: u64) {
    if let Some(level) = state.session.award(points) {
        log::info!(
            "Level {} reached at score {} (spawn interval {} ms)",
            level,
            state.session.score,
            state.session.spawn_interval_ms
        );
        state.emit(GameEvent::LevelUp { level });
        state.message(format!("Level {level}!"), Severity::Info, 2000);
    }
}
