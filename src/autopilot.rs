//! Demo AI that plays the game through the same intents a player would send

use crate::sim::{Asteroid, GamePhase, Intent, Snapshot};

/// Simple threat-tracking pilot
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Max horizontal move per frame (pixels)
    pub max_step: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { max_step: 8.0 }
    }
}

impl Autopilot {
    /// Lowest on-screen asteroid: the one about to hit something
    fn most_dangerous<'a>(&self, snapshot: &'a Snapshot) -> Option<&'a Asteroid> {
        snapshot
            .asteroids
            .iter()
            .filter(|a| a.pos.y + a.size > 0.0 && a.pos.y < snapshot.ship.pos.y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    /// Intents for the next frame
    pub fn plan(&self, snapshot: &Snapshot) -> Vec<Intent> {
        let mut intents = Vec::new();
        if snapshot.phase != GamePhase::Running {
            return intents;
        }

        let Some(target) = self.most_dangerous(snapshot) else {
            return intents;
        };

        let ship_center = snapshot.ship.center().x;
        let dx = target.center().x - ship_center;
        if dx.abs() > 1.0 {
            intents.push(Intent::MoveShipBy(dx.clamp(-self.max_step, self.max_step)));
        }
        if dx.abs() < target.size / 2.0 {
            intents.push(Intent::Fire);
        }
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Color, GameState, TickInput, session, tick};
    use glam::Vec2;

    fn running_with(asteroid_x: f32) -> GameState {
        let mut state = GameState::new(3);
        session::start(&mut state);
        state.asteroids.clear();
        state.asteroids.push(Asteroid {
            pos: Vec2::new(asteroid_x, 100.0),
            size: 40.0,
            speed: 1.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            color: Color::asteroid(30.0),
            vertices: 6,
        });
        state
    }

    #[test]
    fn test_idle_does_nothing() {
        let state = GameState::new(3);
        assert!(Autopilot::default().plan(&state.snapshot()).is_empty());
    }

    #[test]
    fn test_steers_toward_threat() {
        let state = running_with(10.0);
        let intents = Autopilot::default().plan(&state.snapshot());
        assert_eq!(intents, vec![Intent::MoveShipBy(-8.0)]);
    }

    #[test]
    fn test_fires_when_aligned() {
        let state = running_with(380.0);
        let intents = Autopilot::default().plan(&state.snapshot());
        assert!(intents.contains(&Intent::Fire));
    }

    #[test]
    fn test_autopilot_scores_points() {
        let mut state = GameState::new(2024);
        let pilot = Autopilot::default();
        let mut input = TickInput::from(vec![Intent::Start]);
        let mut now = 0.0;
        for _ in 0..60 * 60 {
            tick(&mut state, &input, now);
            if !state.session.is_running() {
                break;
            }
            input = pilot.plan(&state.snapshot()).into();
            now += 1000.0 / 60.0;
        }
        assert!(state.session.score > 0);
    }
}
