//! Session lifecycle: Idle -> Running <-> Paused -> Ended -> (start) Running

use super::state::{GameEvent, GamePhase, GameState, LifeLossCause, Session, Severity, haptics};

/// Reset counters and entities and begin a fresh session. Valid from any phase.
pub fn start(state: &mut GameState) {
    let last_spawn_ms = state.session.last_spawn_ms;
    state.session = Session {
        phase: GamePhase::Running,
        last_spawn_ms,
        ..Session::default()
    };
    state.asteroids.clear();
    state.bullets.clear();
    state.particles.clear();
    state.ship.go_home(state.field);
    state.ship.shoot_cooldown_ticks = 0;

    log::info!("Session started (best score {})", state.best_score);
    state.emit(GameEvent::Started);
    state.message("Destroy the asteroids!", Severity::Info, 2000);
    state.haptic(haptics::START);
}

/// Running -> Paused. Returns false when nothing changed.
pub fn pause(state: &mut GameState) -> bool {
    if state.session.phase != GamePhase::Running {
        return false;
    }
    state.session.phase = GamePhase::Paused;
    log::debug!("Paused");
    true
}

/// Paused -> Running. Ignored while the panel holds the pause.
pub fn resume(state: &mut GameState) -> bool {
    if state.session.phase != GamePhase::Paused || state.session.panel_open {
        return false;
    }
    state.session.phase = GamePhase::Running;
    log::debug!("Resumed");
    true
}

/// Panel opened: remember the prior pause state and pause a running game
pub fn open_panel(state: &mut GameState) {
    if state.session.panel_open {
        return;
    }
    state.session.paused_before_panel = state.session.phase == GamePhase::Paused;
    state.session.panel_open = true;
    if pause(state) {
        state.message("Paused", Severity::Warning, 1000);
    }
}

/// Panel closed: resume only if the panel was what paused us
pub fn close_panel(state: &mut GameState) {
    if !state.session.panel_open {
        return;
    }
    state.session.panel_open = false;
    if !state.session.paused_before_panel {
        resume(state);
    }
}

pub fn toggle_panel(state: &mut GameState) {
    if state.session.panel_open {
        close_panel(state);
    } else {
        open_panel(state);
    }
}

/// Take one life; ends the session when none remain
pub fn lose_life(state: &mut GameState, cause: LifeLossCause) {
    if !state.session.is_running() {
        return;
    }
    state.session.lives = state.session.lives.saturating_sub(1);
    let remaining = state.session.lives;
    log::info!("Life lost to {:?}, {} remaining", cause, remaining);
    state.emit(GameEvent::LifeLost { remaining, cause });
    state.haptic(haptics::LIFE_LOST);

    if remaining == 0 {
        end(state);
    } else {
        match cause {
            LifeLossCause::Ship => state.message("-1 life!", Severity::Danger, 1500),
            LifeLossCause::Planet => state.message("Planet damaged!", Severity::Warning, 1500),
        }
    }
}

/// Stop the simulation and record the best score
pub fn end(state: &mut GameState) {
    state.session.phase = GamePhase::Ended;
    let final_score = state.session.score;
    let final_level = state.session.level;
    let new_best = final_score > state.best_score;
    if new_best {
        state.best_score = final_score;
        state.message("New record!", Severity::Celebration, 3000);
    }
    log::info!(
        "Game over: score {} level {}{}",
        final_score,
        final_level,
        if new_best { " (new best)" } else { "" }
    );
    state.emit(GameEvent::GameOver {
        final_score,
        final_level,
        new_best,
    });
    state.haptic(haptics::GAME_OVER);
}
